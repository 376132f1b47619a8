//! Idle/demo mode - an AI that plays whichever game is running
//!
//! Produces a button snapshot from the current state, so a headless run
//! exercises the full input path without anyone at the board.

use crate::sim::{Direction, Game, InvadersState, TickInput};

/// Paddle dead zone around the ball (pixels)
const TRACK_SLACK: i32 = 2;
/// Barrel alignment needed before the invaders AI pulls the trigger
const AIM_SLACK: i32 = 2;
/// Turret sweep range for the tank AI (degrees)
const SWEEP_MIN: i32 = -160;
const SWEEP_MAX: i32 = -20;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Tank sweep heading: true while rotating toward -180
    sweeping_up: bool,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_for(&mut self, game: &Game) -> TickInput {
        match game {
            Game::Pong(s) => track(s.paddle.pos.y, s.paddle.height, s.ball.pos.y),
            Game::Bounce(s) => track(s.paddle.pos.y, s.paddle.height, s.ball.pos.y),
            Game::Invaders(s) => aim_invaders(s),
            Game::Tank(s) => {
                let angle = s.tank.angle;
                if angle <= SWEEP_MIN {
                    self.sweeping_up = false;
                } else if angle >= SWEEP_MAX {
                    self.sweeping_up = true;
                }
                TickInput {
                    up: self.sweeping_up,
                    down: !self.sweeping_up,
                    fire: s.tank.bullet.is_ready(),
                }
            }
        }
    }
}

/// Keep the paddle centre on the ball row
fn track(paddle_y: i32, paddle_height: i32, ball_y: i32) -> TickInput {
    let centre = paddle_y + paddle_height / 2;
    TickInput {
        up: ball_y < centre - TRACK_SLACK,
        down: ball_y > centre + TRACK_SLACK,
        fire: false,
    }
}

/// Line the barrel up with where the lowest enemy will be when the shot
/// arrives, and fire once aligned
fn aim_invaders(state: &InvadersState) -> TickInput {
    let tuning = &state.tuning;
    let barrel_x = state.gun.pos.x + tuning.barrel_offset;

    let Some(target) = state
        .formation
        .enemies
        .iter()
        .max_by_key(|e| (e.pos.y, -(e.pos.x - barrel_x).abs()))
    else {
        return TickInput::default();
    };

    let flight_ticks = ((state.gun.pos.y - target.pos.y) as f32 / tuning.bullet_speed) as i32;
    let drift = match state.formation.direction {
        Direction::Left => -tuning.enemy_speed,
        Direction::Right => tuning.enemy_speed,
    };
    let aim_x = target.pos.x + crate::sim::HIT_BOX.x / 2 + drift * flight_ticks;
    let offset = aim_x - barrel_x;

    TickInput {
        up: offset < -AIM_SLACK,
        down: offset > AIM_SLACK,
        fire: offset.abs() <= AIM_SLACK * 4 && state.gun.bullet.is_ready(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Variant;
    use crate::tuning::Tuning;

    #[test]
    fn test_pong_tracks_ball() {
        let mut game = Game::new(Variant::Pong, 1, &Tuning::default());
        let mut pilot = Autopilot::new();
        if let Game::Pong(s) = &mut game {
            s.paddle.pos.y = 120;
            s.ball.pos.y = 60;
        }
        let input = pilot.input_for(&game);
        assert!(input.up && !input.down && !input.fire);
    }

    #[test]
    fn test_pong_autopilot_blocks_most_balls() {
        let mut game = Game::new(Variant::Pong, 11, &Tuning::default());
        let mut pilot = Autopilot::new();
        for _ in 0..5000 {
            let input = pilot.input_for(&game);
            game.tick(&input);
        }
        // Paddle moves 5 px per tick against a 1 px ball: it never falls behind
        assert_eq!(game.fails(), Some(0));
    }

    #[test]
    fn test_tank_sweeps_and_fires() {
        let mut game = Game::new(Variant::Tank, 1, &Tuning::default());
        let mut pilot = Autopilot::new();
        let mut angles = Vec::new();
        let mut shots = 0;
        for _ in 0..400 {
            let input = pilot.input_for(&game);
            let events = game.tick(&input);
            shots += events
                .iter()
                .filter(|e| **e == crate::sim::GameEvent::ShotFired)
                .count();
            if let Game::Tank(s) = &game {
                angles.push(s.tank.angle);
            }
        }
        assert!(shots > 1);
        assert!(angles.iter().any(|a| *a <= SWEEP_MIN));
        assert!(angles.iter().any(|a| *a >= SWEEP_MAX));
    }

    #[test]
    fn test_invaders_moves_toward_lead_point() {
        let game = Game::new(Variant::Invaders, 1, &Tuning::default());
        let mut pilot = Autopilot::new();
        let Game::Invaders(s) = &game else {
            unreachable!()
        };
        let input = pilot.input_for(&game);
        // Gun starts at 160 and the lowest row drifts right
        assert_eq!(s.formation.direction, Direction::Right);
        assert!(input.down);
        assert!(!input.up);
    }
}

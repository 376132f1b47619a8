//! Full-screen bounce demo: a ball off every edge and a free paddle

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::pong::CENTER;
use super::state::{Ball, Bounds, GameEvent, Paddle};
use super::tick::TickInput;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::tuning::PongTuning;

/// Paddle column for the demo
const DEMO_PADDLE_X: i32 = 1;

#[derive(Debug, Clone)]
pub struct BounceState {
    pub paddle: Paddle,
    pub ball: Ball,
    pub tuning: PongTuning,
    pub time_ticks: u64,
}

impl BounceState {
    pub fn new(seed: u64, tuning: PongTuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut ball = Ball::new(CENTER, IVec2::ONE, tuning.ball_radius);
        ball.reset(CENTER, &mut rng);
        Self {
            paddle: Paddle::new(
                IVec2::new(DEMO_PADDLE_X, SCREEN_HEIGHT / 2),
                tuning.paddle_width,
                tuning.paddle_height,
            ),
            ball,
            tuning,
            time_ticks: 0,
        }
    }

    pub fn ball_bounds(&self) -> Bounds {
        let r = self.ball.radius;
        Bounds::new(
            IVec2::splat(r),
            IVec2::new(SCREEN_WIDTH - r, SCREEN_HEIGHT - r),
        )
    }

    /// The paddle is decorative here; the ball never collides with it.
    pub fn tick(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.time_ticks += 1;

        let bounds = self.ball_bounds();
        if self.ball.bounce_within(&bounds).any() {
            events.push(GameEvent::WallBounce);
        }
        self.ball.advance();

        self.paddle.handle_input(
            input.up,
            input.down,
            self.tuning.paddle_speed,
            0,
            SCREEN_HEIGHT,
        );
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_stays_near_screen() {
        let mut state = BounceState::new(3, PongTuning::default());
        for _ in 0..5000 {
            state.tick(&TickInput::default());
            // At most one step of overshoot past the bound
            assert!(state.ball.pos.x >= 4 && state.ball.pos.x <= SCREEN_WIDTH - 4);
            assert!(state.ball.pos.y >= 4 && state.ball.pos.y <= SCREEN_HEIGHT - 4);
        }
    }

    #[test]
    fn test_paddle_reaches_both_edges() {
        let mut state = BounceState::new(3, PongTuning::default());
        let up = TickInput {
            up: true,
            ..Default::default()
        };
        for _ in 0..100 {
            state.tick(&up);
        }
        assert_eq!(state.paddle.pos.y, 0);

        let down = TickInput {
            down: true,
            ..Default::default()
        };
        for _ in 0..100 {
            state.tick(&down);
        }
        assert_eq!(state.paddle.pos.y, SCREEN_HEIGHT - state.paddle.height);
    }
}

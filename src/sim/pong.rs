//! Single-paddle pong against three walls

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::circle_rect_overlap;
use super::state::{Ball, Bounds, GameEvent, Paddle};
use super::tick::TickInput;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::tuning::PongTuning;

/// Screen centre, where the ball (re)spawns
pub const CENTER: IVec2 = IVec2::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2);

#[derive(Debug, Clone)]
pub struct PongState {
    pub paddle: Paddle,
    pub ball: Ball,
    /// Balls that got past the paddle
    pub fails: u32,
    pub tuning: PongTuning,
    pub time_ticks: u64,
    rng: Pcg32,
}

impl PongState {
    pub fn new(seed: u64, tuning: PongTuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let paddle = Paddle::new(
            IVec2::new(tuning.paddle_x, SCREEN_HEIGHT / 2),
            tuning.paddle_width,
            tuning.paddle_height,
        );
        let mut ball = Ball::new(CENTER, IVec2::ONE, tuning.ball_radius);
        ball.reset(CENTER, &mut rng);

        Self {
            paddle,
            ball,
            fails: 0,
            tuning,
            time_ticks: 0,
            rng,
        }
    }

    /// Positions the ball centre may occupy without bouncing
    pub fn ball_bounds(&self) -> Bounds {
        let inset = self.tuning.field_margin + self.ball.radius;
        Bounds::new(
            IVec2::splat(inset),
            IVec2::new(SCREEN_WIDTH - inset, SCREEN_HEIGHT - inset),
        )
    }

    pub fn tick(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.time_ticks += 1;

        let margin = self.tuning.field_margin;
        self.paddle.handle_input(
            input.up,
            input.down,
            self.tuning.paddle_speed,
            margin,
            SCREEN_HEIGHT - margin,
        );

        let bounds = self.ball_bounds();
        if self.ball.bounce_within(&bounds).any() {
            events.push(GameEvent::WallBounce);
        }

        if self.ball.pos.x <= self.tuning.paddle_zone
            && circle_rect_overlap(
                self.ball.as_circle(),
                self.paddle.hit_box(),
                self.tuning.collision_tolerance,
            )
        {
            self.ball.reflect_x();
            events.push(GameEvent::PaddleHit);
        }

        if self.ball.pos.x - self.ball.radius < margin {
            self.fails += 1;
            log::debug!("Ball missed at y={} (fails: {})", self.ball.pos.y, self.fails);
            events.push(GameEvent::BallMissed);
            if self.tuning.respawn_on_miss {
                self.ball.reset(CENTER, &mut self.rng);
            }
        }

        self.ball.advance();
        events
    }
}

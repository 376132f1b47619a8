//! Data-driven game balance
//!
//! Every constant a variant uses lives here so settings files can override
//! them. Defaults reproduce the board firmware exactly.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Pong and bounce-demo balance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PongTuning {
    /// Distance from each screen edge to the field walls
    pub field_margin: i32,
    /// Paddle step per tick
    pub paddle_speed: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    /// Fixed paddle column
    pub paddle_x: i32,
    pub ball_radius: i32,
    /// Extra reach added to the paddle hit-box
    pub collision_tolerance: f32,
    /// Ball x at or below which the paddle is tested
    pub paddle_zone: i32,
    /// Respawn the ball at centre after a miss (otherwise reflect off the wall)
    pub respawn_on_miss: bool,
}

impl Default for PongTuning {
    fn default() -> Self {
        Self {
            field_margin: 25,
            paddle_speed: 5,
            paddle_width: 5,
            paddle_height: 20,
            paddle_x: 28,
            ball_radius: 5,
            collision_tolerance: 5.0,
            paddle_zone: 35,
            respawn_on_miss: true,
        }
    }
}

/// Invaders balance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InvadersTuning {
    pub enemy_count: usize,
    /// Top-left of the first enemy in a fresh wave
    pub wave_origin: IVec2,
    /// Horizontal gap between enemy origins
    pub enemy_spacing: i32,
    /// Formation sweep per tick
    pub enemy_speed: i32,
    /// Drop applied on the tick the formation turns at the right margin
    pub enemy_down_step: i32,
    /// Leftmost enemy x below which the sweep turns right
    pub left_margin: i32,
    /// Distance from the right edge past which the sweep turns left
    pub right_margin: i32,
    /// Distance from the bottom edge past which an enemy costs a life
    pub bottom_margin: i32,
    pub gun_speed: i32,
    /// Gun x range is `[gun_min_x, width - gun_right_margin]`
    pub gun_min_x: i32,
    pub gun_right_margin: i32,
    /// Distance from the bottom edge to the gun sprite origin
    pub gun_bottom_offset: i32,
    /// Bullet spawn offset from the gun origin (barrel column)
    pub barrel_offset: i32,
    pub bullet_speed: f32,
    /// Bullet returns to ready once its y drops below this
    pub bullet_ceiling: i32,
    pub lives: u32,
    pub hit_score: u32,
    pub wave_bonus: u32,
}

impl Default for InvadersTuning {
    fn default() -> Self {
        Self {
            enemy_count: 8,
            wave_origin: IVec2::new(100, 20),
            enemy_spacing: 15,
            enemy_speed: 2,
            enemy_down_step: 5,
            left_margin: 5,
            right_margin: 16,
            bottom_margin: 20,
            gun_speed: 5,
            gun_min_x: 5,
            gun_right_margin: 15,
            gun_bottom_offset: 10,
            barrel_offset: 6,
            bullet_speed: 8.0,
            bullet_ceiling: 15,
            lives: 3,
            hit_score: 1,
            wave_bonus: 10,
        }
    }
}

/// Tank artillery balance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TankTuning {
    /// Turret pivot x
    pub center_x: i32,
    /// Pivot height above the ground line
    pub pivot_lift: i32,
    /// Initial turret angle (degrees, 0 = right, -90 = straight up)
    pub start_angle: i32,
    /// Degrees per tick
    pub rotation_speed: i32,
    pub gun_length: f32,
    pub bullet_speed: f32,
    pub lives: u32,
}

impl Default for TankTuning {
    fn default() -> Self {
        Self {
            center_x: 100,
            pivot_lift: 6,
            start_angle: -45,
            rotation_speed: 2,
            gun_length: 15.0,
            bullet_speed: 5.0,
            lives: 3,
        }
    }
}

/// All variant tuning tables
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Tuning {
    pub pong: PongTuning,
    pub invaders: InvadersTuning,
    pub tank: TankTuning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning: Tuning =
            serde_json::from_str(r#"{ "pong": { "respawn_on_miss": false } }"#).unwrap();
        assert!(!tuning.pong.respawn_on_miss);
        assert_eq!(tuning.pong.paddle_speed, 5);
        assert_eq!(tuning.invaders, InvadersTuning::default());
    }
}

//! Pico Arcade - small arcade games for a 320x240 button board
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, per-variant ticks)
//! - `platform`: Display and button capabilities, scripted and autopilot input
//! - `renderer`: Scene drawing and the software framebuffer
//! - `frame`: Frame loop driver
//! - `tuning`: Data-driven game balance
//! - `settings`: Run configuration

pub mod frame;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use frame::{FrameOutcome, GameContext, RunSummary};
pub use settings::{Settings, SettingsError};
pub use sim::Variant;
pub use tuning::Tuning;

use glam::{IVec2, Vec2};

/// Board configuration constants
pub mod consts {
    /// Display dimensions in pixels
    pub const SCREEN_WIDTH: i32 = 320;
    pub const SCREEN_HEIGHT: i32 = 240;
}

/// Unit heading for an angle in radians.
#[inline]
pub fn direction_from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Step `position` by `speed` along `direction`, rounding each axis to the
/// nearest pixel (ties to even).
#[inline]
pub fn advance(position: IVec2, direction: Vec2, speed: f32) -> IVec2 {
    let step = direction * speed;
    position
        + IVec2::new(
            step.x.round_ties_even() as i32,
            step.y.round_ties_even() as i32,
        )
}

/// End point of a barrel of `length` pivoting at `pivot` (truncated toward zero)
#[inline]
pub fn turret_tip(pivot: IVec2, angle: f32, length: f32) -> IVec2 {
    let tip = pivot.as_vec2() + direction_from_angle(angle) * length;
    IVec2::new(tip.x as i32, tip.y as i32)
}

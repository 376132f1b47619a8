//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed tick per call, no wall clock
//! - Seeded RNG only
//! - No display or button types, only input snapshots

pub mod bounce;
pub mod collision;
pub mod invaders;
pub mod pong;
pub mod state;
pub mod tank;
pub mod tick;

pub use bounce::BounceState;
pub use collision::{Circle, HIT_BOX, Rect, circle_rect_overlap, point_in_box, point_in_rect};
pub use invaders::{Formation, InvadersState};
pub use pong::PongState;
pub use state::{
    Ball, Bounds, Bullet, BulletState, Direction, Enemy, GameEvent, GamePhase, Gun, Interface,
    Paddle,
};
pub use tank::{Building, GROUND_Y, Tank, TankState};
pub use tick::{Game, TickInput, Variant};

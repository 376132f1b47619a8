//! Collision predicates
//!
//! Two tests cover every variant: a fixed hit-box point test for bullets
//! against enemies, and a closest-point circle test for the ball against the
//! paddle.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Enemy hit-box, anchored at the sprite origin
pub const HIT_BOX: IVec2 = IVec2::new(10, 8);

/// Axis-aligned rectangle (origin is the top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Closest point inside the rectangle to `p`
    #[inline]
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.x, self.x + self.width),
            p.y.clamp(self.y, self.y + self.height),
        )
    }
}

/// A circle by centre and radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Strict interior test against a box of `size` at `origin`.
///
/// Points on the box edge are outside.
#[inline]
pub fn point_in_box(point: IVec2, origin: IVec2, size: IVec2) -> bool {
    let far = origin + size;
    origin.x < point.x && point.x < far.x && origin.y < point.y && point.y < far.y
}

/// Strict interior test against the fixed enemy [`HIT_BOX`]
#[inline]
pub fn point_in_rect(point: IVec2, rect_origin: IVec2) -> bool {
    point_in_box(point, rect_origin, HIT_BOX)
}

/// Circle against rectangle, widened by `tolerance`.
///
/// Discrete per-tick motion can step over the exact contact frame, so the
/// tolerance gives the paddle a little extra reach.
pub fn circle_rect_overlap(circle: Circle, rect: Rect, tolerance: f32) -> bool {
    let closest = rect.clamp_point(circle.center);
    circle.center.distance(closest) <= circle.radius + tolerance
}

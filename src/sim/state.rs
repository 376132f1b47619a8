//! Shared entity types and their per-tick updates
//!
//! Variant modules compose these; nothing here knows which game it is in.

use glam::{BVec2, IVec2, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Circle, Rect};
use crate::advance;

/// Current phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Terminal; no further transitions
    GameOver,
}

/// Things that happened during one tick, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off a field bound
    WallBounce,
    PaddleHit,
    /// Ball got past the paddle
    BallMissed,
    ShotFired,
    /// Shot left its flight area without hitting anything
    ShotExpired,
    EnemyShot { id: u32 },
    /// Formation was empty and a new wave spawned
    WaveCleared,
    /// An enemy reached the bottom threshold
    FormationBreached,
    /// Formation turned at the right margin and dropped a row
    FormationDescended,
    GameOver,
}

/// Inclusive rectangle of allowed positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: IVec2,
    pub max: IVec2,
}

impl Bounds {
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    /// Per-axis containment
    #[inline]
    pub fn contains_axes(&self, p: IVec2) -> BVec2 {
        p.cmpge(self.min) & p.cmple(self.max)
    }

    #[inline]
    pub fn contains(&self, p: IVec2) -> bool {
        self.contains_axes(p).all()
    }
}

/// Vertical paddle driven by two buttons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: IVec2,
    pub width: i32,
    pub height: i32,
}

impl Paddle {
    pub fn new(pos: IVec2, width: i32, height: i32) -> Self {
        Self { pos, width, height }
    }

    /// Move by `step` and clamp to `[top, bottom - height]`
    pub fn handle_input(&mut self, up: bool, down: bool, step: i32, top: i32, bottom: i32) {
        let lowest = (bottom - self.height).max(top);
        if up {
            self.pos.y -= step;
        }
        if down {
            self.pos.y += step;
        }
        self.pos.y = self.pos.y.clamp(top, lowest);
    }

    /// Collision box (the drawn rectangle)
    pub fn hit_box(&self) -> Rect {
        Rect::new(
            self.pos.x as f32,
            self.pos.y as f32,
            self.width as f32,
            self.height as f32,
        )
    }
}

/// Ball with unit per-axis velocity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: IVec2,
    /// Each component is -1 or +1
    pub vel: IVec2,
    pub radius: i32,
}

impl Ball {
    pub fn new(pos: IVec2, vel: IVec2, radius: i32) -> Self {
        Self { pos, vel, radius }
    }

    /// Place at `center` with a random diagonal heading
    pub fn reset(&mut self, center: IVec2, rng: &mut impl Rng) {
        self.pos = center;
        self.vel = IVec2::new(random_sign(rng), random_sign(rng));
    }

    /// Reflect each axis whose current position lies outside `bounds`.
    ///
    /// Returns which axes flipped. Position is not clamped, so a ball can sit
    /// one step past the bound for a tick.
    pub fn bounce_within(&mut self, bounds: &Bounds) -> BVec2 {
        let outside = !bounds.contains_axes(self.pos);
        if outside.x {
            self.vel.x = -self.vel.x;
        }
        if outside.y {
            self.vel.y = -self.vel.y;
        }
        outside
    }

    /// Reverse horizontal direction (paddle hit)
    pub fn reflect_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Move one tick along the current velocity
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    pub fn as_circle(&self) -> Circle {
        Circle::new(self.pos.as_vec2(), self.radius as f32)
    }
}

fn random_sign(rng: &mut impl Rng) -> i32 {
    if rng.random_bool(0.5) { -1 } else { 1 }
}

/// Two-state shot slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BulletState {
    #[default]
    Ready,
    Fire,
}

/// The single bullet a gun or tank owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub state: BulletState,
    pub pos: IVec2,
    /// Heading captured at fire time
    pub direction: Vec2,
    pub speed: f32,
}

impl Bullet {
    pub fn new(speed: f32) -> Self {
        Self {
            state: BulletState::Ready,
            pos: IVec2::ZERO,
            direction: Vec2::ZERO,
            speed,
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state == BulletState::Ready
    }

    #[inline]
    pub fn in_flight(&self) -> bool {
        self.state == BulletState::Fire
    }

    /// Launch from `origin`. Returns false (and changes nothing) if a shot is
    /// already in flight.
    pub fn fire(&mut self, origin: IVec2, direction: Vec2) -> bool {
        if self.in_flight() {
            return false;
        }
        self.state = BulletState::Fire;
        self.pos = origin;
        self.direction = direction;
        true
    }

    /// Advance while in flight; expire once the new position is outside
    /// `area`. Returns true if the bullet expired this tick.
    pub fn step_within(&mut self, area: &Bounds) -> bool {
        if !self.in_flight() {
            return false;
        }
        self.pos = advance(self.pos, self.direction, self.speed);
        if !area.contains(self.pos) {
            self.expire();
            return true;
        }
        false
    }

    /// Back to ready (left the screen or hit something)
    pub fn expire(&mut self) {
        self.state = BulletState::Ready;
    }
}

/// Player gun: horizontal motion plus one vertical bullet slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gun {
    pub pos: IVec2,
    pub bullet: Bullet,
}

impl Gun {
    pub fn new(pos: IVec2, bullet_speed: f32) -> Self {
        Self {
            pos,
            bullet: Bullet::new(bullet_speed),
        }
    }

    /// Slide by `step`, staying within `[min_x, max_x]`
    pub fn slide(&mut self, left: bool, right: bool, step: i32, min_x: i32, max_x: i32) {
        if left && self.pos.x > min_x {
            self.pos.x = (self.pos.x - step).max(min_x);
        }
        if right && self.pos.x < max_x {
            self.pos.x = (self.pos.x + step).min(max_x);
        }
    }

    /// Shoot straight up from the barrel column
    pub fn fire(&mut self, barrel_offset: i32) -> bool {
        let origin = self.pos + IVec2::new(barrel_offset, 0);
        self.bullet.fire(origin, Vec2::new(0.0, -1.0))
    }
}

/// Enemy sprite instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: IVec2,
}

/// Shared horizontal sweep of a formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Score and lives readout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub score: u32,
    pub lives: u32,
}

impl Interface {
    pub fn new(lives: u32) -> Self {
        Self { score: 0, lives }
    }

    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Remove one life; returns true when none are left
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }
}

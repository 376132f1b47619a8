//! Tank artillery scene: a turret on the ground in front of a skyline

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::{Bounds, Bullet, GameEvent, Interface};
use super::tick::TickInput;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::tuning::TankTuning;
use crate::{direction_from_angle, turret_tip};

/// Top of the ground strip
pub const GROUND_Y: i32 = (SCREEN_HEIGHT as f32 / 1.05) as i32;

/// Turret sweep limits in degrees (half circle above the horizon)
pub const MIN_ANGLE: i32 = -180;
pub const MAX_ANGLE: i32 = 0;

/// Turret on a fixed pivot with one angled shot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tank {
    pub pivot: IVec2,
    /// Degrees, 0 points right, -90 straight up
    pub angle: i32,
    pub bullet: Bullet,
}

impl Tank {
    pub fn new(pivot: IVec2, angle: i32, bullet_speed: f32) -> Self {
        Self {
            pivot,
            angle: angle.clamp(MIN_ANGLE, MAX_ANGLE),
            bullet: Bullet::new(bullet_speed),
        }
    }

    /// Turret heading in radians
    #[inline]
    pub fn heading(&self) -> f32 {
        (self.angle as f32).to_radians()
    }

    /// Up sweeps counter-clockwise (toward -180), down toward 0
    pub fn rotate(&mut self, up: bool, down: bool, step: i32) {
        if up && self.angle > MIN_ANGLE {
            self.angle -= step;
        }
        if down && self.angle < MAX_ANGLE {
            self.angle += step;
        }
        self.angle = self.angle.clamp(MIN_ANGLE, MAX_ANGLE);
    }

    /// Launch from the pivot along the current heading
    pub fn fire(&mut self) -> bool {
        self.bullet
            .fire(self.pivot, direction_from_angle(self.heading()))
    }

    /// Barrel end for drawing
    pub fn barrel_tip(&self, length: f32) -> IVec2 {
        turret_tip(self.pivot, self.heading(), length)
    }
}

/// Decorative building. Out-of-range sizes snap to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub pos: IVec2,
    pub width: i32,
    pub height: i32,
    pub roof: bool,
    /// Vertical mullions across the window rows
    pub single_windows: bool,
    pub foundation: bool,
}

impl Building {
    pub const MIN_WIDTH: i32 = 30;
    pub const MAX_WIDTH: i32 = 80;
    pub const DEFAULT_WIDTH: i32 = 50;
    pub const MIN_HEIGHT: i32 = 60;
    pub const MAX_HEIGHT: i32 = 100;
    pub const DEFAULT_HEIGHT: i32 = 80;

    const ROOF: i32 = 5;
    const FOUNDATION: i32 = 10;
    const WINDOW: i32 = 10;
    const WINDOW_PITCH: i32 = 15;
    const MAX_WINDOW_ROWS: usize = 6;
    const MULLION_PITCH: i32 = 5;
    const MAX_MULLIONS: usize = 13;

    pub fn new(
        pos: IVec2,
        width: i32,
        height: i32,
        roof: bool,
        single_windows: bool,
        foundation: bool,
    ) -> Self {
        let width = if (Self::MIN_WIDTH..=Self::MAX_WIDTH).contains(&width) {
            width
        } else {
            Self::DEFAULT_WIDTH
        };
        let height = if (Self::MIN_HEIGHT..=Self::MAX_HEIGHT).contains(&height) {
            height
        } else {
            Self::DEFAULT_HEIGHT
        };
        Self {
            pos,
            width,
            height,
            roof,
            single_windows,
            foundation,
        }
    }

    /// Body as (origin, size)
    pub fn body(&self) -> (IVec2, IVec2) {
        (self.pos, IVec2::new(self.width, self.height))
    }

    pub fn roof_rect(&self) -> Option<(IVec2, IVec2)> {
        self.roof.then(|| {
            (
                self.pos + IVec2::new(Self::ROOF * 2, -Self::ROOF),
                IVec2::new(self.width - Self::ROOF * 4, Self::ROOF),
            )
        })
    }

    pub fn foundation_rect(&self) -> Option<(IVec2, IVec2)> {
        self.foundation.then(|| {
            (
                self.pos + IVec2::new(-Self::FOUNDATION / 2, self.height - Self::FOUNDATION),
                IVec2::new(self.width + Self::FOUNDATION, Self::FOUNDATION),
            )
        })
    }

    /// Window strips, top to bottom
    pub fn window_rows(&self) -> Vec<(IVec2, IVec2)> {
        let size = IVec2::new(self.width - Self::WINDOW, Self::WINDOW);
        let x = self.pos.x + Self::WINDOW / 2;
        let limit = self.pos.y + self.height - Self::WINDOW;
        let mut rows = Vec::new();
        let mut y = self.pos.y + Self::WINDOW;
        for _ in 0..Self::MAX_WINDOW_ROWS {
            rows.push((IVec2::new(x, y), size));
            y += Self::WINDOW_PITCH;
            if y > limit {
                break;
            }
        }
        rows
    }

    /// Mullion x positions (each spans the full building height)
    pub fn mullions(&self) -> Vec<i32> {
        if !self.single_windows {
            return Vec::new();
        }
        let limit = self.pos.x + self.width - Self::MULLION_PITCH;
        let mut xs = Vec::new();
        let mut x = self.pos.x + Self::WINDOW / 2 + 4;
        for _ in 0..Self::MAX_MULLIONS {
            xs.push(x);
            x += Self::MULLION_PITCH;
            if x > limit {
                break;
            }
        }
        xs
    }
}

/// Default skyline
pub fn skyline() -> Vec<Building> {
    vec![
        Building::new(IVec2::new(35, 138), 50, 90, true, true, false),
        Building::new(IVec2::new(140, 128), 40, 100, false, false, true),
        Building::new(IVec2::new(200, 148), 40, 80, false, true, false),
    ]
}

#[derive(Debug, Clone)]
pub struct TankState {
    pub tank: Tank,
    pub buildings: Vec<Building>,
    pub interface: Interface,
    pub level: u32,
    pub tuning: TankTuning,
    pub time_ticks: u64,
}

impl TankState {
    pub fn new(tuning: TankTuning) -> Self {
        let pivot = IVec2::new(tuning.center_x, GROUND_Y - tuning.pivot_lift);
        Self {
            tank: Tank::new(pivot, tuning.start_angle, tuning.bullet_speed),
            buildings: skyline(),
            interface: Interface::new(tuning.lives),
            level: 1,
            tuning,
            time_ticks: 0,
        }
    }

    /// Shots stay live while on screen (edges included)
    pub fn bullet_area(&self) -> Bounds {
        Bounds::new(IVec2::ZERO, IVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT))
    }

    pub fn tick(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.time_ticks += 1;

        self.tank
            .rotate(input.up, input.down, self.tuning.rotation_speed);
        if input.fire && self.tank.fire() {
            log::debug!("Tank fired at {} degrees", self.tank.angle);
            events.push(GameEvent::ShotFired);
        }
        let area = self.bullet_area();
        if self.tank.bullet.step_within(&area) {
            events.push(GameEvent::ShotExpired);
        }
        events
    }
}

//! Invaders: a marching formation, one gun, three lives
//!
//! The formation shares a single sweep direction. Each tick it is steered
//! from its extreme members, shot enemies are collected and dropped after
//! the scan, and then every survivor moves together.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::point_in_rect;
use super::state::{Bounds, Direction, Enemy, GameEvent, GamePhase, Gun, Interface};
use super::tick::TickInput;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::tuning::InvadersTuning;

/// Enemies moving in lockstep
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    /// Spawn order (left to right for a fresh wave)
    pub enemies: Vec<Enemy>,
    pub direction: Direction,
    next_id: u32,
}

impl Formation {
    pub fn new(tuning: &InvadersTuning) -> Self {
        let mut formation = Self::default();
        formation.spawn_wave(tuning);
        formation
    }

    /// Replace all members with a full wave at the start row
    pub fn spawn_wave(&mut self, tuning: &InvadersTuning) {
        self.enemies.clear();
        let mut x = tuning.wave_origin.x;
        for _ in 0..tuning.enemy_count {
            let id = self.next_id;
            self.next_id += 1;
            self.enemies.push(Enemy {
                id,
                pos: IVec2::new(x, tuning.wave_origin.y),
            });
            x += tuning.enemy_spacing;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn leftmost_x(&self) -> Option<i32> {
        self.enemies.iter().map(|e| e.pos.x).min()
    }

    pub fn rightmost_x(&self) -> Option<i32> {
        self.enemies.iter().map(|e| e.pos.x).max()
    }

    /// Recompute the shared direction from the extreme members.
    ///
    /// Returns true when the formation turned at the right margin, which is
    /// also the tick it steps down.
    pub fn steer(&mut self, tuning: &InvadersTuning) -> bool {
        if let Some(left) = self.leftmost_x() {
            if left < tuning.left_margin {
                self.direction = Direction::Right;
            }
        }
        match self.rightmost_x() {
            Some(right) if right > SCREEN_WIDTH - tuning.right_margin => {
                self.direction = Direction::Left;
                true
            }
            _ => false,
        }
    }

    /// Move every member one step along the shared direction
    pub fn march(&mut self, speed: i32, drop: i32) {
        let step = IVec2::new(self.direction.sign() * speed, drop);
        for enemy in &mut self.enemies {
            enemy.pos += step;
        }
    }

    /// Drop the given members, keeping everyone else in order
    pub fn remove(&mut self, ids: &[u32]) {
        if ids.is_empty() {
            return;
        }
        self.enemies.retain(|e| !ids.contains(&e.id));
    }

    /// First member whose hit-box contains `point`
    pub fn hit_by(&self, point: IVec2) -> Option<u32> {
        self.enemies
            .iter()
            .find(|e| point_in_rect(point, e.pos))
            .map(|e| e.id)
    }
}

#[derive(Debug, Clone)]
pub struct InvadersState {
    pub gun: Gun,
    pub formation: Formation,
    pub interface: Interface,
    pub phase: GamePhase,
    pub tuning: InvadersTuning,
    pub time_ticks: u64,
}

impl InvadersState {
    pub fn new(tuning: InvadersTuning) -> Self {
        Self {
            gun: Gun::new(
                IVec2::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT - tuning.gun_bottom_offset),
                tuning.bullet_speed,
            ),
            formation: Formation::new(&tuning),
            interface: Interface::new(tuning.lives),
            phase: GamePhase::Playing,
            tuning,
            time_ticks: 0,
        }
    }

    /// y past which an enemy costs a life
    pub fn breach_line(&self) -> i32 {
        SCREEN_HEIGHT - self.tuning.bottom_margin
    }

    /// Flight area for the gun's bullet
    pub fn bullet_area(&self) -> Bounds {
        Bounds::new(
            IVec2::new(0, self.tuning.bullet_ceiling),
            IVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        )
    }

    pub fn tick(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase == GamePhase::GameOver {
            return events;
        }
        self.time_ticks += 1;

        if self.formation.is_empty() {
            self.formation.spawn_wave(&self.tuning);
            self.interface.award(self.tuning.wave_bonus);
            log::info!("Wave cleared, score {}", self.interface.score);
            events.push(GameEvent::WaveCleared);
        }

        let descend = self.formation.steer(&self.tuning);

        // A shot expires on its first hit, so at most one enemy per tick
        let mut shot = Vec::new();
        if self.gun.bullet.in_flight() {
            if let Some(id) = self.formation.hit_by(self.gun.bullet.pos) {
                shot.push(id);
                self.gun.bullet.expire();
                self.interface.award(self.tuning.hit_score);
                log::debug!("Enemy {id} shot, score {}", self.interface.score);
                events.push(GameEvent::EnemyShot { id });
            }
        }
        self.formation.remove(&shot);

        let breach_line = self.breach_line();
        if self.formation.enemies.iter().any(|e| e.pos.y > breach_line) {
            events.push(GameEvent::FormationBreached);
            let out = self.interface.lose_life();
            self.formation.spawn_wave(&self.tuning);
            if out {
                self.phase = GamePhase::GameOver;
                log::info!("Game over, final score {}", self.interface.score);
                events.push(GameEvent::GameOver);
                return events;
            }
            log::info!("Formation breached, {} lives left", self.interface.lives);
        } else {
            let drop = if descend {
                events.push(GameEvent::FormationDescended);
                self.tuning.enemy_down_step
            } else {
                0
            };
            self.formation.march(self.tuning.enemy_speed, drop);
        }

        if input.fire && self.gun.fire(self.tuning.barrel_offset) {
            events.push(GameEvent::ShotFired);
        }
        self.gun.slide(
            input.up,
            input.down,
            self.tuning.gun_speed,
            self.tuning.gun_min_x,
            SCREEN_WIDTH - self.tuning.gun_right_margin,
        );
        let area = self.bullet_area();
        if self.gun.bullet.step_within(&area) {
            events.push(GameEvent::ShotExpired);
        }

        events
    }
}

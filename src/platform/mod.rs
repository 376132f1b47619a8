//! Platform abstraction layer
//!
//! The board exposes two capabilities:
//! - A pen-based display (palette registration, filled primitives, text)
//! - Two or three non-blocking buttons
//!
//! Everything above this module talks to these traits only, so the whole
//! game runs headless against a framebuffer or a recording stub.

pub mod autopilot;

use std::collections::VecDeque;

pub use autopilot::Autopilot;

use crate::sim::TickInput;

/// Registered colour handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pen(u16);

impl Pen {
    pub fn new(index: u16) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Pen-based drawing surface. Shapes are filled; coordinates are pixels
/// with the origin at the top-left.
pub trait Display {
    /// Register a colour and get a handle for it
    fn create_color(&mut self, r: u8, g: u8, b: u8) -> Pen;
    /// Pen used by subsequent draw calls
    fn set_draw_color(&mut self, pen: Pen);
    /// Fill the whole surface with the current pen
    fn clear(&mut self);
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32);
    fn draw_circle(&mut self, x: i32, y: i32, radius: i32);
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, thickness: u32);
    fn draw_pixel(&mut self, x: i32, y: i32);
    /// Text with its top-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: u32);
    /// Hand the finished frame to the panel
    fn present(&mut self);
}

/// Board buttons. Reads are instantaneous level checks.
pub trait ButtonSource {
    /// Called once per tick before any button is read
    fn latch(&mut self) {}
    fn move_up_pressed(&mut self) -> bool;
    fn move_down_pressed(&mut self) -> bool;
    fn fire_pressed(&mut self) -> bool;
}

/// Replays a fixed sequence of snapshots, one per tick, then releases
/// every button.
#[derive(Debug, Clone, Default)]
pub struct ScriptedButtons {
    script: VecDeque<TickInput>,
    current: TickInput,
}

impl ScriptedButtons {
    pub fn new(script: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            script: script.into_iter().collect(),
            current: TickInput::default(),
        }
    }

    /// Hold `input` for `ticks` ticks
    pub fn hold(mut self, input: TickInput, ticks: usize) -> Self {
        self.script.extend(std::iter::repeat_n(input, ticks));
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl ButtonSource for ScriptedButtons {
    fn latch(&mut self) {
        self.current = self.script.pop_front().unwrap_or_default();
    }

    fn move_up_pressed(&mut self) -> bool {
        self.current.up
    }

    fn move_down_pressed(&mut self) -> bool {
        self.current.down
    }

    fn fire_pressed(&mut self) -> bool {
        self.current.fire
    }
}

//! RGB565 software framebuffer
//!
//! Implements the board's pen API on top of `embedded-graphics`
//! primitives, so anything written against [`Display`] can be rendered and
//! inspected without hardware.

use core::convert::Infallible;

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_9X18, FONT_10X20},
    },
    pixelcolor::{Rgb565, Rgb888},
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::platform::{Display, Pen};

/// Drawing into memory cannot fail
fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Closest built-in font to the board's bitmap font at `scale`
fn font_for_scale(scale: u32) -> &'static MonoFont<'static> {
    match scale {
        0 | 1 => &FONT_6X10,
        2 => &FONT_9X18,
        _ => &FONT_10X20,
    }
}

#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: i32,
    height: i32,
    pixels: Vec<Rgb565>,
    palette: Vec<Rgb565>,
    pen: Rgb565,
    frames_presented: u64,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl FrameBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![Rgb565::BLACK; (width * height) as usize],
            palette: Vec::new(),
            pen: Rgb565::WHITE,
            frames_presented: 0,
        }
    }

    /// Colour at (x, y), or None off-screen
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Number of pixels currently holding `color`
    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = embedded_graphics::Pixel<Self::Color>>,
    {
        for embedded_graphics::Pixel(Point { x, y }, color) in pixels {
            if x >= 0 && x < self.width && y >= 0 && y < self.height {
                self.pixels[(y * self.width + x) as usize] = color;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl Display for FrameBuffer {
    fn create_color(&mut self, r: u8, g: u8, b: u8) -> Pen {
        self.palette.push(Rgb565::from(Rgb888::new(r, g, b)));
        Pen::new((self.palette.len() - 1) as u16)
    }

    fn set_draw_color(&mut self, pen: Pen) {
        match self.palette.get(pen.index()) {
            Some(color) => self.pen = *color,
            None => log::warn!("Unregistered pen {}", pen.index()),
        }
    }

    fn clear(&mut self) {
        self.pixels.fill(self.pen);
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        if width <= 0 || height <= 0 {
            return;
        }
        let style = PrimitiveStyle::with_fill(self.pen);
        infallible(
            Rectangle::new(Point::new(x, y), Size::new(width as u32, height as u32))
                .into_styled(style)
                .draw(self),
        );
    }

    fn draw_circle(&mut self, x: i32, y: i32, radius: i32) {
        let diameter = (radius.max(0) * 2 + 1) as u32;
        let style = PrimitiveStyle::with_fill(self.pen);
        infallible(
            Circle::with_center(Point::new(x, y), diameter)
                .into_styled(style)
                .draw(self),
        );
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, thickness: u32) {
        let style = PrimitiveStyle::with_stroke(self.pen, thickness.max(1));
        infallible(
            Line::new(Point::new(x1, y1), Point::new(x2, y2))
                .into_styled(style)
                .draw(self),
        );
    }

    fn draw_pixel(&mut self, x: i32, y: i32) {
        let pen = self.pen;
        infallible(embedded_graphics::Pixel(Point::new(x, y), pen).draw(self));
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: u32) {
        let style = MonoTextStyle::new(font_for_scale(scale), self.pen);
        infallible(Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(self));
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_pens() -> (FrameBuffer, Pen, Pen) {
        let mut fb = FrameBuffer::default();
        let black = fb.create_color(0, 0, 0);
        let red = fb.create_color(255, 0, 0);
        (fb, black, red)
    }

    #[test]
    fn test_clear_fills_with_pen() {
        let (mut fb, _, red) = with_pens();
        fb.set_draw_color(red);
        Display::clear(&mut fb);
        assert_eq!(fb.count(Rgb565::RED), (320 * 240) as usize);
    }

    #[test]
    fn test_rect_is_filled_and_clipped() {
        let (mut fb, black, red) = with_pens();
        fb.set_draw_color(black);
        Display::clear(&mut fb);
        fb.set_draw_color(red);
        fb.draw_rect(28, 120, 5, 20);
        assert_eq!(fb.count(Rgb565::RED), 100);
        assert_eq!(fb.pixel(28, 120), Some(Rgb565::RED));
        assert_eq!(fb.pixel(33, 120), Some(Rgb565::BLACK));

        // Off the bottom edge only the visible part lands
        fb.draw_rect(0, 228, 320, 240);
        assert_eq!(fb.count(Rgb565::RED), 100 + 320 * 12);
    }

    #[test]
    fn test_circle_centred_on_point() {
        let (mut fb, _, red) = with_pens();
        fb.set_draw_color(red);
        fb.draw_circle(160, 120, 5);
        assert_eq!(fb.pixel(160, 120), Some(Rgb565::RED));
        assert_eq!(fb.pixel(165, 120), Some(Rgb565::RED));
        assert_eq!(fb.pixel(155, 120), Some(Rgb565::RED));
        assert_eq!(fb.pixel(167, 120), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_pixel_and_line() {
        let (mut fb, _, red) = with_pens();
        fb.set_draw_color(red);
        fb.draw_pixel(-1, 10);
        fb.draw_pixel(3, 4);
        assert_eq!(fb.count(Rgb565::RED), 1);

        fb.draw_line(25, 25, 295, 25, 1);
        assert_eq!(fb.pixel(25, 25), Some(Rgb565::RED));
        assert_eq!(fb.pixel(295, 25), Some(Rgb565::RED));
        assert_eq!(fb.count(Rgb565::RED), 1 + 271);
    }

    #[test]
    fn test_text_draws_something() {
        let (mut fb, _, red) = with_pens();
        fb.set_draw_color(red);
        fb.draw_text("Score 0", 5, 5, 1);
        let lit = fb.count(Rgb565::RED);
        assert!(lit > 0);
        // Top baseline: nothing above the requested row
        assert!((0..320).all(|x| (0..5).all(|y| fb.pixel(x, y) == Some(Rgb565::BLACK))));
    }

    #[test]
    fn test_unknown_pen_keeps_current() {
        let (mut fb, _, red) = with_pens();
        fb.set_draw_color(red);
        fb.set_draw_color(Pen::new(40));
        fb.draw_pixel(0, 0);
        assert_eq!(fb.pixel(0, 0), Some(Rgb565::RED));
    }

    #[test]
    fn test_present_counts_frames() {
        let mut fb = FrameBuffer::default();
        fb.present();
        fb.present();
        assert_eq!(fb.frames_presented(), 2);
    }
}

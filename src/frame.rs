//! Frame driver
//!
//! Owns the display, the registered palette and the running game. Each
//! frame reads one input snapshot, ticks the game, draws the scene and
//! presents it. When a game ends the final screen is shown exactly once
//! and the loop stops.

use serde::Serialize;

use crate::platform::Display;
use crate::renderer::{self, Palette};
use crate::settings::Settings;
use crate::sim::{Game, TickInput, Variant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    GameOver,
}

/// What a run ended with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub variant: Variant,
    pub frames: u64,
    pub score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lives: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fails: Option<u32>,
    pub game_over: bool,
}

pub struct GameContext<D: Display> {
    display: D,
    palette: Palette,
    game: Game,
    frames: u64,
    game_over_shown: bool,
}

impl<D: Display> GameContext<D> {
    pub fn new(mut display: D, game: Game) -> Self {
        let palette = Palette::register(&mut display);
        log::info!("Starting {}", game.variant().as_str());
        Self {
            display,
            palette,
            game,
            frames: 0,
            game_over_shown: false,
        }
    }

    pub fn from_settings(display: D, settings: &Settings) -> Self {
        let game = Game::new(settings.variant, settings.seed, &settings.tuning);
        Self::new(display, game)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Tick, draw and present one frame
    pub fn run_frame(&mut self, input: &TickInput) -> FrameOutcome {
        if self.game.is_over() {
            self.show_game_over();
            return FrameOutcome::GameOver;
        }

        self.frames += 1;
        let events = self.game.tick(input);
        // The sim logs its own transitions; events are only traced here
        for event in &events {
            log::trace!("[{}] {event:?}", self.frames);
        }

        if self.game.is_over() {
            self.show_game_over();
            return FrameOutcome::GameOver;
        }

        renderer::render(&self.game, &self.palette, &mut self.display);
        self.display.present();
        FrameOutcome::Continue
    }

    /// Run until the game ends or `max_frames` frames have been drawn.
    /// `next_input` is asked for a snapshot once per frame.
    pub fn run(
        &mut self,
        mut next_input: impl FnMut(&Game) -> TickInput,
        max_frames: Option<u64>,
    ) -> RunSummary {
        loop {
            if max_frames.is_some_and(|max| self.frames >= max) {
                log::debug!("Frame cap reached after {} frames", self.frames);
                break;
            }
            let input = next_input(&self.game);
            if self.run_frame(&input) == FrameOutcome::GameOver {
                break;
            }
        }
        self.summary()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            variant: self.game.variant(),
            frames: self.frames,
            score: self.game.score(),
            lives: self.game.lives(),
            fails: self.game.fails(),
            game_over: self.game.is_over(),
        }
    }

    fn show_game_over(&mut self) {
        if self.game_over_shown {
            return;
        }
        renderer::render_game_over(self.game.score(), &self.palette, &mut self.display);
        self.display.present();
        self.game_over_shown = true;
        log::debug!("Game-over screen drawn after {} frames", self.frames);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Pen, ScriptedButtons};
    use crate::renderer::FrameBuffer;
    use crate::tuning::Tuning;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear,
        Text(String),
        Present,
        Other,
    }

    #[derive(Default)]
    struct Recorder {
        pens: u16,
        calls: Vec<Call>,
    }

    impl Recorder {
        fn count(&self, call: &Call) -> usize {
            self.calls.iter().filter(|c| *c == call).count()
        }
    }

    impl Display for Recorder {
        fn create_color(&mut self, _: u8, _: u8, _: u8) -> Pen {
            self.pens += 1;
            Pen::new(self.pens - 1)
        }
        fn set_draw_color(&mut self, _: Pen) {}
        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }
        fn draw_rect(&mut self, _: i32, _: i32, _: i32, _: i32) {
            self.calls.push(Call::Other);
        }
        fn draw_circle(&mut self, _: i32, _: i32, _: i32) {
            self.calls.push(Call::Other);
        }
        fn draw_line(&mut self, _: i32, _: i32, _: i32, _: i32, _: u32) {
            self.calls.push(Call::Other);
        }
        fn draw_pixel(&mut self, _: i32, _: i32) {
            self.calls.push(Call::Other);
        }
        fn draw_text(&mut self, text: &str, _: i32, _: i32, _: u32) {
            self.calls.push(Call::Text(text.to_string()));
        }
        fn present(&mut self) {
            self.calls.push(Call::Present);
        }
    }

    /// Invaders with one life and the wave already at the breach line
    fn doomed_invaders() -> Game {
        let mut tuning = Tuning::default();
        tuning.invaders.lives = 1;
        let mut game = Game::new(Variant::Invaders, 0, &tuning);
        if let Game::Invaders(s) = &mut game {
            for enemy in &mut s.formation.enemies {
                enemy.pos.y = 230;
            }
        }
        game
    }

    #[test]
    fn test_frame_presents_once_per_tick() {
        let game = Game::new(Variant::Pong, 1, &Tuning::default());
        let mut ctx = GameContext::new(Recorder::default(), game);
        for _ in 0..5 {
            assert_eq!(ctx.run_frame(&TickInput::default()), FrameOutcome::Continue);
        }
        let display = ctx.into_display();
        assert_eq!(display.count(&Call::Present), 5);
        assert_eq!(display.count(&Call::Clear), 5);
        // Palette registered up front
        assert_eq!(display.pens, 13);
    }

    #[test]
    fn test_game_over_drawn_exactly_once() {
        let mut ctx = GameContext::new(Recorder::default(), doomed_invaders());
        let summary = ctx.run(|_| TickInput::default(), Some(100));
        assert!(summary.game_over);
        assert_eq!(summary.lives, Some(0));
        assert_eq!(summary.frames, 1);

        // Further frames after the end draw nothing new
        assert_eq!(ctx.run_frame(&TickInput::default()), FrameOutcome::GameOver);
        let display = ctx.into_display();
        assert_eq!(display.count(&Call::Text("Game Over".to_string())), 1);
        assert_eq!(display.count(&Call::Text("Score 0".to_string())), 1);
        assert_eq!(display.count(&Call::Present), 1);
    }

    #[test]
    fn test_run_stops_at_frame_cap() {
        let game = Game::new(Variant::Tank, 0, &Tuning::default());
        let mut ctx = GameContext::new(FrameBuffer::default(), game);
        let summary = ctx.run(|_| TickInput::default(), Some(30));
        assert_eq!(summary.frames, 30);
        assert!(!summary.game_over);
        assert_eq!(summary.lives, Some(3));
        assert_eq!(ctx.display().frames_presented(), 30);
    }

    #[test]
    fn test_run_with_scripted_buttons() {
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        let mut buttons = ScriptedButtons::default().hold(fire, 1);
        let game = Game::new(Variant::Invaders, 0, &Tuning::default());
        let mut ctx = GameContext::new(FrameBuffer::default(), game);
        ctx.run(|_| TickInput::poll(&mut buttons), Some(3));
        assert_eq!(buttons.remaining(), 0);
        let Game::Invaders(s) = ctx.game() else {
            unreachable!()
        };
        assert!(s.gun.bullet.in_flight());
    }

    #[test]
    fn test_summary_serializes() {
        let game = Game::new(Variant::Pong, 1, &Tuning::default());
        let ctx = GameContext::new(FrameBuffer::default(), game);
        let json = serde_json::to_value(ctx.summary()).unwrap();
        assert_eq!(json["variant"], "pong");
        assert_eq!(json["fails"], 0);
        assert!(json.get("lives").is_none());
    }
}

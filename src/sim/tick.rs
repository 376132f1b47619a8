//! Fixed-tick dispatch across game variants
//!
//! One call to [`Game::tick`] is one frame of the board's draw loop. There
//! is no wall-clock term: every speed constant is per tick.

use serde::{Deserialize, Serialize};

use super::bounce::BounceState;
use super::invaders::InvadersState;
use super::pong::PongState;
use super::state::{GameEvent, GamePhase};
use super::tank::TankState;
use crate::platform::ButtonSource;
use crate::tuning::Tuning;

/// Button snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Up / left / turret counter-clockwise (button A)
    pub up: bool,
    /// Down / right / turret clockwise (button X)
    pub down: bool,
    /// Shoot (select button)
    pub fire: bool,
}

impl TickInput {
    /// Read all buttons once
    pub fn poll(source: &mut impl ButtonSource) -> Self {
        source.latch();
        Self {
            up: source.move_up_pressed(),
            down: source.move_down_pressed(),
            fire: source.fire_pressed(),
        }
    }
}

/// Which game to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Pong,
    Bounce,
    Invaders,
    Tank,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Pong,
        Variant::Bounce,
        Variant::Invaders,
        Variant::Tank,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Pong => "pong",
            Variant::Bounce => "bounce",
            Variant::Invaders => "invaders",
            Variant::Tank => "tank",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pong" => Some(Variant::Pong),
            "bounce" | "demo" => Some(Variant::Bounce),
            "invaders" | "space-invaders" => Some(Variant::Invaders),
            "tank" | "battle-tank" => Some(Variant::Tank),
            _ => None,
        }
    }
}

/// A running game of any variant
#[derive(Debug, Clone)]
pub enum Game {
    Pong(PongState),
    Bounce(BounceState),
    Invaders(InvadersState),
    Tank(TankState),
}

impl Game {
    pub fn new(variant: Variant, seed: u64, tuning: &Tuning) -> Self {
        match variant {
            Variant::Pong => Game::Pong(PongState::new(seed, tuning.pong.clone())),
            Variant::Bounce => Game::Bounce(BounceState::new(seed, tuning.pong.clone())),
            Variant::Invaders => Game::Invaders(InvadersState::new(tuning.invaders.clone())),
            Variant::Tank => Game::Tank(TankState::new(tuning.tank.clone())),
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Game::Pong(_) => Variant::Pong,
            Game::Bounce(_) => Variant::Bounce,
            Game::Invaders(_) => Variant::Invaders,
            Game::Tank(_) => Variant::Tank,
        }
    }

    /// Advance one tick
    pub fn tick(&mut self, input: &TickInput) -> Vec<GameEvent> {
        match self {
            Game::Pong(s) => s.tick(input),
            Game::Bounce(s) => s.tick(input),
            Game::Invaders(s) => s.tick(input),
            Game::Tank(s) => s.tick(input),
        }
    }

    pub fn phase(&self) -> GamePhase {
        match self {
            Game::Invaders(s) => s.phase,
            _ => GamePhase::Playing,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase() == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        match self {
            Game::Invaders(s) => s.interface.score,
            Game::Tank(s) => s.interface.score,
            Game::Pong(_) | Game::Bounce(_) => 0,
        }
    }

    /// Remaining lives, for variants that have them
    pub fn lives(&self) -> Option<u32> {
        match self {
            Game::Invaders(s) => Some(s.interface.lives),
            Game::Tank(s) => Some(s.interface.lives),
            Game::Pong(_) | Game::Bounce(_) => None,
        }
    }

    /// Missed balls, for pong
    pub fn fails(&self) -> Option<u32> {
        match self {
            Game::Pong(s) => Some(s.fails),
            _ => None,
        }
    }

    pub fn time_ticks(&self) -> u64 {
        match self {
            Game::Pong(s) => s.time_ticks,
            Game::Bounce(s) => s.time_ticks,
            Game::Invaders(s) => s.time_ticks,
            Game::Tank(s) => s.time_ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Held(bool, bool, bool);

    impl ButtonSource for Held {
        fn move_up_pressed(&mut self) -> bool {
            self.0
        }
        fn move_down_pressed(&mut self) -> bool {
            self.1
        }
        fn fire_pressed(&mut self) -> bool {
            self.2
        }
    }

    #[test]
    fn test_poll_reads_every_button() {
        let input = TickInput::poll(&mut Held(true, false, true));
        assert_eq!(
            input,
            TickInput {
                up: true,
                down: false,
                fire: true
            }
        );
    }

    #[test]
    fn test_variant_names_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(Variant::from_str(variant.as_str()), Some(variant));
        }
        assert_eq!(Variant::from_str("INVADERS"), Some(Variant::Invaders));
        assert_eq!(Variant::from_str("demo"), Some(Variant::Bounce));
        assert_eq!(Variant::from_str("chess"), None);
    }

    #[test]
    fn test_game_dispatch() {
        let tuning = Tuning::default();
        for variant in Variant::ALL {
            let mut game = Game::new(variant, 5, &tuning);
            assert_eq!(game.variant(), variant);
            game.tick(&TickInput::default());
            assert_eq!(game.time_ticks(), 1);
            assert!(!game.is_over());
        }
    }
}

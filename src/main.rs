//! Headless runner
//!
//! `pico-arcade [VARIANT] [--settings FILE]`
//!
//! Runs one game against the software framebuffer and prints a JSON
//! summary when it stops. Set `RUST_LOG` for more detail.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pico_arcade::platform::{Autopilot, ScriptedButtons};
use pico_arcade::renderer::FrameBuffer;
use pico_arcade::sim::TickInput;
use pico_arcade::{GameContext, Settings};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Game to run: pong, bounce, invaders or tank (overrides the settings file)
    variant: Option<String>,

    /// JSON settings file; missing fields keep their defaults
    #[arg(short, long)]
    settings: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut settings = Settings::load(args.settings.as_deref());
    if let Some(name) = args.variant {
        settings = match settings.with_variant_name(&name) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::from(2);
            }
        };
    }

    let mut ctx = GameContext::from_settings(FrameBuffer::default(), &settings);
    let summary = if settings.autopilot {
        let mut pilot = Autopilot::new();
        ctx.run(|game| pilot.input_for(game), settings.max_frames)
    } else {
        // Nobody at the board: every button stays released
        let mut buttons = ScriptedButtons::default();
        ctx.run(|_| TickInput::poll(&mut buttons), settings.max_frames)
    };

    log::info!(
        "{} stopped after {} frames ({} presented)",
        summary.variant.as_str(),
        summary.frames,
        ctx.display().frames_presented()
    );
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to encode summary: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_settings_path_any_extension() {
        let args = Args::try_parse_from(["pico-arcade", "--settings", "arcade.conf"]).unwrap();
        assert_eq!(args.settings, Some(PathBuf::from("arcade.conf")));
        assert_eq!(args.variant, None);

        let args = Args::try_parse_from(["pico-arcade", "tank", "-s", "arcade.JSON"]).unwrap();
        assert_eq!(args.variant.as_deref(), Some("tank"));
        assert_eq!(args.settings, Some(PathBuf::from("arcade.JSON")));
    }

    #[test]
    fn test_help_is_not_a_variant() {
        let err = Args::try_parse_from(["pico-arcade", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}

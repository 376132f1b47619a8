//! Run settings
//!
//! Loaded from an optional JSON file. Every field has a default, so a
//! partial file only overrides what it names.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::sim::Variant;
use crate::tuning::Tuning;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown game '{0}' (expected pong, bounce, invaders or tank)")]
    UnknownVariant(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Game to start
    pub variant: Variant,
    /// Seed for the pong serve direction
    pub seed: u64,
    /// Stop after this many frames (None runs until the game ends)
    pub max_frames: Option<u64>,
    /// Let the built-in AI press the buttons
    pub autopilot: bool,
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            seed: 0x5EED,
            max_frames: Some(3600),
            autopilot: true,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Override the variant by name
    pub fn with_variant_name(mut self, name: &str) -> Result<Self, SettingsError> {
        self.variant =
            Variant::from_str(name).ok_or_else(|| SettingsError::UnknownVariant(name.to_string()))?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_board() {
        let settings = Settings::default();
        assert_eq!(settings.variant, Variant::Pong);
        assert!(settings.autopilot);
        assert_eq!(settings.tuning, Tuning::default());
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{"variant": "tank", "max_frames": null, "tuning": {"tank": {"lives": 5}}}"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.variant, Variant::Tank);
        assert_eq!(settings.max_frames, None);
        assert_eq!(settings.tuning.tank.lives, 5);
        assert_eq!(settings.tuning.tank.rotation_speed, 2);
        assert_eq!(settings.seed, Settings::default().seed);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Settings::from_json(r#"{"variant": "chess"}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/nonexistent/pico-arcade/settings.json");
        let err = Settings::load_from(path).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
        assert!(err.to_string().contains("settings.json"));
        assert_eq!(Settings::load(Some(path)), Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("pico-arcade-{}.conf", std::process::id()));
        std::fs::write(
            &path,
            r#"{"variant": "invaders", "seed": 9, "tuning": {"invaders": {"lives": 1}}}"#,
        )
        .unwrap();

        let loaded = Settings::load_from(&path);
        let fallback = Settings::load(Some(path.as_path()));
        std::fs::remove_file(&path).unwrap();

        let settings = loaded.unwrap();
        assert_eq!(settings.variant, Variant::Invaders);
        assert_eq!(settings.seed, 9);
        assert_eq!(settings.tuning.invaders.lives, 1);
        assert_eq!(settings.tuning.invaders.enemy_count, 8);
        assert_eq!(fallback, settings);
    }

    #[test]
    fn test_variant_override() {
        let settings = Settings::default().with_variant_name("Invaders").unwrap();
        assert_eq!(settings.variant, Variant::Invaders);

        let err = Settings::default().with_variant_name("chess").unwrap_err();
        assert!(matches!(err, SettingsError::UnknownVariant(ref name) if name == "chess"));
    }

    #[test]
    fn test_round_trip_through_json() {
        let mut settings = Settings::default();
        settings.variant = Variant::Bounce;
        settings.tuning.pong.respawn_on_miss = false;
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}

//! Host and run configuration
//!
//! Loaded from a JSON file on native, derived from the screen on web.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CourtError;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Court (viewport) width in px
    pub court_width: f32,
    /// Court (viewport) height in px
    pub court_height: f32,
    /// Player count used when no selection is made (headless runs)
    pub players: u8,
    /// RNG seed; a time-based seed is used when absent
    pub seed: Option<u64>,
    /// Simulated length of a headless run, in seconds
    pub demo_seconds: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            court_width: 720.0,
            court_height: 900.0,
            players: 1,
            seed: None,
            demo_seconds: 120.0,
        }
    }
}

impl Settings {
    /// Court size for a screen of the given available height, keeping the
    /// 4:5 aspect ratio and leaving room for browser chrome
    pub fn for_screen(available_height: f32) -> Self {
        let court_height = available_height - 100.0;
        Self {
            court_width: court_height * 0.8,
            court_height,
            ..Self::default()
        }
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, CourtError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a file
    pub fn from_file(path: &Path) -> Result<Self, CourtError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults when the file is missing or bad
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), CourtError> {
        if !(self.court_width > 0.0 && self.court_height > 0.0) {
            return Err(CourtError::InvalidSettings(format!(
                "court size must be positive, got {}x{}",
                self.court_width, self.court_height
            )));
        }
        if !matches!(self.players, 1 | 2) {
            return Err(CourtError::InvalidSettings(format!(
                "players must be 1 or 2, got {}",
                self.players
            )));
        }
        if self.demo_seconds < 0.0 {
            return Err(CourtError::InvalidSettings(
                "demo_seconds must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "players": 2, "seed": 7 }"#).unwrap();
        assert_eq!(settings.players, 2);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.court_width, 720.0);
    }

    #[test]
    fn test_invalid_players_rejected() {
        let err = Settings::from_json(r#"{ "players": 3 }"#).unwrap_err();
        assert!(matches!(err, CourtError::InvalidSettings(_)));
    }

    #[test]
    fn test_bad_json_rejected() {
        let err = Settings::from_json("{ players: ").unwrap_err();
        assert!(matches!(err, CourtError::Json(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load(Some(Path::new("/nonexistent/court.json")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_for_screen_keeps_aspect() {
        let settings = Settings::for_screen(1000.0);
        assert_eq!(settings.court_height, 900.0);
        assert_eq!(settings.court_width, 720.0);
    }
}

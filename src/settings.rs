//! Start-up settings, overridable through environment variables.
//!
//! - `TREASURE_HUNT_SEED`: seed for the placement RNG (`u64`), random when unset
//! - `TREASURE_HUNT_WINDOW`: initial window size as `<width>x<height>`, e.g. `1024x768`

use std::{env, num::ParseIntError};

use bevy::ecs::system::Resource;
use thiserror::Error;

use crate::domain::SessionConfig;

const SEED_VAR: &str = "TREASURE_HUNT_SEED";
const WINDOW_VAR: &str = "TREASURE_HUNT_WINDOW";

#[derive(Resource, Clone, Debug, PartialEq)]
pub struct Settings {
    pub window_width: f32,
    pub window_height: f32,
    pub seed: Option<u64>,
    pub session: SessionConfig,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_vars(env::var(SEED_VAR).ok(), env::var(WINDOW_VAR).ok())
    }

    fn from_vars(seed: Option<String>, window: Option<String>) -> Result<Self, SettingsError> {
        let mut settings = Self::default();

        if let Some(seed) = seed {
            settings.seed = Some(
                seed.trim()
                    .parse()
                    .map_err(|err| SettingsError::InvalidSeed(seed.clone(), err))?,
            );
        }

        if let Some(window) = window {
            let (width, height) = parse_window_size(&window)
                .ok_or_else(|| SettingsError::InvalidWindowSize(window.clone()))?;
            settings.window_width = width;
            settings.window_height = height;
        }

        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 800.0,
            window_height: 600.0,
            seed: None,
            session: SessionConfig::default(),
        }
    }
}

fn parse_window_size(value: &str) -> Option<(f32, f32)> {
    let (width, height) = value.trim().split_once(['x', 'X'])?;
    let width = width.trim().parse::<u32>().ok().filter(|w| *w > 0)?;
    let height = height.trim().parse::<u32>().ok().filter(|h| *h > 0)?;
    Some((width as f32, height as f32))
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("invalid TREASURE_HUNT_SEED {0:?}: {1}")]
    InvalidSeed(String, ParseIntError),
    #[error("invalid TREASURE_HUNT_WINDOW {0:?}, expected <width>x<height>")]
    InvalidWindowSize(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_settings_defaults_without_vars() {
        assert_eq!(Settings::from_vars(None, None).unwrap(), Settings::default());
    }

    #[test]
    fn test_settings_seed() {
        let settings = Settings::from_vars(Some(" 42 ".to_string()), None).unwrap();
        assert_eq!(settings.seed, Some(42));
    }

    #[rstest]
    #[case("1024x768", (1024.0, 768.0))]
    #[case("640 X 480", (640.0, 480.0))]
    fn test_settings_window_size(#[case] value: &str, #[case] expected: (f32, f32)) {
        let settings = Settings::from_vars(None, Some(value.to_string())).unwrap();
        assert_eq!(
            (settings.window_width, settings.window_height),
            expected
        );
    }

    #[rstest]
    #[case("1024")]
    #[case("0x600")]
    #[case("widexhigh")]
    fn test_settings_rejects_window_size(#[case] value: &str) {
        let err = Settings::from_vars(None, Some(value.to_string())).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidWindowSize(_)));
    }

    #[test]
    fn test_settings_error_messages() {
        let err = Settings::from_vars(Some("-1".to_string()), None).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @r#"invalid TREASURE_HUNT_SEED "-1": invalid digit found in string"#);
    }
}

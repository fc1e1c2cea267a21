//! Map configuration, persisted as JSON in localStorage.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const STORAGE_KEY: &str = "station_map_config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("localStorage unavailable")]
    StorageUnavailable,
    #[error("localStorage write failed")]
    StorageWrite,
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Key bindings for ship movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlScheme {
    #[default]
    Wasd,
    Arrows,
}

impl ControlScheme {
    pub fn label(&self) -> &'static str {
        match self {
            ControlScheme::Wasd => "WASD",
            ControlScheme::Arrows => "Arrow keys",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ControlScheme::Wasd => ControlScheme::Arrows,
            ControlScheme::Arrows => ControlScheme::Wasd,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: String,
    pub foreground: String,
    pub accent: String,
    pub glow: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#1C1C1EFF".into(),
            foreground: "#EBEBF599".into(),
            accent: "#64D2FFFF".into(),
            glow: "rgba(100, 210, 255, 0.6)".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Pixels moved per tick for each held direction.
    pub ship_speed: f64,
    pub tick_ms: i32,
    pub controls: ControlScheme,
    /// Fixed starfield seed; `None` reseeds randomly on mount.
    pub star_seed: Option<u64>,
    pub palette: Palette,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            ship_speed: 5.0,
            tick_ms: 1000 / 60,
            controls: ControlScheme::default(),
            star_seed: None,
            palette: Palette::default(),
        }
    }
}

impl MapConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the stored config. A missing key yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let store = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(ConfigError::StorageUnavailable)?;
        match store.get_item(STORAGE_KEY).ok().flatten() {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }

    /// Like [`MapConfig::load`], falling back to defaults with a warning.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("using default map config: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let store = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(ConfigError::StorageUnavailable)?;
        let raw = serde_json::to_string(self)?;
        store
            .set_item(STORAGE_KEY, &raw)
            .map_err(|_| ConfigError::StorageWrite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_sixty_ticks_per_second() {
        let cfg = MapConfig::default();
        assert_eq!(cfg.tick_ms, 16);
        assert_eq!(cfg.ship_speed, 5.0);
        assert_eq!(cfg.controls, ControlScheme::Wasd);
        assert!(cfg.star_seed.is_none());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let cfg = MapConfig::from_json(r#"{"controls":"arrows","star_seed":7}"#).unwrap();
        assert_eq!(cfg.controls, ControlScheme::Arrows);
        assert_eq!(cfg.star_seed, Some(7));
        assert_eq!(cfg.ship_speed, 5.0);
        assert_eq!(cfg.palette, Palette::default());
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(
            MapConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn scheme_toggle_round_trips() {
        assert_eq!(ControlScheme::Wasd.toggled(), ControlScheme::Arrows);
        assert_eq!(ControlScheme::Wasd.toggled().toggled(), ControlScheme::Wasd);
    }
}

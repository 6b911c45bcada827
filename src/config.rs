//! Client configuration
//!
//! Settings are read from a JSON file. Every field is optional; missing
//! fields (or a missing file) fall back to the built-in defaults in
//! [`crate::constants`].
//!
//! Lookup order for the file:
//! 1. `$DARK_ORBIT_CONFIG`
//! 2. `<config dir>/dark-orbit/client.json` (e.g. `~/.config/dark-orbit/client.json`)
//!
//! # Example file
//!
//! ```json
//! {
//!     "window_title": "Dark Orbit",
//!     "logical_width": 820,
//!     "logical_height": 615,
//!     "vsync": true
//! }
//! ```

use crate::constants::{
    ASSET_ROOT, CONFIG_ENV_VAR, FONT_SCALE, GAME_VIEW_HEIGHT, GAME_VIEW_WIDTH, WINDOW_TITLE,
};
use crate::error::HudError;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub window_title: String,

    /// Size of the logical render target the HUD is laid out against
    pub logical_width: u32,
    pub logical_height: u32,

    /// Bitmap font scale for HUD text
    pub font_scale: u32,

    pub vsync: bool,

    /// Directory holding `ui/` textures
    pub asset_root: PathBuf,

    /// Start with the bounding box overlay enabled
    pub debug_overlay: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            window_title: WINDOW_TITLE.to_string(),
            logical_width: GAME_VIEW_WIDTH,
            logical_height: GAME_VIEW_HEIGHT,
            font_scale: FONT_SCALE,
            vsync: true,
            asset_root: PathBuf::from(ASSET_ROOT),
            debug_overlay: false,
        }
    }
}

impl ClientConfig {
    /// Loads the config from `path`, or defaults if the file does not exist
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, HudError> {
        let path = path.as_ref();

        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path).map_err(|source| HudError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json(&json).map_err(|source| HudError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses a config from JSON text and sanitizes it
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: ClientConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Loads the config from the default location (see module docs)
    pub fn load() -> Result<Self, HudError> {
        match default_path() {
            Some(path) => Self::load_from_file(path),
            None => {
                warn!("Could not determine config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Logical render target size as `(width, height)`
    pub fn logical_size(&self) -> (u32, u32) {
        (self.logical_width, self.logical_height)
    }

    /// Replaces values the client cannot run with by their defaults
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.logical_width == 0 || self.logical_height == 0 {
            warn!(
                "Invalid logical size {}x{}, using {}x{}",
                self.logical_width, self.logical_height, defaults.logical_width, defaults.logical_height
            );
            self.logical_width = defaults.logical_width;
            self.logical_height = defaults.logical_height;
        }

        if self.font_scale == 0 {
            self.font_scale = defaults.font_scale;
        }

        self
    }
}

/// Path of the config file, honoring `$DARK_ORBIT_CONFIG`
pub fn default_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }

    dirs::config_dir().map(|dir| dir.join("dark-orbit").join("client.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.window_title, "Dark Orbit");
        assert_eq!(config.logical_size(), (820, 615));
        assert!(config.vsync);
        assert!(!config.debug_overlay);
    }

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = ClientConfig::from_json("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = ClientConfig::from_json(r#"{ "vsync": false, "font_scale": 2 }"#).unwrap();
        assert!(!config.vsync);
        assert_eq!(config.font_scale, 2);
        assert_eq!(config.logical_size(), (820, 615));
        assert_eq!(config.asset_root, PathBuf::from("assets"));
    }

    #[test]
    fn test_zero_logical_size_is_replaced() {
        let config =
            ClientConfig::from_json(r#"{ "logical_width": 0, "logical_height": 600 }"#).unwrap();
        assert_eq!(config.logical_size(), (820, 615));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ClientConfig::from_json("{ vsync: ").is_err());
        assert!(ClientConfig::from_json(r#"{ "vsync": "yes" }"#).is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("dark-orbit-test-missing").join("client.json");
        let config = ClientConfig::load_from_file(&path).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("dark-orbit-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("client.json");
        fs::write(&path, r#"{ "window_title": "Test Orbit", "debug_overlay": true }"#).unwrap();

        let config = ClientConfig::load_from_file(&path).unwrap();
        assert_eq!(config.window_title, "Test Orbit");
        assert!(config.debug_overlay);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = ClientConfig {
            font_scale: 3,
            ..Default::default()
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert_eq!(ClientConfig::from_json(&json).unwrap(), config);
    }
}

//! Built-in defaults for the client window and HUD.
//!
//! `ClientConfig` falls back to these when the config file omits a field.

/// Window title shown by the OS
pub const WINDOW_TITLE: &str = "Dark Orbit";

/// Logical render target size (the HUD is laid out against this)
pub const GAME_VIEW_WIDTH: u32 = 820;
pub const GAME_VIEW_HEIGHT: u32 = 615;

/// Scale for the 5x7 bitmap font (1 = 5x7 pixels)
pub const FONT_SCALE: u32 = 1;

/// Asset root, relative to the working directory
pub const ASSET_ROOT: &str = "assets";

/// Environment variable that overrides the config file location
pub const CONFIG_ENV_VAR: &str = "DARK_ORBIT_CONFIG";

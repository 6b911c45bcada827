//! Concrete screens
//!
//! - [`SpaceMapScreen`] - in-flight HUD, the first screen pushed at startup
//! - [`PauseMenuScreen`] - overlay pushed from the space map with `Escape`

pub mod pause_menu;
pub mod space_map;

pub use pause_menu::PauseMenuScreen;
pub use space_map::SpaceMapScreen;

//! Screen-space HUD building blocks
//!
//! Everything here draws into the logical render target in logical pixels:
//!
//! - [`text`] - 5x7 bitmap text with optional outline
//! - [`layout`] - anchoring arithmetic (corner, left-of, above, centering)
//! - [`status_bar`] - ship status bars
//! - [`debug`] - bounding box overlay for layout work

pub mod debug;
pub mod layout;
pub mod status_bar;
pub mod text;

pub use status_bar::{StatusBar, StatusBarStyle};
pub use text::{draw_text, TextStyle};

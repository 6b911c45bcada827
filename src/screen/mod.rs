//! Full-screen UI states
//!
//! A [`Screen`] is one full-screen state of the client (the space map HUD, the
//! pause menu, ...). Screens live on the [`ScreenManager`] stack; only the top
//! screen receives events, updates and draw calls.
//!
//! # Lifecycle
//!
//! The manager calls the hooks in this order for every screen instance:
//!
//! ```text
//! enter, (pause, resume)*, exit
//! ```
//!
//! - `enter` once, right after the screen is pushed
//! - `pause` when another screen is pushed on top of it
//! - `resume` when the screen above it is popped
//! - `exit` once, right before the screen is removed
//!
//! All hooks default to no-ops, so a screen only overrides what it needs.

pub mod manager;

pub use manager::ScreenManager;

use sdl2::event::Event;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::time::Duration;

/// What the active screen wants the manager to do after handling an event
pub enum Transition<'a> {
    /// Stay on the current screen
    None,

    /// Cover the current screen with a new one
    Push(Box<dyn Screen<'a> + 'a>),

    /// Remove the current screen
    Pop,

    /// Close the client
    Quit,
}

/// A full-screen UI state driven by the [`ScreenManager`]
///
/// `'a` is the lifetime of borrowed render resources (textures borrow their
/// `TextureCreator`), shared by every screen on one stack.
pub trait Screen<'a> {
    /// Called once, right after the screen becomes active via push
    fn enter(&mut self) {}

    /// Called when another screen is pushed on top of this one
    fn pause(&mut self) {}

    /// Called when the screen above this one is popped
    fn resume(&mut self) {}

    /// Called once, right before the screen is removed
    fn exit(&mut self) {}

    /// Handles one input event (pointer positions are in logical pixels)
    fn on_event(&mut self, _event: &Event) -> Transition<'a> {
        Transition::None
    }

    /// Advances the screen by `_delta` since the previous frame
    fn update(&mut self, _delta: Duration) {}

    /// Draws into the logical render target
    fn draw(&self, _canvas: &mut Canvas<Window>) -> Result<(), String> {
        Ok(())
    }

    /// Short name used in log messages
    fn name(&self) -> &str {
        "screen"
    }
}

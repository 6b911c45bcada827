//! Layout debugging overlay
//!
//! Outlines HUD element bounds in red when the debug overlay is enabled
//! (F1 on the space map, or `debug_overlay` in the config).

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::fmt;

const BOUNDING_BOX_COLOR: Color = Color::RGB(255, 0, 0);

/// Draws a one-pixel red outline around `bounds`
pub fn draw_bounding_box(canvas: &mut Canvas<Window>, bounds: Rect) -> Result<(), String> {
    canvas.set_draw_color(BOUNDING_BOX_COLOR);
    canvas.draw_rect(bounds)
}

/// `Display` wrapper for logging a rectangle's bounds
pub struct Bounds(pub Rect);

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "left = {} ; top = {} ; width = {} ; height = {}",
            self.0.x(),
            self.0.y(),
            self.0.width(),
            self.0.height()
        )
    }
}

//! Ship status bars (hit points, shield, ammo, rockets)
//!
//! Bars are drawn procedurally at screen-space positions in the header. They
//! are stateless: one `StatusBar` per style, rendered with the current fill
//! ratio each frame.
//!
//! # Example
//!
//! ```rust
//! let shield_bar = StatusBar::with_style(StatusBarStyle {
//!     fill_color: Color::RGBA(40, 120, 230, 150),
//!     ..Default::default()
//! });
//!
//! shield_bar.render(&mut canvas, 514, 42, ship.shield.percentage())?;
//! ```

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// Configuration for status bar appearance
#[derive(Debug, Clone)]
pub struct StatusBarStyle {
    /// Bar width in pixels
    pub width: u32,

    /// Bar height in pixels
    pub height: u32,

    /// Shown where the bar is depleted
    pub background_color: Color,

    /// Fill color (alpha is honored, the header art shows through)
    pub fill_color: Color,

    /// Fill color below `low_threshold`
    pub low_color: Color,

    /// Ratio under which `low_color` is used (0.0 disables it)
    pub low_threshold: f32,

    /// Border color
    pub border_color: Color,

    /// Border thickness in pixels (0 = no border)
    pub border_thickness: u32,
}

impl Default for StatusBarStyle {
    fn default() -> Self {
        StatusBarStyle {
            width: 90,
            height: 12,
            background_color: Color::RGBA(20, 20, 30, 150),
            fill_color: Color::RGBA(40, 190, 60, 150),
            low_color: Color::RGBA(200, 30, 30, 150),
            low_threshold: 0.25,
            border_color: Color::RGBA(0, 0, 0, 200),
            border_thickness: 1,
        }
    }
}

pub struct StatusBar {
    style: StatusBarStyle,
}

impl StatusBar {
    /// Creates a status bar with default styling (green, red when low)
    pub fn new() -> Self {
        StatusBar {
            style: StatusBarStyle::default(),
        }
    }

    pub fn with_style(style: StatusBarStyle) -> Self {
        StatusBar { style }
    }

    /// Pixel width of the filled part for `ratio` (clamped to 0.0-1.0)
    pub fn fill_width(&self, ratio: f32) -> u32 {
        (self.style.width as f32 * ratio.clamp(0.0, 1.0)) as u32
    }

    /// Color used for the filled part at `ratio`
    pub fn fill_color(&self, ratio: f32) -> Color {
        if ratio < self.style.low_threshold {
            self.style.low_color
        } else {
            self.style.fill_color
        }
    }

    /// Renders the bar with its top-left corner at (`x`, `y`)
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        x: i32,
        y: i32,
        ratio: f32,
    ) -> Result<(), String> {
        let frame = Rect::new(x, y, self.style.width, self.style.height);

        canvas.set_blend_mode(BlendMode::Blend);

        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(frame)?;

        let filled = self.fill_width(ratio);
        if filled > 0 {
            canvas.set_draw_color(self.fill_color(ratio));
            canvas.fill_rect(Rect::new(x, y, filled, self.style.height))?;
        }

        if self.style.border_thickness > 0 {
            canvas.set_draw_color(self.style.border_color);
            canvas.draw_rect(frame)?;
        }

        canvas.set_blend_mode(BlendMode::None);
        Ok(())
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = StatusBarStyle::default();
        assert_eq!(style.width, 90);
        assert_eq!(style.height, 12);
        assert_eq!(style.fill_color.a, 150);
    }

    #[test]
    fn test_fill_width_clamps() {
        let bar = StatusBar::new();
        assert_eq!(bar.fill_width(1.0), 90);
        assert_eq!(bar.fill_width(0.5), 45);
        assert_eq!(bar.fill_width(2.0), 90);
        assert_eq!(bar.fill_width(-1.0), 0);
    }

    #[test]
    fn test_low_color_below_threshold() {
        let bar = StatusBar::new();
        assert_eq!(bar.fill_color(0.1), bar.style.low_color);
        assert_eq!(bar.fill_color(0.9), bar.style.fill_color);
    }

    #[test]
    fn test_custom_style() {
        let bar = StatusBar::with_style(StatusBarStyle {
            width: 120,
            low_threshold: 0.0,
            ..Default::default()
        });
        assert_eq!(bar.fill_width(0.25), 30);
        assert_eq!(bar.fill_color(0.01), bar.style.fill_color);
    }
}

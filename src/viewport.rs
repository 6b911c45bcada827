//! Aspect-ratio-preserving viewport fitting
//!
//! The game draws into a fixed-size logical render target. When the window is
//! resized, the target is blitted into a centered sub-rectangle of the window
//! so the image is never stretched: bars appear above/below (letterbox) when
//! the window is relatively taller, or left/right (pillarbox) when it is
//! relatively wider.
//!
//! Windows smaller than the logical size are not letterboxed. The caller
//! resizes the window up to `Fit::Clamp`'s size and the full window is used.
//!
//! # Example
//!
//! ```rust
//! let logical = (820, 615);
//! match fit_viewport(logical, (1000, 800))? {
//!     Fit::Letterbox(rect) => { /* blit into rect.to_pixels(1000, 800) */ }
//!     Fit::Clamp { width, height } => { /* window.set_size(width, height) */ }
//! }
//! ```

use crate::error::HudError;
use sdl2::rect::Rect;

/// A sub-region of the window as fractions (0.0-1.0) of its width and height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl FitRect {
    /// The whole window
    pub const FULL: FitRect = FitRect {
        left: 0.0,
        top: 0.0,
        width: 1.0,
        height: 1.0,
    };

    /// Converts to a destination rectangle in window pixels
    pub fn to_pixels(&self, window_width: u32, window_height: u32) -> Rect {
        let w = window_width as f32;
        let h = window_height as f32;

        Rect::new(
            (self.left * w).round() as i32,
            (self.top * h).round() as i32,
            ((self.width * w).round() as u32).max(1),
            ((self.height * h).round() as u32).max(1),
        )
    }

    /// Maps a pointer position in window pixels to logical viewport pixels
    ///
    /// Returns `None` when the point lies in a letterbox bar.
    pub fn window_to_logical(
        &self,
        (x, y): (i32, i32),
        (window_width, window_height): (u32, u32),
        (logical_width, logical_height): (u32, u32),
    ) -> Option<(i32, i32)> {
        let dest = self.to_pixels(window_width, window_height);

        if !dest.contains_point((x, y)) {
            return None;
        }

        let local_x = (x - dest.x()) as i64 * logical_width as i64 / dest.width() as i64;
        let local_y = (y - dest.y()) as i64 * logical_height as i64 / dest.height() as i64;

        Some((local_x as i32, local_y as i32))
    }
}

/// Outcome of fitting the logical viewport into a window
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fit {
    /// Window is large enough; render into this sub-rectangle
    Letterbox(FitRect),

    /// Window is below the logical size; resize it to this and use the full window
    Clamp { width: u32, height: u32 },
}

impl Fit {
    /// The rectangle to render into once this fit has been applied
    pub fn rect(&self) -> FitRect {
        match self {
            Fit::Letterbox(rect) => *rect,
            Fit::Clamp { .. } => FitRect::FULL,
        }
    }
}

/// Fits a logical viewport into a physical window, preserving aspect ratio
///
/// # Errors
///
/// `HudError::InvalidWindowSize` when either physical dimension is zero
/// (minimized window). The caller should skip the resize.
pub fn fit_viewport(
    (logical_width, logical_height): (u32, u32),
    (physical_width, physical_height): (u32, u32),
) -> Result<Fit, HudError> {
    if physical_width == 0 || physical_height == 0 {
        return Err(HudError::InvalidWindowSize {
            width: physical_width,
            height: physical_height,
        });
    }

    if physical_width < logical_width || physical_height < logical_height {
        return Ok(Fit::Clamp {
            width: physical_width.max(logical_width),
            height: physical_height.max(logical_height),
        });
    }

    Ok(Fit::Letterbox(letterbox_rect(
        (logical_width, logical_height),
        (physical_width, physical_height),
    )))
}

/// Centered sub-rectangle with the logical aspect ratio inside a window
///
/// Pure ratio math with no minimum size check; `physical_height` must be
/// non-zero. Use [`fit_viewport`] for resize handling.
pub fn letterbox_rect(
    (logical_width, logical_height): (u32, u32),
    (physical_width, physical_height): (u32, u32),
) -> FitRect {
    let window_ratio = physical_width as f32 / physical_height as f32;
    let logical_ratio = logical_width as f32 / logical_height as f32;

    if window_ratio < logical_ratio {
        // Relatively taller window: bars above and below
        let height = window_ratio / logical_ratio;
        FitRect {
            left: 0.0,
            top: (1.0 - height) / 2.0,
            width: 1.0,
            height,
        }
    } else {
        // Relatively wider window: bars left and right
        let width = logical_ratio / window_ratio;
        FitRect {
            left: (1.0 - width) / 2.0,
            top: 0.0,
            width,
            height: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGICAL: (u32, u32) = (820, 615);
    const EPSILON: f32 = 1e-3;

    fn letterbox(physical: (u32, u32)) -> FitRect {
        match fit_viewport(LOGICAL, physical).unwrap() {
            Fit::Letterbox(rect) => rect,
            other => panic!("expected letterbox for {:?}, got {:?}", physical, other),
        }
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_wider_window_gets_pillarbox() {
        let rect = letterbox_rect(LOGICAL, (1000, 500));
        assert_close(rect.width, 0.667);
        assert_close(rect.left, 0.167);
        assert_eq!(rect.height, 1.0);
        assert_eq!(rect.top, 0.0);
    }

    #[test]
    fn test_taller_window_gets_letterbox() {
        let rect = letterbox_rect(LOGICAL, (500, 1000));
        assert_close(rect.height, 0.375);
        assert_close(rect.top, 0.3125);
        assert_eq!(rect.width, 1.0);
        assert_eq!(rect.left, 0.0);
    }

    #[test]
    fn test_letterbox_ratio_only_depends_on_shape() {
        assert_eq!(letterbox_rect(LOGICAL, (1000, 2000)), letterbox_rect(LOGICAL, (500, 1000)));
        assert_eq!(letterbox((2000, 1000)), letterbox_rect(LOGICAL, (1000, 500)));
    }

    #[test]
    fn test_undersized_windows_clamp_before_fitting() {
        // Both axes are checked against the logical size first
        let fit = fit_viewport(LOGICAL, (500, 1000)).unwrap();
        assert_eq!(fit, Fit::Clamp { width: 820, height: 1000 });

        let fit = fit_viewport(LOGICAL, (1000, 500)).unwrap();
        assert_eq!(fit, Fit::Clamp { width: 1000, height: 615 });

        // After the clamp the same ratio rules apply
        let rect = letterbox((820, 1000));
        let window_ratio = 820.0 / 1000.0;
        let logical_ratio = 820.0 / 615.0;
        assert_close(rect.height, window_ratio / logical_ratio);
        assert_close(rect.top, (1.0 - rect.height) / 2.0);
    }

    #[test]
    fn test_exact_match_fills_window() {
        assert_eq!(letterbox(LOGICAL), FitRect::FULL);
    }

    #[test]
    fn test_small_window_is_clamped() {
        let fit = fit_viewport(LOGICAL, (400, 300)).unwrap();
        assert_eq!(fit, Fit::Clamp { width: 820, height: 615 });
        assert_eq!(fit.rect(), FitRect::FULL);
    }

    #[test]
    fn test_clamp_keeps_larger_dimension() {
        let fit = fit_viewport(LOGICAL, (1600, 300)).unwrap();
        assert_eq!(fit, Fit::Clamp { width: 1600, height: 615 });
    }

    #[test]
    fn test_zero_sized_window_is_rejected() {
        assert!(fit_viewport(LOGICAL, (0, 0)).is_err());
        assert!(fit_viewport(LOGICAL, (1000, 0)).is_err());
    }

    #[test]
    fn test_fit_is_deterministic() {
        for physical in [(1000, 700), (1920, 1080), (900, 1600)] {
            let a = fit_viewport(LOGICAL, physical).unwrap();
            let b = fit_viewport(LOGICAL, physical).unwrap();
            let (ra, rb) = (a.rect(), b.rect());
            assert_eq!(ra.left.to_bits(), rb.left.to_bits());
            assert_eq!(ra.top.to_bits(), rb.top.to_bits());
            assert_eq!(ra.width.to_bits(), rb.width.to_bits());
            assert_eq!(ra.height.to_bits(), rb.height.to_bits());
        }
    }

    #[test]
    fn test_aspect_ratio_is_preserved() {
        let logical_ratio = LOGICAL.0 as f32 / LOGICAL.1 as f32;

        for width in (820..4000).step_by(97) {
            for height in (615..3000).step_by(89) {
                let rect = letterbox((width, height));
                let window_ratio = width as f32 / height as f32;
                let fitted_ratio = (rect.width / rect.height) * window_ratio;
                assert!(
                    (fitted_ratio - logical_ratio).abs() < EPSILON,
                    "{}x{} fitted to ratio {}",
                    width,
                    height,
                    fitted_ratio
                );
                assert!(rect.left >= 0.0 && rect.top >= 0.0);
                assert!(rect.width > 0.0 && rect.width <= 1.0);
                assert!(rect.height > 0.0 && rect.height <= 1.0);
            }
        }
    }

    #[test]
    fn test_to_pixels_centers_image() {
        let rect = letterbox((1640, 615));
        let dest = rect.to_pixels(1640, 615);
        assert_eq!(dest.width(), 820);
        assert_eq!(dest.height(), 615);
        assert_eq!(dest.x(), 410);
        assert_eq!(dest.y(), 0);
    }

    #[test]
    fn test_window_to_logical_maps_center() {
        let rect = letterbox((1640, 615));
        let logical = rect.window_to_logical((820, 307), (1640, 615), LOGICAL);
        assert_eq!(logical, Some((410, 307)));
    }

    #[test]
    fn test_window_to_logical_rejects_bars() {
        let rect = letterbox((1640, 615));
        assert_eq!(rect.window_to_logical((100, 300), (1640, 615), LOGICAL), None);
        assert_eq!(rect.window_to_logical((1600, 300), (1640, 615), LOGICAL), None);
    }
}

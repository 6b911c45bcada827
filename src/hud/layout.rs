//! Anchoring helpers for HUD elements
//!
//! HUD pieces are laid out relative to each other (the minimap header sits on
//! top of the minimap, the inventory bar extends left from the minimap, ...).
//! These helpers compute the resulting rectangles in logical pixels.

use sdl2::rect::Rect;

/// Places a `(width, height)` box flush with the bottom-right corner of `container`
pub fn anchor_bottom_right(container: Rect, (width, height): (u32, u32)) -> Rect {
    Rect::new(
        container.right() - width as i32,
        container.bottom() - height as i32,
        width,
        height,
    )
}

/// Places a box so its right edge touches `anchor`'s left edge, tops aligned
pub fn left_of(anchor: Rect, (width, height): (u32, u32)) -> Rect {
    Rect::new(anchor.left() - width as i32, anchor.top(), width, height)
}

/// Places a box so its bottom edge touches `anchor`'s top edge, left edges aligned
pub fn above(anchor: Rect, (width, height): (u32, u32)) -> Rect {
    Rect::new(anchor.left(), anchor.top() - height as i32, width, height)
}

/// Top-left position that centers a `(width, height)` box inside `outer`
pub fn center_in(outer: Rect, (width, height): (u32, u32)) -> (i32, i32) {
    (
        outer.left() + (outer.width() as i32 - width as i32) / 2,
        outer.top() + (outer.height() as i32 - height as i32) / 2,
    )
}

/// Top-left position at column `x` that centers a box vertically inside `outer`
pub fn center_vertically(outer: Rect, height: u32, x: i32) -> (i32, i32) {
    (x, outer.top() + (outer.height() as i32 - height as i32) / 2)
}

/// Top-left position that ends a `width`-wide box at column `right`
pub fn align_right(right: i32, width: u32, y: i32) -> (i32, i32) {
    (right - width as i32, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_bottom_right() {
        let screen = Rect::new(0, 0, 820, 615);
        let minimap = anchor_bottom_right(screen, (220, 150));
        assert_eq!(minimap, Rect::new(600, 465, 220, 150));
        assert_eq!(minimap.right(), 820);
        assert_eq!(minimap.bottom(), 615);
    }

    #[test]
    fn test_left_of_and_above() {
        let minimap = Rect::new(600, 465, 220, 150);

        let bar = left_of(minimap, (100, 40));
        assert_eq!(bar, Rect::new(500, 465, 100, 40));

        let header = above(minimap, (220, 20));
        assert_eq!(header, Rect::new(600, 445, 220, 20));
    }

    #[test]
    fn test_center_in() {
        let outer = Rect::new(10, 20, 100, 50);
        assert_eq!(center_in(outer, (40, 10)), (40, 40));
    }

    #[test]
    fn test_center_in_larger_box_overflows_evenly() {
        let outer = Rect::new(0, 0, 10, 10);
        assert_eq!(center_in(outer, (20, 30)), (-5, -10));
    }

    #[test]
    fn test_center_vertically_keeps_column() {
        let outer = Rect::new(600, 445, 220, 20);
        assert_eq!(center_vertically(outer, 7, 606), (606, 451));
    }

    #[test]
    fn test_align_right() {
        assert_eq!(align_right(415, 29, 10), (386, 10));
    }
}

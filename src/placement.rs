//! Free-slot search for new overlays
//!
//! New overlays are dropped onto the screen by a greedy grid scan: start at
//! the top-left inset corner, walk right in 10px steps, wrap down 20px when
//! the right inset is reached, and stop at the first scan point that no
//! existing overlay contains.
//!
//! Only the scan *point* is tested, not the whole candidate rectangle, so a
//! small overlay may be placed directly beside (or partly over) a larger one.
//! With at most five overlays on screen this is good enough; it is not a
//! bin-packing solver.

use crate::geometry::{contains, Rectangle, Viewport, VIEWPORT_INSET};

/// Horizontal distance between scan points.
pub const SCAN_STEP_X: i32 = 10;

/// Vertical distance between scan lines.
pub const SCAN_STEP_Y: i32 = 20;

/// Finds a position for an overlay of the given size.
///
/// `desired` supplies the size (its position is ignored). Returns the
/// rectangle moved to the first free scan point, or `None` once the scan has
/// run past the bottom of the viewport.
///
/// # Example
///
/// ```rust
/// use keystroke_hud::geometry::{Rectangle, Viewport};
/// use keystroke_hud::placement::find_placement;
///
/// let existing = [Rectangle::new(5, 5, 75, 78)];
/// let placed = find_placement(Rectangle::new(0, 0, 25, 25), &existing, Viewport::new(800, 600));
/// assert_eq!(placed, Some(Rectangle::new(85, 5, 25, 25)));
/// ```
pub fn find_placement(
    desired: Rectangle,
    existing: &[Rectangle],
    viewport: Viewport,
) -> Option<Rectangle> {
    let occupied = |x: i32, y: i32| existing.iter().any(|rect| contains(rect, x, y));

    let mut current_x = VIEWPORT_INSET;
    let mut current_y = VIEWPORT_INSET;

    while occupied(current_x, current_y) {
        current_x += SCAN_STEP_X;

        // Reached the right inset: start the next scan line
        if current_x >= viewport.max_x() {
            current_y += SCAN_STEP_Y;
            current_x = VIEWPORT_INSET;
        }

        if current_y >= viewport.height {
            return None;
        }
    }

    Some(desired.at(current_x, current_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_screen_uses_top_left_inset() {
        let placed = find_placement(Rectangle::new(0, 0, 25, 25), &[], Viewport::new(800, 600));
        assert_eq!(placed, Some(Rectangle::new(5, 5, 25, 25)));
    }

    #[test]
    fn test_steps_right_past_existing_overlay() {
        let existing = [Rectangle::new(5, 5, 75, 78)];
        let placed = find_placement(Rectangle::new(0, 0, 25, 25), &existing, Viewport::new(800, 600));
        assert_eq!(placed, Some(Rectangle::new(85, 5, 25, 25)));
    }

    #[test]
    fn test_wraps_to_next_line() {
        let viewport = Viewport::new(200, 600);
        // Covers the whole first scan line
        let existing = [Rectangle::new(0, 0, 200, 20)];

        let placed = find_placement(Rectangle::new(0, 0, 25, 25), &existing, viewport);
        assert_eq!(placed, Some(Rectangle::new(5, 25, 25, 25)));
    }

    #[test]
    fn test_saturated_viewport_is_not_found() {
        let viewport = Viewport::new(160, 100);
        let existing = [
            Rectangle::new(0, 0, 80, 50),
            Rectangle::new(80, 0, 80, 50),
            Rectangle::new(0, 50, 80, 50),
            Rectangle::new(80, 50, 80, 50),
            Rectangle::new(40, 25, 80, 50),
        ];

        assert_eq!(find_placement(Rectangle::new(0, 0, 25, 25), &existing, viewport), None);
    }

    #[test]
    fn test_result_point_never_inside_existing() {
        let viewport = Viewport::new(400, 300);
        let existing = [
            Rectangle::new(5, 5, 75, 98),
            Rectangle::new(85, 5, 40, 27),
            Rectangle::new(125, 5, 60, 60),
            Rectangle::new(185, 0, 300, 45),
        ];

        let placed = find_placement(Rectangle::new(0, 0, 25, 25), &existing, viewport)
            .expect("slot should exist");
        for rect in &existing {
            assert!(!contains(rect, placed.x, placed.y));
        }
    }

    #[test]
    fn test_unmeasured_overlays_never_block() {
        let existing = [Rectangle::new(5, 5, 75, -1)];
        let placed = find_placement(Rectangle::new(0, 0, 25, 25), &existing, Viewport::new(800, 600));
        assert_eq!(placed, Some(Rectangle::new(5, 5, 25, 25)));
    }
}

/// Screen geometry for overlay placement
///
/// This module provides the rectangle type shared by every overlay and the
/// pure functions that keep overlays inside the visible screen area.
///
/// # Architecture
///
/// - `Rectangle`: Integer screen-space rectangle (top-left corner + size)
/// - `Viewport`: Current screen dimensions
/// - Free functions: Point containment, viewport clamping, drag bounds checks
///
/// All functions are stateless and O(1). Overlays must stay `VIEWPORT_INSET`
/// pixels away from every screen edge.
use serde::{Deserialize, Serialize};

/// Distance in pixels every overlay keeps from the screen edges.
pub const VIEWPORT_INSET: i32 = 5;

/// An axis-aligned rectangle in screen pixels.
///
/// A negative width or height marks a rectangle that has not been measured
/// yet. Such a rectangle contains no points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rectangle { x, y, width, height }
    }

    /// Returns a copy of this rectangle with its top-left corner at `(x, y)`.
    pub fn at(&self, x: i32, y: i32) -> Self {
        Rectangle { x, y, ..*self }
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Whether both dimensions are non-negative.
    pub fn is_measured(&self) -> bool {
        self.width >= 0 && self.height >= 0
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        contains(self, px, py)
    }
}

/// The current screen size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Viewport { width, height }
    }

    /// Largest allowed right edge for an overlay.
    pub fn max_x(&self) -> i32 {
        self.width - VIEWPORT_INSET
    }

    /// Largest allowed bottom edge for an overlay.
    pub fn max_y(&self) -> i32 {
        self.height - VIEWPORT_INSET
    }

    /// Whether `rect` lies fully inside the inset area of this viewport.
    pub fn fits(&self, rect: &Rectangle) -> bool {
        rect.x >= VIEWPORT_INSET
            && rect.y >= VIEWPORT_INSET
            && rect.right() <= self.max_x()
            && rect.bottom() <= self.max_y()
    }
}

/// Checks if a point lies inside a rectangle.
///
/// The left and top edges are inclusive, the right and bottom edges are
/// exclusive, so two rectangles sharing an edge never both claim a point.
/// Unmeasured rectangles (negative width or height) contain nothing.
///
/// # Example
///
/// ```rust
/// use keystroke_hud::geometry::{contains, Rectangle};
///
/// let hud = Rectangle::new(5, 5, 75, 78);
/// assert!(contains(&hud, 5, 5));
/// assert!(!contains(&hud, 80, 5));
/// ```
pub fn contains(rect: &Rectangle, px: i32, py: i32) -> bool {
    if !rect.is_measured() {
        return false;
    }

    px >= rect.x && py >= rect.y && px < rect.right() && py < rect.bottom()
}

/// Pushes a rectangle back inside the inset area of the viewport.
///
/// Only the position changes; width and height are preserved. The left/top
/// inset is applied first, then the right/bottom one, so a rectangle larger
/// than the viewport ends up pinned to the right/bottom inset.
pub fn clamp_to_viewport(rect: &Rectangle, viewport: Viewport) -> Rectangle {
    let mut clamped = *rect;

    if clamped.x < VIEWPORT_INSET {
        clamped.x = VIEWPORT_INSET;
    }
    if clamped.y < VIEWPORT_INSET {
        clamped.y = VIEWPORT_INSET;
    }
    if clamped.right() > viewport.max_x() {
        clamped.x = viewport.max_x() - clamped.width;
    }
    if clamped.bottom() > viewport.max_y() {
        clamped.y = viewport.max_y() - clamped.height;
    }

    clamped
}

/// Checks whether moving `rect`'s corner to `(proposed_x, proposed_y)` would
/// push any edge past the viewport inset.
pub fn would_exit_viewport(
    rect: &Rectangle,
    proposed_x: i32,
    proposed_y: i32,
    viewport: Viewport,
) -> bool {
    !viewport.fits(&rect.at(proposed_x, proposed_y))
}

//! Stateless clamping helpers the drag/resize controller applies before committing geometry.

use serde::{Deserialize, Serialize};

use crate::model::WindowRect;

/// Minimum managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 300;
/// Minimum managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 200;
/// Bottom strip kept clear of dragged windows for the dock.
pub const WINDOW_DOCK_RESERVE: i32 = 50;
/// Bottom strip kept clear of dragged widgets for the dock.
pub const WIDGET_DOCK_RESERVE: i32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Visible desktop area in pixels.
pub struct Viewport {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Viewport {
    /// Builds a viewport.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Constrains a box's top-left corner so the box stays inside
/// `[0, viewport_width] x [0, viewport_height - reserved_bottom]`.
///
/// Boxes larger than the available area pin to the origin edge; the result is never negative.
pub fn clamp_position(
    x: i32,
    y: i32,
    box_width: i32,
    box_height: i32,
    viewport_width: i32,
    viewport_height: i32,
    reserved_bottom: i32,
) -> (i32, i32) {
    let max_x = viewport_width - box_width;
    let max_y = viewport_height - box_height - reserved_bottom;
    (x.min(max_x).max(0), y.min(max_y).max(0))
}

/// Bounds a top-left-anchored size so `x + width <= viewport_width` and
/// `y + height <= viewport_height - reserved_bottom`, never below
/// [`MIN_WINDOW_WIDTH`] x [`MIN_WINDOW_HEIGHT`]. The minimum wins when the space is smaller.
pub fn clamp_size(
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    viewport_width: i32,
    viewport_height: i32,
    reserved_bottom: i32,
) -> (i32, i32) {
    let max_w = viewport_width - x;
    let max_h = viewport_height - y - reserved_bottom;
    (
        width.min(max_w).max(MIN_WINDOW_WIDTH),
        height.min(max_h).max(MIN_WINDOW_HEIGHT),
    )
}

/// [`clamp_position`] applied to a rect within `viewport`.
pub fn clamp_rect_position(
    rect: WindowRect,
    viewport: Viewport,
    reserved_bottom: i32,
) -> WindowRect {
    let (x, y) = clamp_position(
        rect.x,
        rect.y,
        rect.w,
        rect.h,
        viewport.width,
        viewport.height,
        reserved_bottom,
    );
    WindowRect { x, y, ..rect }
}

/// [`clamp_size`] applied to a rect within `viewport`.
pub fn clamp_rect_size(rect: WindowRect, viewport: Viewport, reserved_bottom: i32) -> WindowRect {
    let (w, h) = clamp_size(
        rect.x,
        rect.y,
        rect.w,
        rect.h,
        viewport.width,
        viewport.height,
        reserved_bottom,
    );
    WindowRect { w, h, ..rect }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn position_inside_viewport_is_unchanged() {
        assert_eq!(
            clamp_position(100, 120, 300, 200, 1280, 800, 50),
            (100, 120)
        );
    }

    #[test]
    fn position_is_pulled_back_from_right_and_dock_edges() {
        assert_eq!(
            clamp_position(1200, 700, 300, 200, 1280, 800, 50),
            (980, 550)
        );
        assert_eq!(clamp_position(-40, -10, 300, 200, 1280, 800, 50), (0, 0));
    }

    #[test]
    fn oversized_box_pins_to_origin() {
        assert_eq!(clamp_position(250, 90, 2000, 1200, 1280, 800, 50), (0, 0));
        assert_eq!(clamp_position(-5, -5, 2000, 1200, 1280, 800, 50), (0, 0));
    }

    #[test]
    fn size_respects_minimum_and_right_edge() {
        assert_eq!(clamp_size(100, 100, 120, 80, 1280, 800, 50), (300, 200));
        assert_eq!(clamp_size(1000, 100, 600, 400, 1280, 800, 50), (300, 400));
        assert_eq!(clamp_size(500, 300, 900, 900, 1280, 800, 50), (780, 450));
    }

    #[test]
    fn rect_helpers_delegate_to_scalar_clamps() {
        let viewport = Viewport::new(1000, 700);
        let rect = WindowRect::new(900, 650, 400, 300);
        assert_eq!(
            clamp_rect_position(rect, viewport, WINDOW_DOCK_RESERVE),
            WindowRect::new(600, 350, 400, 300)
        );
        let wide = WindowRect::new(100, 100, 2000, 10);
        assert_eq!(
            clamp_rect_size(wide, viewport, WINDOW_DOCK_RESERVE),
            WindowRect::new(100, 100, 900, 200)
        );
    }
}

//! Pointer-driven drag/resize protocol.
//!
//! Each gesture is `Idle -> Active` on pointer-down, `Active -> Active` on every pointer-move
//! (recompute, clamp, commit), and `Active -> Idle` on pointer-up. There is no cancel path.

use serde::{Deserialize, Serialize};

use crate::{
    geometry::{clamp_position, clamp_size, Viewport},
    model::{PointerPosition, WidgetId, WindowId, WindowRect},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Element grabbed by a drag gesture.
pub enum DragTarget {
    /// A window title bar.
    Window(WindowId),
    /// A widget body.
    Widget(WidgetId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Active drag: the pointer offset from the element's top-left corner at pointer-down.
pub struct DragSession {
    pub target: DragTarget,
    pub grab_offset: PointerPosition,
}

impl DragSession {
    pub fn begin(target: DragTarget, pointer: PointerPosition, rect: WindowRect) -> Self {
        Self {
            target,
            grab_offset: PointerPosition::new(pointer.x - rect.x, pointer.y - rect.y),
        }
    }

    /// Clamped top-left corner for `pointer`, keeping a `box_w` x `box_h` box on screen.
    pub fn position_for(
        &self,
        pointer: PointerPosition,
        box_w: i32,
        box_h: i32,
        viewport: Viewport,
        reserved_bottom: i32,
    ) -> (i32, i32) {
        clamp_position(
            pointer.x - self.grab_offset.x,
            pointer.y - self.grab_offset.y,
            box_w,
            box_h,
            viewport.width,
            viewport.height,
            reserved_bottom,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Active bottom-right resize of a window anchored at its top-left corner.
pub struct ResizeSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

impl ResizeSession {
    /// Clamped `(width, height)` for `pointer`, keeping the top-left anchor at `anchor`.
    pub fn size_for(
        &self,
        pointer: PointerPosition,
        anchor: WindowRect,
        viewport: Viewport,
        reserved_bottom: i32,
    ) -> (i32, i32) {
        clamp_size(
            anchor.x,
            anchor.y,
            self.rect_start.w + (pointer.x - self.pointer_start.x),
            self.rect_start.h + (pointer.y - self.pointer_start.y),
            viewport.width,
            viewport.height,
            reserved_bottom,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        self.dragging.is_none() && self.resizing.is_none()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn drag_keeps_grab_offset_and_clamps() {
        let session = DragSession::begin(
            DragTarget::Window(WindowId::new("w")),
            PointerPosition::new(120, 70),
            WindowRect::new(100, 50, 400, 300),
        );
        assert_eq!(session.grab_offset, PointerPosition::new(20, 20));

        let viewport = Viewport::new(1000, 700);
        assert_eq!(
            session.position_for(PointerPosition::new(320, 220), 400, 300, viewport, 50),
            (300, 200)
        );
        assert_eq!(
            session.position_for(PointerPosition::new(5_000, 5_000), 400, 300, viewport, 50),
            (600, 350)
        );
    }

    #[test]
    fn resize_grows_from_top_left_anchor() {
        let session = ResizeSession {
            window_id: WindowId::new("w"),
            pointer_start: PointerPosition::new(500, 400),
            rect_start: WindowRect::new(100, 100, 400, 300),
        };
        let viewport = Viewport::new(1000, 700);
        let anchor = session.rect_start;
        assert_eq!(
            session.size_for(PointerPosition::new(550, 450), anchor, viewport, 50),
            (450, 350)
        );
        assert_eq!(
            session.size_for(PointerPosition::new(0, 0), anchor, viewport, 50),
            (300, 200)
        );
        assert_eq!(
            session.size_for(PointerPosition::new(2_000, 2_000), anchor, viewport, 50),
            (900, 550)
        );
    }
}

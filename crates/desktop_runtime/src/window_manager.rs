//! Window collection and its transitions, used by the desktop reducer.
//!
//! The collection is kept sorted by ascending z-index so iteration order is paint order
//! (first painted is visually behind).

use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Viewport, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH},
    model::{GeometryPatch, OpenWindowRequest, WindowId, WindowRecord, WindowRect},
    reducer::ReducerError,
    z_order::ZOrderAllocator,
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
};

/// Smallest distance kept between a freshly opened window and the top/left edges.
pub const OPEN_MARGIN: i32 = 50;
/// Per-allocation cascade step for freshly opened windows.
pub const CASCADE_STEP: i32 = 10;
const CENTER_OFFSET_X: i32 = 300;
const CENTER_OFFSET_Y: i32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What [`WindowManager::open`] did.
pub enum OpenOutcome {
    /// A new window entered the collection.
    Created,
    /// The id was already open; it was focused and restored instead.
    Refocused,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Owns open windows and the window-band z-order counter.
pub struct WindowManager {
    windows: Vec<WindowRecord>,
    z_order: ZOrderAllocator,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            z_order: ZOrderAllocator::windows(),
        }
    }
}

impl WindowManager {
    /// Windows in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter()
    }

    /// Windows in paint order, as a slice.
    pub fn as_slice(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Non-minimized windows in paint order.
    pub fn visible(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter().filter(|w| w.is_visible())
    }

    /// Number of windows in the collection (minimized included).
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Returns `true` when no window is open.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Looks up a window by id.
    pub fn get(&self, id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == id)
    }

    /// Topmost non-minimized window.
    pub fn top(&self) -> Option<&WindowRecord> {
        self.visible().last()
    }

    /// Most recent z-index issued to a window.
    pub fn latest_z_index(&self) -> Option<u32> {
        self.z_order.latest()
    }

    /// Allocator backing this band.
    pub fn z_order(&self) -> &ZOrderAllocator {
        &self.z_order
    }

    /// Opens `request.id`, or focuses and restores it when it is already open.
    ///
    /// New windows cascade from the viewport center by [`CASCADE_STEP`] per allocated z-index.
    /// The cascade stops once at least a minimum-size window would no longer fit on screen.
    pub fn open(&mut self, request: OpenWindowRequest, viewport: Viewport) -> OpenOutcome {
        if self.get(&request.id).is_some() {
            // focus clears `minimized`; the id was just checked so this cannot fail.
            let _ = self.focus(&request.id);
            return OpenOutcome::Refocused;
        }

        let z_index = self.z_order.next();
        let cascade = (z_index as i32).saturating_mul(CASCADE_STEP);
        let max_x = (viewport.width - MIN_WINDOW_WIDTH).max(OPEN_MARGIN);
        let max_y = (viewport.height - MIN_WINDOW_HEIGHT).max(OPEN_MARGIN);
        let rect = WindowRect {
            x: (viewport.width / 2 - CENTER_OFFSET_X + cascade).clamp(OPEN_MARGIN, max_x),
            y: (viewport.height / 2 - CENTER_OFFSET_Y + cascade).clamp(OPEN_MARGIN, max_y),
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        };
        self.windows.push(WindowRecord {
            id: request.id,
            title: request.title,
            content_kind: request.content_kind,
            rect,
            z_index,
            minimized: false,
            maximized: false,
            props: request.props,
        });
        OpenOutcome::Created
    }

    /// Removes a window. Returns the removed record; absent ids are a no-op.
    pub fn close(&mut self, id: &WindowId) -> Option<WindowRecord> {
        let index = self.windows.iter().position(|w| &w.id == id)?;
        Some(self.windows.remove(index))
    }

    /// Hides a window while keeping its state for restore.
    pub fn minimize(&mut self, id: &WindowId) -> Result<(), ReducerError> {
        self.find_mut(id)?.minimized = true;
        Ok(())
    }

    /// Toggles `maximized` and clears `minimized`. Returns the new `maximized` value.
    pub fn maximize(&mut self, id: &WindowId) -> Result<bool, ReducerError> {
        let window = self.find_mut(id)?;
        window.maximized = !window.maximized;
        window.minimized = false;
        Ok(window.maximized)
    }

    /// Raises a window to the top of the window band and clears `minimized`.
    ///
    /// Every call allocates a fresh z-index, so repeated focus events keep strictly increasing
    /// values in call order.
    pub fn focus(&mut self, id: &WindowId) -> Result<u32, ReducerError> {
        let index = self.position(id)?;
        let z_index = self.z_order.next();
        let window = &mut self.windows[index];
        window.z_index = z_index;
        window.minimized = false;
        self.windows.sort_by_key(|w| w.z_index);
        Ok(z_index)
    }

    /// Applies a partial geometry update verbatim; callers clamp beforehand.
    pub fn update_geometry(
        &mut self,
        id: &WindowId,
        patch: GeometryPatch,
    ) -> Result<(), ReducerError> {
        let window = self.find_mut(id)?;
        window.rect = window.rect.apply(patch);
        Ok(())
    }

    fn position(&self, id: &WindowId) -> Result<usize, ReducerError> {
        self.windows
            .iter()
            .position(|w| &w.id == id)
            .ok_or_else(|| ReducerError::WindowNotFound(id.clone()))
    }

    fn find_mut(&mut self, id: &WindowId) -> Result<&mut WindowRecord, ReducerError> {
        self.windows
            .iter_mut()
            .find(|w| &w.id == id)
            .ok_or_else(|| ReducerError::WindowNotFound(id.clone()))
    }
}

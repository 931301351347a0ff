//! Desktop widget collection. Same stacking rules as windows, minus minimize/maximize.

use serde::{Deserialize, Serialize};

use crate::{
    model::{AddWidgetRequest, GeometryPatch, WidgetId, WidgetRecord},
    reducer::ReducerError,
    z_order::ZOrderAllocator,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Owns desktop widgets and the widget-band z-order counter.
pub struct WidgetManager {
    widgets: Vec<WidgetRecord>,
    z_order: ZOrderAllocator,
}

impl Default for WidgetManager {
    fn default() -> Self {
        Self {
            widgets: Vec::new(),
            z_order: ZOrderAllocator::widgets(),
        }
    }
}

impl WidgetManager {
    /// Widgets in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &WidgetRecord> {
        self.widgets.iter()
    }

    /// Widgets in paint order, as a slice.
    pub fn as_slice(&self) -> &[WidgetRecord] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn get(&self, id: &WidgetId) -> Option<&WidgetRecord> {
        self.widgets.iter().find(|w| &w.id == id)
    }

    /// Most recent z-index issued to a widget.
    pub fn latest_z_index(&self) -> Option<u32> {
        self.z_order.latest()
    }

    pub fn z_order(&self) -> &ZOrderAllocator {
        &self.z_order
    }

    /// Adds a widget at the caller-supplied geometry on top of the widget band.
    ///
    /// # Errors
    ///
    /// Returns [`ReducerError::WidgetExists`] when the id is taken; nothing changes.
    pub fn add(&mut self, request: AddWidgetRequest) -> Result<u32, ReducerError> {
        if self.get(&request.id).is_some() {
            return Err(ReducerError::WidgetExists(request.id));
        }
        let z_index = self.z_order.next();
        self.widgets.push(WidgetRecord {
            id: request.id,
            content_kind: request.content_kind,
            rect: request.rect,
            z_index,
            props: request.props,
            style_class: request.style_class,
        });
        Ok(z_index)
    }

    /// Removes a widget; absent ids are a no-op.
    pub fn remove(&mut self, id: &WidgetId) -> Option<WidgetRecord> {
        let index = self.widgets.iter().position(|w| &w.id == id)?;
        Some(self.widgets.remove(index))
    }

    /// Raises a widget within the widget band.
    pub fn focus(&mut self, id: &WidgetId) -> Result<u32, ReducerError> {
        let index = self
            .widgets
            .iter()
            .position(|w| &w.id == id)
            .ok_or_else(|| ReducerError::WidgetNotFound(id.clone()))?;
        let z_index = self.z_order.next();
        self.widgets[index].z_index = z_index;
        self.widgets.sort_by_key(|w| w.z_index);
        Ok(z_index)
    }

    /// Applies a partial geometry update verbatim; callers clamp beforehand.
    pub fn update_geometry(
        &mut self,
        id: &WidgetId,
        patch: GeometryPatch,
    ) -> Result<(), ReducerError> {
        let widget = self
            .widgets
            .iter_mut()
            .find(|w| &w.id == id)
            .ok_or_else(|| ReducerError::WidgetNotFound(id.clone()))?;
        widget.rect = widget.rect.apply(patch);
        Ok(())
    }

    /// Moves a widget and raises it.
    pub fn update_position(&mut self, id: &WidgetId, x: i32, y: i32) -> Result<u32, ReducerError> {
        self.update_geometry(id, GeometryPatch::position(x, y))?;
        self.focus(id)
    }
}

use platform_host::{seeded_tree, VirtualFileSystemTree};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    apps::starter_widgets,
    config::DesktopConfig,
    geometry::{Viewport, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH},
    widget_manager::WidgetManager,
    window_manager::WindowManager,
    z_order::PaintKey,
};

pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub String);

impl WidgetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tag naming what a window or widget displays. The presentation layer maps each tag to a
/// renderer; the core only stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    MediaPlayer,
    FileManager,
    Tasks,
    Settings,
    Browser,
    Weather,
    Calendar,
    TaskList,
    SystemMonitor,
    Notes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn apply(self, patch: GeometryPatch) -> Self {
        Self {
            x: patch.x.unwrap_or(self.x),
            y: patch.y.unwrap_or(self.y),
            w: patch.w.unwrap_or(self.w),
            h: patch.h.unwrap_or(self.h),
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 50,
            y: 50,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Partial geometry update; `None` fields keep their current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeometryPatch {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub w: Option<i32>,
    pub h: Option<i32>,
}

impl GeometryPatch {
    pub fn position(x: i32, y: i32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn size(w: i32, h: i32) -> Self {
        Self {
            w: Some(w),
            h: Some(h),
            ..Self::default()
        }
    }

    pub fn rect(rect: WindowRect) -> Self {
        Self {
            x: Some(rect.x),
            y: Some(rect.y),
            w: Some(rect.w),
            h: Some(rect.h),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.w.is_none() && self.h.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub content_kind: ContentKind,
    pub rect: WindowRect,
    pub z_index: u32,
    pub minimized: bool,
    pub maximized: bool,
    pub props: Value,
}

impl WindowRecord {
    /// Geometry the window occupies on screen: the whole viewport while maximized.
    pub fn effective_rect(&self, viewport: Viewport) -> WindowRect {
        if self.maximized {
            WindowRect::new(0, 0, viewport.width, viewport.height)
        } else {
            self.rect
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.minimized
    }

    /// Drag and resize are refused while a window is maximized.
    pub fn accepts_geometry_changes(&self) -> bool {
        !self.maximized
    }

    pub fn meets_minimum_size(&self) -> bool {
        self.maximized || (self.rect.w >= MIN_WINDOW_WIDTH && self.rect.h >= MIN_WINDOW_HEIGHT)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetRecord {
    pub id: WidgetId,
    pub content_kind: ContentKind,
    pub rect: WindowRect,
    pub z_index: u32,
    pub props: Value,
    pub style_class: Option<String>,
}

/// Request payload for [`crate::DesktopAction::OpenWindow`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub id: WindowId,
    pub title: String,
    pub content_kind: ContentKind,
    pub props: Value,
}

impl OpenWindowRequest {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content_kind: ContentKind) -> Self {
        Self {
            id: WindowId::new(id),
            title: title.into(),
            content_kind,
            props: Value::Null,
        }
    }

    pub fn with_props(mut self, props: Value) -> Self {
        self.props = props;
        self
    }
}

/// Request payload for [`crate::DesktopAction::AddWidget`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddWidgetRequest {
    pub id: WidgetId,
    pub content_kind: ContentKind,
    pub rect: WindowRect,
    pub style_class: Option<String>,
    pub props: Value,
}

impl AddWidgetRequest {
    pub fn new(id: impl Into<String>, content_kind: ContentKind, rect: WindowRect) -> Self {
        Self {
            id: WidgetId::new(id),
            content_kind,
            rect,
            style_class: None,
            props: Value::Null,
        }
    }

    pub fn with_style_class(mut self, style_class: impl Into<String>) -> Self {
        self.style_class = Some(style_class.into());
        self
    }

    pub fn with_props(mut self, props: Value) -> Self {
        self.props = props;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    pub file_system: VirtualFileSystemTree,
    pub windows: WindowManager,
    pub widgets: WidgetManager,
    pub background: String,
    pub viewport: Viewport,
    pub window_dock_reserve: i32,
    pub widget_dock_reserve: i32,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::from_config(&DesktopConfig::default())
    }
}

impl DesktopState {
    pub fn from_config(config: &DesktopConfig) -> Self {
        let file_system = if config.seed_file_system {
            seeded_tree()
        } else {
            VirtualFileSystemTree::new()
        };

        let mut widgets = WidgetManager::default();
        if config.starter_widgets {
            for request in starter_widgets(config.viewport) {
                if let Err(err) = widgets.add(request) {
                    tracing::warn!(%err, "skipping starter widget");
                }
            }
        }

        Self {
            file_system,
            windows: WindowManager::default(),
            widgets,
            background: config.background.clone(),
            viewport: config.viewport,
            window_dock_reserve: config.window_dock_reserve,
            widget_dock_reserve: config.widget_dock_reserve,
        }
    }

    /// Visible windows and all widgets, back to front. Every widget precedes every window.
    pub fn paint_order(&self) -> Vec<PaintItem<'_>> {
        let widget_band = self.widgets.z_order();
        let window_band = self.windows.z_order();
        let mut items: Vec<(PaintKey, PaintItem<'_>)> = self
            .widgets
            .iter()
            .map(|w| (widget_band.paint_key(w.z_index), PaintItem::Widget(w)))
            .chain(
                self.windows
                    .visible()
                    .map(|w| (window_band.paint_key(w.z_index), PaintItem::Window(w))),
            )
            .collect();
        items.sort_by_key(|(key, _)| *key);
        items.into_iter().map(|(_, item)| item).collect()
    }
}

/// One element in [`DesktopState::paint_order`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintItem<'a> {
    Widget(&'a WidgetRecord),
    Window(&'a WindowRecord),
}

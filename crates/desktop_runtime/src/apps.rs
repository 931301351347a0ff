//! Content-kind registry: dock apps, starter widgets, and the kind-to-renderer lookup the
//! presentation layer fills in.

use std::collections::HashMap;

use crate::{
    geometry::Viewport,
    model::{AddWidgetRequest, ContentKind, OpenWindowRequest, WindowRect},
    z_order::StackBand,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentDescriptor {
    pub content_kind: ContentKind,
    /// Stable id used for the single window or widget of this kind.
    pub instance_id: &'static str,
    pub label: &'static str,
    pub band: StackBand,
    pub show_in_dock: bool,
}

const CONTENT_REGISTRY: [ContentDescriptor; 10] = [
    ContentDescriptor {
        content_kind: ContentKind::MediaPlayer,
        instance_id: "spotify",
        label: "Spotify",
        band: StackBand::Windows,
        show_in_dock: true,
    },
    ContentDescriptor {
        content_kind: ContentKind::FileManager,
        instance_id: "file-manager",
        label: "BLIN Navigator",
        band: StackBand::Windows,
        show_in_dock: true,
    },
    ContentDescriptor {
        content_kind: ContentKind::Tasks,
        instance_id: "tasks",
        label: "BLIN Tareas",
        band: StackBand::Windows,
        show_in_dock: true,
    },
    ContentDescriptor {
        content_kind: ContentKind::Settings,
        instance_id: "settings",
        label: "Settings",
        band: StackBand::Windows,
        show_in_dock: true,
    },
    ContentDescriptor {
        content_kind: ContentKind::Browser,
        instance_id: "browser",
        label: "Browser",
        band: StackBand::Windows,
        show_in_dock: true,
    },
    ContentDescriptor {
        content_kind: ContentKind::Weather,
        instance_id: "weather-widget",
        label: "Weather",
        band: StackBand::Widgets,
        show_in_dock: false,
    },
    ContentDescriptor {
        content_kind: ContentKind::Calendar,
        instance_id: "calendar-widget",
        label: "Calendar",
        band: StackBand::Widgets,
        show_in_dock: false,
    },
    ContentDescriptor {
        content_kind: ContentKind::TaskList,
        instance_id: "mytasks-widget",
        label: "My Tasks",
        band: StackBand::Widgets,
        show_in_dock: false,
    },
    ContentDescriptor {
        content_kind: ContentKind::SystemMonitor,
        instance_id: "system-monitor-widget",
        label: "System Monitor",
        band: StackBand::Widgets,
        show_in_dock: false,
    },
    ContentDescriptor {
        content_kind: ContentKind::Notes,
        instance_id: "notes-widget",
        label: "Notes",
        band: StackBand::Widgets,
        show_in_dock: false,
    },
];

const STARTER_WIDGET_CLASS: &str = "p-4";

pub fn content_registry() -> &'static [ContentDescriptor] {
    &CONTENT_REGISTRY
}

pub fn dock_apps() -> Vec<ContentDescriptor> {
    content_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_in_dock)
        .collect()
}

pub fn content_descriptor(content_kind: ContentKind) -> Option<&'static ContentDescriptor> {
    content_registry()
        .iter()
        .find(|entry| entry.content_kind == content_kind)
}

/// Open request a dock click issues for `content_kind`.
pub fn default_open_request(content_kind: ContentKind) -> Option<OpenWindowRequest> {
    let descriptor = content_descriptor(content_kind)?;
    let request = OpenWindowRequest::new(descriptor.instance_id, descriptor.label, content_kind);
    (descriptor.band == StackBand::Windows).then_some(request)
}

/// The fixed widget set placed at store initialization, positioned against `viewport`.
pub fn starter_widgets(viewport: Viewport) -> Vec<AddWidgetRequest> {
    let right = viewport.width - 300;
    let placements = [
        (ContentKind::Weather, WindowRect::new(50, 100, 250, 180)),
        (ContentKind::Calendar, WindowRect::new(right, 100, 250, 280)),
        (
            ContentKind::TaskList,
            WindowRect::new(50, viewport.height - 300, 250, 200),
        ),
        (
            ContentKind::SystemMonitor,
            WindowRect::new(right, viewport.height - 280, 250, 180),
        ),
        (ContentKind::Notes, WindowRect::new(350, 100, 250, 180)),
    ];

    placements
        .into_iter()
        .filter_map(|(content_kind, rect)| {
            let descriptor = content_descriptor(content_kind)?;
            Some(
                AddWidgetRequest::new(descriptor.instance_id, content_kind, rect)
                    .with_style_class(STARTER_WIDGET_CLASS),
            )
        })
        .collect()
}

/// Maps content kinds to presentation-layer renderers.
///
/// The core never calls renderers; it only stores [`ContentKind`] tags. A UI host registers one
/// renderer per kind and resolves it when painting a window or widget.
#[derive(Debug, Clone)]
pub struct ContentRegistry<R> {
    renderers: HashMap<ContentKind, R>,
}

impl<R> Default for ContentRegistry<R> {
    fn default() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }
}

impl<R> ContentRegistry<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `renderer` for `content_kind`, returning any renderer it replaced.
    pub fn register(&mut self, content_kind: ContentKind, renderer: R) -> Option<R> {
        self.renderers.insert(content_kind, renderer)
    }

    pub fn resolve(&self, content_kind: ContentKind) -> Option<&R> {
        self.renderers.get(&content_kind)
    }

    /// Kinds from the built-in table that have no renderer yet.
    pub fn missing_kinds(&self) -> Vec<ContentKind> {
        content_registry()
            .iter()
            .map(|entry| entry.content_kind)
            .filter(|kind| !self.renderers.contains_key(kind))
            .collect()
    }
}

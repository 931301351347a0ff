//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use platform_host::{FileKind, FsError};
use thiserror::Error;

use crate::{
    geometry::{clamp_rect_position, Viewport},
    interaction::{DragSession, DragTarget, InteractionState, ResizeSession},
    model::{
        AddWidgetRequest, DesktopState, GeometryPatch, OpenWindowRequest, PointerPosition,
        WidgetId, WindowId, WindowRect,
    },
    window_manager::OpenOutcome,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window, or focus and restore it when the id is already open.
    OpenWindow(OpenWindowRequest),
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Toggle the maximized flag of a window.
    MaximizeWindow {
        /// Window to maximize or restore.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Apply already-clamped geometry to a window.
    UpdateWindowGeometry {
        /// Window to update.
        window_id: WindowId,
        /// Fields to replace.
        patch: GeometryPatch,
    },
    /// Place a new widget.
    AddWidget(AddWidgetRequest),
    /// Remove a widget by id.
    RemoveWidget {
        /// Widget to remove.
        widget_id: WidgetId,
    },
    /// Raise a widget within the widget band.
    FocusWidget {
        /// Widget to raise.
        widget_id: WidgetId,
    },
    /// Move a widget and raise it.
    UpdateWidgetPosition {
        /// Widget to move.
        widget_id: WidgetId,
        /// New left edge.
        x: i32,
        /// New top edge.
        y: i32,
    },
    /// Create a file in the folder at `path`.
    CreateFile {
        /// Parent folder segments below the root.
        path: Vec<String>,
        /// New entry name.
        name: String,
        /// File kind; [`FileKind::Folder`] creates an empty folder.
        kind: FileKind,
        /// Optional text content.
        content: Option<String>,
    },
    /// Create an empty folder in the folder at `path`.
    CreateFolder {
        /// Parent folder segments below the root.
        path: Vec<String>,
        /// New folder name.
        name: String,
    },
    /// Delete an entry and its subtree.
    DeleteFileOrFolder {
        /// Parent folder segments below the root.
        path: Vec<String>,
        /// Entry to delete.
        name: String,
    },
    /// Rename an entry in place.
    RenameFileOrFolder {
        /// Parent folder segments below the root.
        path: Vec<String>,
        /// Current entry name.
        old_name: String,
        /// Replacement name.
        new_name: String,
    },
    /// Move an entry to another folder.
    MoveFileOrFolder {
        /// Folder currently holding the entry.
        source_path: Vec<String>,
        /// Entry to move.
        name: String,
        /// Folder receiving the entry.
        destination_path: Vec<String>,
    },
    /// Replace the desktop background reference.
    SetDesktopBackground {
        /// Opaque resource reference.
        reference: String,
    },
    /// Report a new viewport size from the host.
    SetViewport {
        /// Current viewport.
        viewport: Viewport,
    },
    /// Pointer-down on a window title bar or a widget body.
    BeginMove {
        /// Element being dragged.
        target: DragTarget,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Pointer-move during a drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer-up ending a drag.
    EndMove,
    /// Pointer-down on a window's bottom-right resize handle.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Pointer-move during a resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer-up ending a resize.
    EndResize,
}

impl DesktopAction {
    /// Short action name for log records.
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenWindow(_) => "open-window",
            Self::CloseWindow { .. } => "close-window",
            Self::MinimizeWindow { .. } => "minimize-window",
            Self::MaximizeWindow { .. } => "maximize-window",
            Self::FocusWindow { .. } => "focus-window",
            Self::UpdateWindowGeometry { .. } => "update-window-geometry",
            Self::AddWidget(_) => "add-widget",
            Self::RemoveWidget { .. } => "remove-widget",
            Self::FocusWidget { .. } => "focus-widget",
            Self::UpdateWidgetPosition { .. } => "update-widget-position",
            Self::CreateFile { .. } => "create-file",
            Self::CreateFolder { .. } => "create-folder",
            Self::DeleteFileOrFolder { .. } => "delete-file-or-folder",
            Self::RenameFileOrFolder { .. } => "rename-file-or-folder",
            Self::MoveFileOrFolder { .. } => "move-file-or-folder",
            Self::SetDesktopBackground { .. } => "set-desktop-background",
            Self::SetViewport { .. } => "set-viewport",
            Self::BeginMove { .. } => "begin-move",
            Self::UpdateMove { .. } => "update-move",
            Self::EndMove => "end-move",
            Self::BeginResize { .. } => "begin-resize",
            Self::UpdateResize { .. } => "update-resize",
            Self::EndResize => "end-resize",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Refresh intents emitted by [`reduce_desktop`] for the presentation layer.
pub enum RuntimeEffect {
    /// Move keyboard focus into the newly focused window.
    FocusWindowInput(WindowId),
    /// The window collection or a window record changed.
    WindowsChanged,
    /// The widget collection or a widget record changed.
    WidgetsChanged,
    /// The virtual file tree changed.
    FileTreeChanged,
    /// The desktop background reference changed.
    BackgroundChanged,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions. A rejected action leaves the state unchanged.
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window not found: {0}")]
    WindowNotFound(WindowId),
    /// The target widget id was not found in the current state.
    #[error("widget not found: {0}")]
    WidgetNotFound(WidgetId),
    /// A widget with this id is already placed.
    #[error("widget already exists: {0}")]
    WidgetExists(WidgetId),
    /// A file-tree command was rejected.
    #[error(transparent)]
    Fs(#[from] FsError),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting refresh effects.
///
/// Each action either commits completely or returns an error with nothing changed. Close,
/// remove, and delete of a missing target succeed with no effects.
///
/// # Errors
///
/// Returns [`ReducerError`] when an action references a missing window or widget, reuses a
/// widget id, or is rejected by the file tree.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(req) => {
            let window_id = req.id.clone();
            if state.windows.open(req, state.viewport) == OpenOutcome::Created {
                tracing::debug!(%window_id, "window created");
            }
            effects.push(RuntimeEffect::WindowsChanged);
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            if state.windows.close(&window_id).is_some() {
                clear_sessions_for_window(interaction, &window_id);
                effects.push(RuntimeEffect::WindowsChanged);
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            state.windows.minimize(&window_id)?;
            effects.push(RuntimeEffect::WindowsChanged);
        }
        DesktopAction::MaximizeWindow { window_id } => {
            state.windows.maximize(&window_id)?;
            effects.push(RuntimeEffect::WindowsChanged);
        }
        DesktopAction::FocusWindow { window_id } => {
            state.windows.focus(&window_id)?;
            effects.push(RuntimeEffect::WindowsChanged);
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::UpdateWindowGeometry { window_id, patch } => {
            state.windows.update_geometry(&window_id, patch)?;
            if !patch.is_empty() {
                effects.push(RuntimeEffect::WindowsChanged);
            }
        }
        DesktopAction::AddWidget(req) => {
            state.widgets.add(req)?;
            effects.push(RuntimeEffect::WidgetsChanged);
        }
        DesktopAction::RemoveWidget { widget_id } => {
            if state.widgets.remove(&widget_id).is_some() {
                if matches!(
                    interaction.dragging.as_ref().map(|s| &s.target),
                    Some(DragTarget::Widget(id)) if *id == widget_id
                ) {
                    interaction.dragging = None;
                }
                effects.push(RuntimeEffect::WidgetsChanged);
            }
        }
        DesktopAction::FocusWidget { widget_id } => {
            state.widgets.focus(&widget_id)?;
            effects.push(RuntimeEffect::WidgetsChanged);
        }
        DesktopAction::UpdateWidgetPosition { widget_id, x, y } => {
            state.widgets.update_position(&widget_id, x, y)?;
            effects.push(RuntimeEffect::WidgetsChanged);
        }
        DesktopAction::CreateFile {
            path,
            name,
            kind,
            content,
        } => {
            state
                .file_system
                .create_entry(&path, &name, kind, content)?;
            effects.push(RuntimeEffect::FileTreeChanged);
        }
        DesktopAction::CreateFolder { path, name } => {
            state.file_system.create_folder(&path, &name)?;
            effects.push(RuntimeEffect::FileTreeChanged);
        }
        DesktopAction::DeleteFileOrFolder { path, name } => {
            if state.file_system.delete_entry(&path, &name)?.is_some() {
                effects.push(RuntimeEffect::FileTreeChanged);
            }
        }
        DesktopAction::RenameFileOrFolder {
            path,
            old_name,
            new_name,
        } => {
            let unchanged = old_name == new_name;
            state
                .file_system
                .rename_entry(&path, &old_name, &new_name)?;
            if !unchanged {
                effects.push(RuntimeEffect::FileTreeChanged);
            }
        }
        DesktopAction::MoveFileOrFolder {
            source_path,
            name,
            destination_path,
        } => {
            state
                .file_system
                .move_entry(&source_path, &name, &destination_path)?;
            effects.push(RuntimeEffect::FileTreeChanged);
        }
        DesktopAction::SetDesktopBackground { reference } => {
            state.background = reference;
            effects.push(RuntimeEffect::BackgroundChanged);
        }
        DesktopAction::SetViewport { viewport } => {
            if state.viewport != viewport {
                state.viewport = viewport;
                pull_back_into_viewport(state)?;
                effects.push(RuntimeEffect::WindowsChanged);
                effects.push(RuntimeEffect::WidgetsChanged);
            }
        }
        DesktopAction::BeginMove { target, pointer } => {
            begin_move(state, interaction, target, pointer, &mut effects)?;
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                update_move(state, session, pointer, &mut effects)?;
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::BeginResize { window_id, pointer } => {
            let window = state
                .windows
                .get(&window_id)
                .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))?;
            if window.accepts_geometry_changes() {
                let rect_start = window.rect;
                state.windows.focus(&window_id)?;
                interaction.resizing = Some(ResizeSession {
                    window_id,
                    pointer_start: pointer,
                    rect_start,
                });
                effects.push(RuntimeEffect::WindowsChanged);
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_ref() {
                let window = state
                    .windows
                    .get(&session.window_id)
                    .ok_or_else(|| ReducerError::WindowNotFound(session.window_id.clone()))?;
                if window.accepts_geometry_changes() {
                    let (w, h) = session.size_for(
                        pointer,
                        window.rect,
                        state.viewport,
                        state.window_dock_reserve,
                    );
                    state
                        .windows
                        .update_geometry(&session.window_id, GeometryPatch::size(w, h))?;
                    effects.push(RuntimeEffect::WindowsChanged);
                }
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
    }

    Ok(effects)
}

fn begin_move(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    target: DragTarget,
    pointer: PointerPosition,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    match &target {
        DragTarget::Window(window_id) => {
            let window = state
                .windows
                .get(window_id)
                .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))?;
            if !window.accepts_geometry_changes() {
                return Ok(());
            }
            let rect = window.rect;
            state.windows.focus(window_id)?;
            interaction.dragging = Some(DragSession::begin(target, pointer, rect));
            effects.push(RuntimeEffect::WindowsChanged);
        }
        DragTarget::Widget(widget_id) => {
            let rect = state
                .widgets
                .get(widget_id)
                .ok_or_else(|| ReducerError::WidgetNotFound(widget_id.clone()))?
                .rect;
            state.widgets.focus(widget_id)?;
            interaction.dragging = Some(DragSession::begin(target, pointer, rect));
            effects.push(RuntimeEffect::WidgetsChanged);
        }
    }
    Ok(())
}

fn update_move(
    state: &mut DesktopState,
    session: &DragSession,
    pointer: PointerPosition,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    match &session.target {
        DragTarget::Window(window_id) => {
            let window = state
                .windows
                .get(window_id)
                .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))?;
            if !window.accepts_geometry_changes() {
                return Ok(());
            }
            let (x, y) = session.position_for(
                pointer,
                window.rect.w,
                window.rect.h,
                state.viewport,
                state.window_dock_reserve,
            );
            state
                .windows
                .update_geometry(window_id, GeometryPatch::position(x, y))?;
            effects.push(RuntimeEffect::WindowsChanged);
        }
        DragTarget::Widget(widget_id) => {
            let rect = state
                .widgets
                .get(widget_id)
                .ok_or_else(|| ReducerError::WidgetNotFound(widget_id.clone()))?
                .rect;
            let (x, y) = session.position_for(
                pointer,
                rect.w,
                rect.h,
                state.viewport,
                state.widget_dock_reserve,
            );
            state.widgets.update_position(widget_id, x, y)?;
            effects.push(RuntimeEffect::WidgetsChanged);
        }
    }
    Ok(())
}

/// Re-clamps every window and widget position against the current viewport. Sizes are kept.
fn pull_back_into_viewport(state: &mut DesktopState) -> Result<(), ReducerError> {
    let windows: Vec<(WindowId, WindowRect)> = state
        .windows
        .iter()
        .map(|w| {
            let rect = clamp_rect_position(w.rect, state.viewport, state.window_dock_reserve);
            (w.id.clone(), rect)
        })
        .collect();
    for (id, rect) in windows {
        state
            .windows
            .update_geometry(&id, GeometryPatch::position(rect.x, rect.y))?;
    }

    let widgets: Vec<(WidgetId, WindowRect)> = state
        .widgets
        .iter()
        .map(|w| {
            let rect = clamp_rect_position(w.rect, state.viewport, state.widget_dock_reserve);
            (w.id.clone(), rect)
        })
        .collect();
    for (id, rect) in widgets {
        state
            .widgets
            .update_geometry(&id, GeometryPatch::position(rect.x, rect.y))?;
    }
    Ok(())
}

fn clear_sessions_for_window(interaction: &mut InteractionState, window_id: &WindowId) {
    if matches!(
        interaction.dragging.as_ref().map(|s| &s.target),
        Some(DragTarget::Window(id)) if id == window_id
    ) {
        interaction.dragging = None;
    }
    if interaction
        .resizing
        .as_ref()
        .is_some_and(|s| &s.window_id == window_id)
    {
        interaction.resizing = None;
    }
}

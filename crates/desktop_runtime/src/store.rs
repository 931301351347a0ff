//! Long-lived reducer container for the desktop runtime.
//!
//! [`DesktopStore`] owns the [`DesktopState`] and pointer [`InteractionState`] and is the only
//! place actions are applied. Hosts hold one store and pass it by reference; there is no global
//! instance.

use platform_host::FileKind;

use crate::{
    config::DesktopConfig,
    geometry::Viewport,
    interaction::{DragTarget, InteractionState},
    model::{
        AddWidgetRequest, DesktopState, GeometryPatch, OpenWindowRequest, PointerPosition,
        WidgetId, WindowId,
    },
    reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect},
};

/// Result of one [`DesktopStore::dispatch`] call.
pub type DispatchResult = Result<Vec<RuntimeEffect>, ReducerError>;

#[derive(Debug, Clone, Default)]
/// Desktop state plus the in-flight pointer gesture.
pub struct DesktopStore {
    state: DesktopState,
    interaction: InteractionState,
}

impl DesktopStore {
    /// Builds a store from boot settings: seeded file tree and starter widgets as configured.
    pub fn new(config: &DesktopConfig) -> Self {
        Self {
            state: DesktopState::from_config(config),
            interaction: InteractionState::default(),
        }
    }

    pub fn state(&self) -> &DesktopState {
        &self.state
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Applies `action` and returns the refresh effects it produced.
    ///
    /// Rejected actions are logged at warn level and leave the store unchanged.
    ///
    /// # Errors
    ///
    /// Returns the [`ReducerError`] reported by [`reduce_desktop`].
    pub fn dispatch(&mut self, action: DesktopAction) -> DispatchResult {
        let name = action.name();
        match reduce_desktop(&mut self.state, &mut self.interaction, action) {
            Ok(effects) => {
                if !effects.is_empty() {
                    tracing::debug!(action = name, ?effects, "desktop action committed");
                }
                Ok(effects)
            }
            Err(err) => {
                tracing::warn!(action = name, %err, "desktop action rejected");
                Err(err)
            }
        }
    }

    pub fn open_window(&mut self, request: OpenWindowRequest) -> DispatchResult {
        self.dispatch(DesktopAction::OpenWindow(request))
    }

    pub fn close_window(&mut self, window_id: &WindowId) -> DispatchResult {
        self.dispatch(DesktopAction::CloseWindow {
            window_id: window_id.clone(),
        })
    }

    pub fn minimize_window(&mut self, window_id: &WindowId) -> DispatchResult {
        self.dispatch(DesktopAction::MinimizeWindow {
            window_id: window_id.clone(),
        })
    }

    pub fn maximize_window(&mut self, window_id: &WindowId) -> DispatchResult {
        self.dispatch(DesktopAction::MaximizeWindow {
            window_id: window_id.clone(),
        })
    }

    pub fn focus_window(&mut self, window_id: &WindowId) -> DispatchResult {
        self.dispatch(DesktopAction::FocusWindow {
            window_id: window_id.clone(),
        })
    }

    /// Stores `patch` as given; callers clamp first.
    pub fn update_window_geometry(
        &mut self,
        window_id: &WindowId,
        patch: GeometryPatch,
    ) -> DispatchResult {
        self.dispatch(DesktopAction::UpdateWindowGeometry {
            window_id: window_id.clone(),
            patch,
        })
    }

    pub fn add_widget(&mut self, request: AddWidgetRequest) -> DispatchResult {
        self.dispatch(DesktopAction::AddWidget(request))
    }

    pub fn remove_widget(&mut self, widget_id: &WidgetId) -> DispatchResult {
        self.dispatch(DesktopAction::RemoveWidget {
            widget_id: widget_id.clone(),
        })
    }

    pub fn focus_widget(&mut self, widget_id: &WidgetId) -> DispatchResult {
        self.dispatch(DesktopAction::FocusWidget {
            widget_id: widget_id.clone(),
        })
    }

    pub fn update_widget_position(
        &mut self,
        widget_id: &WidgetId,
        x: i32,
        y: i32,
    ) -> DispatchResult {
        self.dispatch(DesktopAction::UpdateWidgetPosition {
            widget_id: widget_id.clone(),
            x,
            y,
        })
    }

    pub fn create_file(
        &mut self,
        path: &[&str],
        name: &str,
        kind: FileKind,
        content: Option<String>,
    ) -> DispatchResult {
        self.dispatch(DesktopAction::CreateFile {
            path: owned_path(path),
            name: name.to_string(),
            kind,
            content,
        })
    }

    pub fn create_folder(&mut self, path: &[&str], name: &str) -> DispatchResult {
        self.dispatch(DesktopAction::CreateFolder {
            path: owned_path(path),
            name: name.to_string(),
        })
    }

    pub fn delete_file_or_folder(&mut self, path: &[&str], name: &str) -> DispatchResult {
        self.dispatch(DesktopAction::DeleteFileOrFolder {
            path: owned_path(path),
            name: name.to_string(),
        })
    }

    pub fn rename_file_or_folder(
        &mut self,
        path: &[&str],
        old_name: &str,
        new_name: &str,
    ) -> DispatchResult {
        self.dispatch(DesktopAction::RenameFileOrFolder {
            path: owned_path(path),
            old_name: old_name.to_string(),
            new_name: new_name.to_string(),
        })
    }

    pub fn move_file_or_folder(
        &mut self,
        source_path: &[&str],
        name: &str,
        destination_path: &[&str],
    ) -> DispatchResult {
        self.dispatch(DesktopAction::MoveFileOrFolder {
            source_path: owned_path(source_path),
            name: name.to_string(),
            destination_path: owned_path(destination_path),
        })
    }

    pub fn set_desktop_background(&mut self, reference: impl Into<String>) -> DispatchResult {
        self.dispatch(DesktopAction::SetDesktopBackground {
            reference: reference.into(),
        })
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> DispatchResult {
        self.dispatch(DesktopAction::SetViewport { viewport })
    }

    pub fn begin_move(&mut self, target: DragTarget, pointer: PointerPosition) -> DispatchResult {
        self.dispatch(DesktopAction::BeginMove { target, pointer })
    }

    pub fn update_move(&mut self, pointer: PointerPosition) -> DispatchResult {
        self.dispatch(DesktopAction::UpdateMove { pointer })
    }

    pub fn end_move(&mut self) -> DispatchResult {
        self.dispatch(DesktopAction::EndMove)
    }

    pub fn begin_resize(
        &mut self,
        window_id: &WindowId,
        pointer: PointerPosition,
    ) -> DispatchResult {
        self.dispatch(DesktopAction::BeginResize {
            window_id: window_id.clone(),
            pointer,
        })
    }

    pub fn update_resize(&mut self, pointer: PointerPosition) -> DispatchResult {
        self.dispatch(DesktopAction::UpdateResize { pointer })
    }

    pub fn end_resize(&mut self) -> DispatchResult {
        self.dispatch(DesktopAction::EndResize)
    }
}

fn owned_path(path: &[&str]) -> Vec<String> {
    path.iter().map(|segment| segment.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::ContentKind;

    #[test]
    fn default_store_boots_seeded_desktop() {
        let store = DesktopStore::default();
        assert_eq!(store.state().widgets.len(), 5);
        assert!(store.state().windows.is_empty());
        assert_eq!(store.state().file_system.node_count(), 13);
        assert!(store.interaction().is_idle());
    }

    #[test]
    fn rejected_action_returns_error_and_keeps_state() {
        let mut store = DesktopStore::default();
        let before = store.state().clone();

        let err = store
            .minimize_window(&WindowId::new("ghost"))
            .expect_err("missing window");

        assert_eq!(err, ReducerError::WindowNotFound(WindowId::new("ghost")));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn background_change_reports_effect() {
        let mut store = DesktopStore::default();
        let effects = store
            .set_desktop_background("forest.jpg")
            .expect("background");
        assert_eq!(effects, vec![RuntimeEffect::BackgroundChanged]);
        assert_eq!(store.state().background, "forest.jpg");
    }

    #[test]
    fn open_window_reports_focus_input() {
        let mut store = DesktopStore::default();
        let effects = store
            .open_window(OpenWindowRequest::new(
                "browser",
                "Browser",
                ContentKind::Browser,
            ))
            .expect("open");
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::WindowsChanged,
                RuntimeEffect::FocusWindowInput(WindowId::new("browser")),
            ]
        );
    }
}

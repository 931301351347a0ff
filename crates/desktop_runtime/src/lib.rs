//! Headless desktop runtime: windows, widgets, the virtual file tree, and the reducer that
//! mutates them.

pub mod apps;
pub mod clock;
pub mod config;
pub mod geometry;
pub mod interaction;
pub mod model;
pub mod reducer;
pub mod store;
pub mod widget_manager;
pub mod window_manager;
pub mod z_order;

pub use apps::{content_registry, default_open_request, dock_apps, ContentRegistry};
pub use config::{ConfigError, DesktopConfig};
pub use geometry::{clamp_position, clamp_size, Viewport};
pub use interaction::{DragTarget, InteractionState};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use store::{DesktopStore, DispatchResult};

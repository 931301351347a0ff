use desktop_runtime::{
    default_open_request, AddWidgetRequest, ContentKind, DesktopConfig, DesktopStore, DragTarget,
    OpenWindowRequest, PaintItem, PointerPosition, ReducerError, RuntimeEffect, Viewport,
    WidgetId, WindowId, WindowRect,
};
use platform_host::{FileKind, FsError};
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn bare_store() -> DesktopStore {
    init_tracing();
    DesktopStore::new(&DesktopConfig {
        viewport: Viewport::new(1280, 800),
        starter_widgets: false,
        ..DesktopConfig::default()
    })
}

fn window_order(store: &DesktopStore) -> Vec<String> {
    store
        .state()
        .windows
        .iter()
        .map(|w| w.id.0.clone())
        .collect()
}

#[test]
fn opening_settings_twice_keeps_one_focused_window() {
    let mut store = bare_store();
    let request = default_open_request(ContentKind::Settings).expect("dock");

    store.open_window(request.clone()).expect("first open");
    store
        .open_window(OpenWindowRequest::new(
            "browser",
            "Browser",
            ContentKind::Browser,
        ))
        .expect("browser");
    store
        .minimize_window(&WindowId::new("settings"))
        .expect("minimize");
    store.open_window(request).expect("second open");

    let windows = &store.state().windows;
    assert_eq!(windows.len(), 2);
    let settings = windows.get(&WindowId::new("settings")).expect("settings");
    assert!(!settings.minimized);
    assert_eq!(Some(settings.z_index), windows.latest_z_index());
    assert_eq!(window_order(&store), vec!["browser", "settings"]);
}

#[test]
fn window_focus_sequence_sets_paint_order() {
    let mut store = bare_store();
    for id in ["a", "b", "c"] {
        store
            .open_window(OpenWindowRequest::new(id, id, ContentKind::Tasks))
            .expect("open");
    }

    let mut issued = Vec::new();
    for id in ["b", "a", "c", "a"] {
        store.focus_window(&WindowId::new(id)).expect("focus");
        issued.push(
            store
                .state()
                .windows
                .get(&WindowId::new(id))
                .expect("window")
                .z_index,
        );
    }

    assert!(issued.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(window_order(&store), vec!["b", "c", "a"]);
}

#[test]
fn widget_focus_sequence_is_monotonic_and_stays_under_windows() {
    let mut store = bare_store();
    for id in ["w1", "w2"] {
        store
            .add_widget(AddWidgetRequest::new(
                id,
                ContentKind::Notes,
                WindowRect::new(20, 20, 250, 180),
            ))
            .expect("add widget");
    }
    store
        .open_window(OpenWindowRequest::new("tasks", "Tasks", ContentKind::Tasks))
        .expect("open");

    let z_of = |store: &DesktopStore, id: &str| {
        store
            .state()
            .widgets
            .get(&WidgetId::new(id))
            .expect("widget")
            .z_index
    };
    store.focus_widget(&WidgetId::new("w1")).expect("focus w1");
    let first = z_of(&store, "w1");
    store.focus_widget(&WidgetId::new("w2")).expect("focus w2");
    let second = z_of(&store, "w2");
    assert!(first < second);

    let paint: Vec<String> = store
        .state()
        .paint_order()
        .into_iter()
        .map(|item| match item {
            PaintItem::Widget(w) => w.id.0.clone(),
            PaintItem::Window(w) => w.id.0.clone(),
        })
        .collect();
    assert_eq!(paint, vec!["w1", "w2", "tasks"]);
}

#[test]
fn minimized_windows_are_not_painted() {
    let mut store = bare_store();
    store
        .open_window(OpenWindowRequest::new("a", "A", ContentKind::Browser))
        .expect("open");
    store.minimize_window(&WindowId::new("a")).expect("minimize");

    assert!(store.state().paint_order().is_empty());
    assert_eq!(store.state().windows.len(), 1);
}

#[test]
fn reports_folder_move_through_store() {
    let mut store = bare_store();
    store.create_folder(&["Desktop"], "Reports").expect("folder");
    store
        .create_file(
            &["Desktop", "Reports"],
            "Q1.txt",
            FileKind::Text,
            Some("revenue up".to_string()),
        )
        .expect("file");
    let id = store
        .state()
        .file_system
        .find(&["Desktop", "Reports"], "Q1.txt")
        .expect("q1")
        .id;

    let effects = store
        .move_file_or_folder(&["Desktop", "Reports"], "Q1.txt", &["Documents"])
        .expect("move");

    assert_eq!(effects, vec![RuntimeEffect::FileTreeChanged]);
    let fs = &store.state().file_system;
    let reports = fs.list(&["Desktop", "Reports"]).expect("reports");
    assert!(reports.is_empty());
    let moved = fs.find(&["Documents"], "Q1.txt").expect("moved");
    assert_eq!(moved.id, id);
    assert_eq!(moved.content.as_deref(), Some("revenue up"));
    assert_eq!(
        fs.path_of(id),
        Some(vec!["Documents".to_string(), "Q1.txt".to_string()])
    );
}

#[test]
fn rejected_file_commands_leave_tree_unchanged() {
    let mut store = bare_store();
    let before = store.state().file_system.clone();

    let err = store
        .move_file_or_folder(
            &["Desktop"],
            "Project Aurora",
            &["Desktop", "Project Aurora"],
        )
        .expect_err("into itself");
    assert_eq!(
        err,
        ReducerError::Fs(FsError::InvalidMove {
            name: "Project Aurora".to_string()
        })
    );

    let err = store
        .rename_file_or_folder(&["Desktop"], "Missing.txt", "Other.txt")
        .expect_err("missing");
    assert!(matches!(err, ReducerError::Fs(FsError::NotFound { .. })));

    assert_eq!(store.state().file_system, before);
}

#[test]
fn deleting_missing_entry_is_quiet() {
    let mut store = bare_store();
    let effects = store
        .delete_file_or_folder(&["Downloads"], "nothing.zip")
        .expect("no-op delete");
    assert!(effects.is_empty());
}

#[test]
fn window_drag_session_clamps_each_move() {
    let mut store = bare_store();
    let id = WindowId::new("browser");
    store
        .open_window(OpenWindowRequest::new(
            "browser",
            "Browser",
            ContentKind::Browser,
        ))
        .expect("open");
    let start = store.state().windows.get(&id).expect("browser").rect;

    store
        .begin_move(
            DragTarget::Window(id.clone()),
            PointerPosition::new(start.x + 5, start.y + 5),
        )
        .expect("begin");
    store
        .update_move(PointerPosition::new(-400, -400))
        .expect("move up-left");
    let rect = store.state().windows.get(&id).expect("browser").rect;
    assert_eq!((rect.x, rect.y), (0, 0));

    store
        .update_move(PointerPosition::new(105, 55))
        .expect("move inside");
    let rect = store.state().windows.get(&id).expect("browser").rect;
    assert_eq!((rect.x, rect.y), (100, 50));

    store.end_move().expect("end");
    assert!(store.interaction().is_idle());
}

#[test]
fn starter_widgets_boot_with_unique_z_values() {
    init_tracing();
    let store = DesktopStore::new(&DesktopConfig::default());
    let mut z: Vec<u32> = store.state().widgets.iter().map(|w| w.z_index).collect();
    assert_eq!(z.len(), 5);
    z.dedup();
    assert_eq!(z.len(), 5);
    assert!(z.iter().all(|value| *value > 100));
}

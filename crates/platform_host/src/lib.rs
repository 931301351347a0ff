//! Host-domain models shared by the desktop runtime.
//!
//! This crate owns the in-memory virtual filesystem the desktop windows browse and the small
//! clock helpers periodic widgets read. It has no UI dependencies; the desktop state store in
//! `desktop_runtime` composes it with window and widget management.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod fs;
pub mod time;

pub use fs::path::{
    is_same_or_descendant, join_virtual_path, normalize_virtual_path, parse_virtual_path,
};
pub use fs::seed::seeded_tree;
pub use fs::types::{FileKind, FileNode, NodeId, ROOT_FOLDER_NAME};
pub use fs::{FsError, VirtualFileSystemTree};
pub use time::{unix_time_ms_now, utc_time_of_day, MS_PER_SECOND};

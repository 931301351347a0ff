//! Virtual filesystem error contract.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejections reported by [`crate::fs::VirtualFileSystemTree`] mutations and lookups.
///
/// Every variant is recoverable: the tree is left exactly as it was before the failed call.
pub enum FsError {
    /// The target name collides with an existing sibling.
    #[error("a file or folder named \"{name}\" already exists in {path}")]
    DuplicateName {
        /// Colliding entry name.
        name: String,
        /// Display path of the folder holding the collision.
        path: String,
    },
    /// A supplied path does not resolve to an existing folder.
    #[error("folder not found: {path}")]
    PathNotFound {
        /// Display path that failed to resolve.
        path: String,
    },
    /// A folder move targeted the folder itself or one of its descendants.
    #[error("cannot move folder \"{name}\" into itself or one of its subfolders")]
    InvalidMove {
        /// Name of the folder being moved.
        name: String,
    },
    /// The named entry does not exist in the resolved folder.
    #[error("\"{name}\" not found in {path}")]
    NotFound {
        /// Missing entry name.
        name: String,
        /// Display path of the folder that was searched.
        path: String,
    },
    /// The entry name is empty or contains a path separator.
    #[error("invalid entry name {name:?}")]
    InvalidName {
        /// Rejected name.
        name: String,
    },
}

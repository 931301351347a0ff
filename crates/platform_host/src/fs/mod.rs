//! Virtual filesystem: node model, path helpers, the mutable tree, and its starter content.

pub mod error;
pub mod path;
pub mod seed;
pub mod tree;
pub mod types;

pub use error::FsError;
pub use tree::VirtualFileSystemTree;

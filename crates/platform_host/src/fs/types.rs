//! Virtual filesystem data types shared by the tree and its consumers.

use serde::{Deserialize, Serialize};

/// Name of the single root folder of every virtual tree.
pub const ROOT_FOLDER_NAME: &str = "Root";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Stable identifier for a node in a virtual tree.
pub struct NodeId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Kind of a virtual filesystem entry.
pub enum FileKind {
    /// Container entry; the only kind that owns children.
    Folder,
    /// Generic document (also used for unknown file types).
    Document,
    /// Raster image.
    Image,
    /// PDF document.
    Pdf,
    /// Audio track.
    Audio,
    /// Video clip.
    Video,
    /// Plain text.
    Text,
}

impl FileKind {
    /// Returns `true` for [`FileKind::Folder`].
    pub fn is_folder(self) -> bool {
        matches!(self, Self::Folder)
    }

    /// Guesses a file kind from the extension embedded in `name`.
    ///
    /// Unrecognized names fall back to [`FileKind::Document`]. Never returns
    /// [`FileKind::Folder`].
    pub fn infer_from_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.contains(".txt") {
            Self::Text
        } else if lower.contains(".jpg") || lower.contains(".png") {
            Self::Image
        } else if lower.contains(".pdf") {
            Self::Pdf
        } else if lower.contains(".mp3") {
            Self::Audio
        } else if lower.contains(".mp4") {
            Self::Video
        } else {
            Self::Document
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One file or folder in the virtual tree.
pub struct FileNode {
    /// Identifier unique across the whole tree.
    pub id: NodeId,
    /// Entry name, unique among its siblings.
    pub name: String,
    /// Entry kind.
    pub kind: FileKind,
    /// Text payload for non-folder entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Ordered children; `Some` exactly when `kind` is a folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FileNode>>,
}

impl FileNode {
    /// Builds an empty folder node.
    pub fn folder(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: FileKind::Folder,
            content: None,
            children: Some(Vec::new()),
        }
    }

    /// Builds a non-folder node. Passing [`FileKind::Folder`] yields an empty folder instead.
    pub fn file(id: NodeId, name: impl Into<String>, kind: FileKind, content: Option<String>) -> Self {
        if kind.is_folder() {
            return Self::folder(id, name);
        }
        Self {
            id,
            name: name.into(),
            kind,
            content,
            children: None,
        }
    }

    /// Returns `true` when this node is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind.is_folder()
    }

    /// Returns the children slice, empty for non-folders.
    pub fn children(&self) -> &[FileNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Finds a direct child by exact name.
    pub fn child(&self, name: &str) -> Option<&FileNode> {
        self.children().iter().find(|child| child.name == name)
    }

    /// Finds a direct folder child by exact name.
    pub fn child_folder(&self, name: &str) -> Option<&FileNode> {
        self.children()
            .iter()
            .find(|child| child.name == name && child.is_folder())
    }

    pub(crate) fn child_folder_mut(&mut self, name: &str) -> Option<&mut FileNode> {
        self.children
            .as_mut()?
            .iter_mut()
            .find(|child| child.name == name && child.is_folder())
    }

    /// Counts this node and all descendants.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(FileNode::subtree_len)
            .sum::<usize>()
    }

    /// Returns the largest id in this subtree.
    pub fn max_id(&self) -> NodeId {
        self.children()
            .iter()
            .map(FileNode::max_id)
            .fold(self.id, NodeId::max)
    }
}

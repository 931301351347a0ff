//! In-memory virtual filesystem tree with name-addressed structural mutation.
//!
//! Every mutating operation validates its preconditions against the current tree before it
//! touches anything, so a rejected call leaves the tree unchanged without cloning it.

use std::iter;

use serde::{Deserialize, Serialize};

use crate::fs::{
    error::FsError,
    path::{is_same_or_descendant, join_virtual_path},
    types::{FileKind, FileNode, NodeId, ROOT_FOLDER_NAME},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Owner of the virtual file/folder hierarchy.
pub struct VirtualFileSystemTree {
    root: FileNode,
    next_node_id: u64,
}

impl Default for VirtualFileSystemTree {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualFileSystemTree {
    /// Creates a tree holding only an empty root folder.
    pub fn new() -> Self {
        Self {
            root: FileNode::folder(NodeId(1), ROOT_FOLDER_NAME),
            next_node_id: 2,
        }
    }

    /// Wraps an existing root, continuing id allocation after its largest id.
    pub fn from_root(root: FileNode) -> Self {
        let next_node_id = root.max_id().0.saturating_add(1);
        Self { root, next_node_id }
    }

    /// Returns the root folder.
    pub fn root(&self) -> &FileNode {
        &self.root
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.subtree_len()
    }

    /// Resolves `path` to a folder by walking children by exact name from the root.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::PathNotFound`] when a segment is missing or names a non-folder.
    pub fn resolve_folder<S: AsRef<str>>(&self, path: &[S]) -> Result<&FileNode, FsError> {
        let mut current = &self.root;
        for segment in path {
            current = current
                .child_folder(segment.as_ref())
                .ok_or_else(|| path_not_found(path))?;
        }
        Ok(current)
    }

    /// Lists the children of the folder at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::PathNotFound`] when `path` does not resolve.
    pub fn list<S: AsRef<str>>(&self, path: &[S]) -> Result<&[FileNode], FsError> {
        self.resolve_folder(path).map(FileNode::children)
    }

    /// Looks up the entry `name` inside the folder at `path`.
    pub fn find<S: AsRef<str>>(&self, path: &[S], name: &str) -> Option<&FileNode> {
        self.resolve_folder(path).ok()?.child(name)
    }

    /// Finds a node anywhere in the tree by id.
    pub fn find_by_id(&self, id: NodeId) -> Option<&FileNode> {
        fn walk(node: &FileNode, id: NodeId) -> Option<&FileNode> {
            if node.id == id {
                return Some(node);
            }
            node.children().iter().find_map(|child| walk(child, id))
        }
        walk(&self.root, id)
    }

    /// Returns `true` when a node with `id` is anywhere in the tree.
    pub fn contains_id(&self, id: NodeId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Returns the full folder-name path of a node (root is the empty path).
    pub fn path_of(&self, id: NodeId) -> Option<Vec<String>> {
        fn walk(node: &FileNode, id: NodeId, trail: &mut Vec<String>) -> bool {
            for child in node.children() {
                trail.push(child.name.clone());
                if child.id == id || walk(child, id, trail) {
                    return true;
                }
                trail.pop();
            }
            false
        }

        if self.root.id == id {
            return Some(Vec::new());
        }
        let mut trail = Vec::new();
        walk(&self.root, id, &mut trail).then_some(trail)
    }

    /// Creates a new entry inside the folder at `path` and returns its id.
    ///
    /// Folders get an empty child list and never keep `content`.
    ///
    /// # Errors
    ///
    /// - [`FsError::InvalidName`] for empty names or names containing `/`.
    /// - [`FsError::PathNotFound`] when `path` does not resolve.
    /// - [`FsError::DuplicateName`] when a sibling named `name` exists.
    pub fn create_entry<S: AsRef<str>>(
        &mut self,
        path: &[S],
        name: &str,
        kind: FileKind,
        content: Option<String>,
    ) -> Result<NodeId, FsError> {
        validate_name(name)?;
        let parent = self.resolve_folder(path)?;
        if parent.child(name).is_some() {
            return Err(duplicate_name(name, path));
        }

        let id = self.allocate_id();
        let node = FileNode::file(id, name, kind, content);
        folder_children_mut(self.resolve_folder_mut(path)?).push(node);
        Ok(id)
    }

    /// Creates an empty folder inside the folder at `path`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_entry`].
    pub fn create_folder<S: AsRef<str>>(&mut self, path: &[S], name: &str) -> Result<NodeId, FsError> {
        self.create_entry(path, name, FileKind::Folder, None)
    }

    /// Removes the entry `name` from the folder at `path`, returning the detached subtree.
    ///
    /// An absent entry is not an error and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::PathNotFound`] when `path` does not resolve.
    pub fn delete_entry<S: AsRef<str>>(
        &mut self,
        path: &[S],
        name: &str,
    ) -> Result<Option<FileNode>, FsError> {
        let siblings = folder_children_mut(self.resolve_folder_mut(path)?);
        Ok(siblings
            .iter()
            .position(|child| child.name == name)
            .map(|index| siblings.remove(index)))
    }

    /// Renames `old_name` to `new_name` in place, keeping the node id and children.
    ///
    /// Renaming an entry to its current name succeeds without changes.
    ///
    /// # Errors
    ///
    /// - [`FsError::InvalidName`] when `new_name` is empty or contains `/`.
    /// - [`FsError::PathNotFound`] when `path` does not resolve.
    /// - [`FsError::NotFound`] when `old_name` is absent.
    /// - [`FsError::DuplicateName`] when `new_name` belongs to a different sibling.
    pub fn rename_entry<S: AsRef<str>>(
        &mut self,
        path: &[S],
        old_name: &str,
        new_name: &str,
    ) -> Result<NodeId, FsError> {
        validate_name(new_name)?;
        let parent = self.resolve_folder(path)?;
        let item = parent
            .child(old_name)
            .ok_or_else(|| not_found(old_name, path))?;
        let item_id = item.id;
        if parent
            .children()
            .iter()
            .any(|child| child.name == new_name && child.id != item_id)
        {
            return Err(duplicate_name(new_name, path));
        }

        let siblings = folder_children_mut(self.resolve_folder_mut(path)?);
        if let Some(node) = siblings.iter_mut().find(|child| child.id == item_id) {
            node.name = new_name.to_string();
        }
        Ok(item_id)
    }

    /// Moves `name` from the folder at `source_path` to the end of the folder at
    /// `destination_path`, preserving the node's id, content, and children.
    ///
    /// # Errors
    ///
    /// - [`FsError::PathNotFound`] when either folder does not resolve.
    /// - [`FsError::NotFound`] when `name` is absent from the source folder.
    /// - [`FsError::DuplicateName`] when the destination already holds an entry named `name`.
    /// - [`FsError::InvalidMove`] when a folder would move into itself or its own subtree.
    ///
    /// Containment compares whole path segments, so `Desktop/Proj` may move into its sibling
    /// `Desktop/Project Aurora` even though one name is a text prefix of the other.
    pub fn move_entry<S, D>(
        &mut self,
        source_path: &[S],
        name: &str,
        destination_path: &[D],
    ) -> Result<NodeId, FsError>
    where
        S: AsRef<str>,
        D: AsRef<str>,
    {
        let source = self.resolve_folder(source_path)?;
        let destination = self.resolve_folder(destination_path)?;
        let item = source
            .child(name)
            .ok_or_else(|| not_found(name, source_path))?;
        let item_id = item.id;
        if destination.child(name).is_some() {
            return Err(duplicate_name(name, destination_path));
        }
        if item.is_folder() {
            let item_path: Vec<&str> = source_path
                .iter()
                .map(AsRef::as_ref)
                .chain(iter::once(name))
                .collect();
            if is_same_or_descendant(destination_path, item_path.as_slice()) {
                return Err(FsError::InvalidMove {
                    name: name.to_string(),
                });
            }
        }

        let siblings = folder_children_mut(self.resolve_folder_mut(source_path)?);
        let index = siblings
            .iter()
            .position(|child| child.id == item_id)
            .ok_or_else(|| not_found(name, source_path))?;
        let node = siblings.remove(index);

        match self.resolve_folder_mut(destination_path) {
            Ok(destination) => {
                folder_children_mut(destination).push(node);
                Ok(item_id)
            }
            Err(err) => {
                // Revert the detach so the tree matches its pre-call shape.
                if let Ok(source) = self.resolve_folder_mut(source_path) {
                    folder_children_mut(source).insert(index, node);
                }
                Err(err)
            }
        }
    }

    fn resolve_folder_mut<S: AsRef<str>>(&mut self, path: &[S]) -> Result<&mut FileNode, FsError> {
        let mut current = &mut self.root;
        for segment in path {
            current = current
                .child_folder_mut(segment.as_ref())
                .ok_or_else(|| path_not_found(path))?;
        }
        Ok(current)
    }

    fn allocate_id(&mut self) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id = self.next_node_id.saturating_add(1);
        id
    }
}

fn folder_children_mut(folder: &mut FileNode) -> &mut Vec<FileNode> {
    folder.children.get_or_insert_with(Vec::new)
}

fn validate_name(name: &str) -> Result<(), FsError> {
    if name.trim().is_empty() || name.contains('/') {
        return Err(FsError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn path_not_found<S: AsRef<str>>(path: &[S]) -> FsError {
    FsError::PathNotFound {
        path: join_virtual_path(path),
    }
}

fn not_found<S: AsRef<str>>(name: &str, path: &[S]) -> FsError {
    FsError::NotFound {
        name: name.to_string(),
        path: join_virtual_path(path),
    }
}

fn duplicate_name<S: AsRef<str>>(name: &str, path: &[S]) -> FsError {
    FsError::DuplicateName {
        name: name.to_string(),
        path: join_virtual_path(path),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const ROOT: [&str; 0] = [];

    fn tree_with_desktop() -> VirtualFileSystemTree {
        let mut tree = VirtualFileSystemTree::new();
        tree.create_folder(&ROOT, "Desktop").expect("create desktop");
        tree.create_folder(&["Desktop"], "Project Aurora")
            .expect("create project");
        tree.create_entry(&["Desktop"], "a.txt", FileKind::Text, Some("a".into()))
            .expect("create a.txt");
        tree
    }

    #[test]
    fn resolve_folder_rejects_missing_and_non_folder_segments() {
        let tree = tree_with_desktop();
        assert_eq!(tree.resolve_folder(&ROOT).expect("root").name, "Root");
        assert_eq!(
            tree.resolve_folder(&["Desktop", "Project Aurora"])
                .expect("nested")
                .name,
            "Project Aurora"
        );
        assert_eq!(
            tree.resolve_folder(&["Desktop", "a.txt"]),
            Err(FsError::PathNotFound {
                path: "/Desktop/a.txt".to_string()
            })
        );
        assert!(matches!(
            tree.resolve_folder(&["Nope"]),
            Err(FsError::PathNotFound { .. })
        ));
    }

    #[test]
    fn create_entry_allocates_unique_ids_and_rejects_duplicates() {
        let mut tree = tree_with_desktop();
        let before = tree.clone();

        let err = tree
            .create_entry(&["Desktop"], "a.txt", FileKind::Text, None)
            .expect_err("duplicate");
        assert_eq!(
            err,
            FsError::DuplicateName {
                name: "a.txt".to_string(),
                path: "/Desktop".to_string()
            }
        );
        assert_eq!(tree, before);

        let id = tree
            .create_entry(&["Desktop"], "b.txt", FileKind::Text, None)
            .expect("create b.txt");
        assert!(tree.find_by_id(id).is_some());
        assert_eq!(tree.node_count(), before.node_count() + 1);
    }

    #[test]
    fn create_entry_rejects_blank_names() {
        let mut tree = tree_with_desktop();
        let before = tree.clone();
        for name in ["", "   ", "a/b"] {
            assert!(matches!(
                tree.create_folder(&["Desktop"], name),
                Err(FsError::InvalidName { .. })
            ));
        }
        assert_eq!(tree, before);
    }

    #[test]
    fn delete_missing_entry_is_noop() {
        let mut tree = tree_with_desktop();
        let before = tree.clone();
        assert_eq!(tree.delete_entry(&["Desktop"], "ghost").expect("noop"), None);
        assert_eq!(tree, before);
        assert!(matches!(
            tree.delete_entry(&["Ghost"], "a.txt"),
            Err(FsError::PathNotFound { .. })
        ));
    }

    #[test]
    fn delete_returns_detached_subtree() {
        let mut tree = tree_with_desktop();
        tree.create_entry(&["Desktop", "Project Aurora"], "plan.txt", FileKind::Text, None)
            .expect("nested file");
        let removed = tree
            .delete_entry(&["Desktop"], "Project Aurora")
            .expect("delete")
            .expect("removed node");
        assert_eq!(removed.children().len(), 1);
        assert!(tree.find(&["Desktop"], "Project Aurora").is_none());
        assert!(!tree.contains_id(removed.id));
        assert!(!tree.contains_id(removed.children()[0].id));
    }

    #[test]
    fn rename_preserves_id_and_children() {
        let mut tree = tree_with_desktop();
        let original = tree
            .find(&["Desktop"], "Project Aurora")
            .expect("project")
            .clone();
        tree.create_entry(&["Desktop", "Project Aurora"], "x.txt", FileKind::Text, None)
            .expect("child");

        let id = tree
            .rename_entry(&["Desktop"], "Project Aurora", "Project Borealis")
            .expect("rename");
        assert_eq!(id, original.id);
        let renamed = tree
            .find(&["Desktop"], "Project Borealis")
            .expect("renamed");
        assert_eq!(renamed.id, original.id);
        assert_eq!(renamed.children().len(), 1);
    }

    #[test]
    fn rename_to_same_name_succeeds_and_missing_source_is_rejected() {
        let mut tree = tree_with_desktop();
        let before = tree.clone();
        tree.rename_entry(&["Desktop"], "a.txt", "a.txt")
            .expect("same name");
        assert_eq!(tree, before);
        assert!(matches!(
            tree.rename_entry(&["Desktop"], "ghost", "b"),
            Err(FsError::NotFound { .. })
        ));
    }

    #[test]
    fn move_into_own_subtree_is_rejected() {
        let mut tree = tree_with_desktop();
        tree.create_folder(&["Desktop", "Project Aurora"], "Inner")
            .expect("inner");
        let before = tree.clone();

        assert_eq!(
            tree.move_entry(&["Desktop"], "Project Aurora", &["Desktop", "Project Aurora", "Inner"]),
            Err(FsError::InvalidMove {
                name: "Project Aurora".to_string()
            })
        );
        assert_eq!(tree, before);
    }

    #[test]
    fn move_folder_into_prefix_named_sibling_is_allowed() {
        let mut tree = tree_with_desktop();
        tree.create_folder(&["Desktop"], "Project").expect("project");
        tree.create_folder(&["Desktop"], "Proj").expect("proj");

        tree.move_entry(&["Desktop"], "Proj", &["Desktop", "Project"])
            .expect("segment-aware prefix check");
        assert!(tree.find(&["Desktop", "Project"], "Proj").is_some());
    }

    #[test]
    fn move_checks_paths_before_item_and_collisions() {
        let mut tree = tree_with_desktop();
        tree.create_folder(&ROOT, "Documents").expect("documents");
        tree.create_entry(&["Documents"], "a.txt", FileKind::Text, None)
            .expect("collision");
        let before = tree.clone();

        assert!(matches!(
            tree.move_entry(&["Desktop"], "ghost", &["Missing"]),
            Err(FsError::PathNotFound { .. })
        ));
        assert!(matches!(
            tree.move_entry(&["Desktop"], "ghost", &["Documents"]),
            Err(FsError::NotFound { .. })
        ));
        assert!(matches!(
            tree.move_entry(&["Desktop"], "a.txt", &["Documents"]),
            Err(FsError::DuplicateName { .. })
        ));
        assert_eq!(tree, before);
    }

    #[test]
    fn path_of_reports_full_segments() {
        let tree = tree_with_desktop();
        let id = tree
            .find(&["Desktop"], "Project Aurora")
            .expect("project")
            .id;
        assert_eq!(
            tree.path_of(id),
            Some(vec!["Desktop".to_string(), "Project Aurora".to_string()])
        );
        assert_eq!(tree.path_of(tree.root().id), Some(Vec::new()));
        assert_eq!(tree.path_of(NodeId(9_999)), None);
    }

    #[test]
    fn from_root_continues_after_largest_id() {
        let mut root = FileNode::folder(NodeId(1), ROOT_FOLDER_NAME);
        root.children = Some(vec![FileNode::folder(NodeId(41), "Desktop")]);
        let mut tree = VirtualFileSystemTree::from_root(root);
        let id = tree.create_folder(&["Desktop"], "New").expect("create");
        assert_eq!(id, NodeId(42));
    }
}

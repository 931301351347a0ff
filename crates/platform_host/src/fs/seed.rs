//! Starter content for a freshly booted desktop.

use crate::fs::{
    tree::VirtualFileSystemTree,
    types::{FileKind, FileNode, NodeId, ROOT_FOLDER_NAME},
};

struct IdSource(u64);

impl IdSource {
    fn next(&mut self) -> NodeId {
        self.0 += 1;
        NodeId(self.0)
    }
}

fn file(ids: &mut IdSource, name: &str, kind: FileKind, content: &str) -> FileNode {
    FileNode::file(ids.next(), name, kind, Some(content.to_string()))
}

fn folder(ids: &mut IdSource, name: &str, children: Vec<FileNode>) -> FileNode {
    let mut node = FileNode::folder(ids.next(), name);
    node.children = Some(children);
    node
}

/// Builds the default tree: `Desktop`, `Documents`, and `Downloads` with sample entries.
pub fn seeded_tree() -> VirtualFileSystemTree {
    let mut ids = IdSource(0);
    let root_id = ids.next();

    let desktop = {
        let project = folder(&mut ids, "Project Aurora", Vec::new());
        let children = vec![
            project,
            file(
                &mut ids,
                "Meeting_Notes.pdf",
                FileKind::Pdf,
                "This is a PDF document for the meeting notes of Project Aurora.",
            ),
            file(
                &mut ids,
                "Mountain_img.jpg",
                FileKind::Image,
                "Description of mountain image.",
            ),
            file(
                &mut ids,
                "Work_Report.docx",
                FileKind::Document,
                "This is an important work report.",
            ),
            file(
                &mut ids,
                "Audio_Track.mp3",
                FileKind::Audio,
                "This is an audio file.",
            ),
            file(
                &mut ids,
                "Holiday_Video.mp4",
                FileKind::Video,
                "This is a video from the holidays.",
            ),
        ];
        folder(&mut ids, "Desktop", children)
    };

    let documents = {
        let children = vec![
            file(
                &mut ids,
                "Annual Report.docx",
                FileKind::Document,
                "This is the annual report content.",
            ),
            file(
                &mut ids,
                "Personal_Notes.txt",
                FileKind::Text,
                "These are some personal notes: Remember to buy groceries, call mom, and finish the project.",
            ),
        ];
        folder(&mut ids, "Documents", children)
    };

    let downloads = {
        let children = vec![file(
            &mut ids,
            "setup.exe",
            FileKind::Document,
            "Executable file. Use with caution.",
        )];
        folder(&mut ids, "Downloads", children)
    };

    let mut root = FileNode::folder(root_id, ROOT_FOLDER_NAME);
    root.children = Some(vec![desktop, documents, downloads]);
    VirtualFileSystemTree::from_root(root)
}

//! In-memory tree produced by a walk

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Data shared by files and directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeEntry {
    /// Base name only.
    pub name: String,
    /// Path as supplied for the root, joined from it for descendants.
    pub path: PathBuf,
    pub permissions: String,
    pub modified: SystemTime,
    /// Depth from the root, which is level 0.
    pub level: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File {
        entry: NodeEntry,
    },
    /// `children` is empty for empty directories and for those pruned by the depth limit.
    Dir {
        entry: NodeEntry,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn entry(&self) -> &NodeEntry {
        match self {
            TreeNode::File { entry } => entry,
            TreeNode::Dir { entry, .. } => entry,
        }
    }

    pub fn name(&self) -> &str {
        &self.entry().name
    }

    pub fn path(&self) -> &Path {
        &self.entry().path
    }

    pub fn level(&self) -> usize {
        self.entry().level
    }

    pub fn modified(&self) -> SystemTime {
        self.entry().modified
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Dir { children, .. } => children,
        }
    }

    /// Element name used by the structured renderers.
    pub fn kind(&self) -> &'static str {
        match self {
            TreeNode::File { .. } => "file",
            TreeNode::Dir { .. } => "directory",
        }
    }
}

/// Directory and file totals over every node except the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub dirs: usize,
    pub files: usize,
}

impl Counts {
    /// Count `node` itself, ignoring its descendants.
    pub fn record(&mut self, node: &TreeNode) {
        if node.is_dir() {
            self.dirs += 1;
        } else {
            self.files += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.dirs + self.files
    }
}

impl std::ops::AddAssign for Counts {
    fn add_assign(&mut self, other: Counts) {
        self.dirs += other.dirs;
        self.files += other.files;
    }
}

/// Result of one walk: the root node and the totals beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    pub root: TreeNode,
    pub counts: Counts,
}

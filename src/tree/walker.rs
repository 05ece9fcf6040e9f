//! TreeWalker - builds the full tree in memory

use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::error::{Result, TreeError};

use super::config::WalkerConfig;
use super::node::{Counts, NodeEntry, Tree, TreeNode};
use super::reader::{DirectoryReader, EntryMeta, FsReader};

/// Tree walker that builds the full tree in memory and counts what it visits.
///
/// Any stat or listing failure aborts the walk; a partial tree is never returned.
pub struct TreeWalker<R = FsReader> {
    config: WalkerConfig,
    reader: R,
}

impl TreeWalker<FsReader> {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            reader: FsReader,
        }
    }
}

impl<R: DirectoryReader> TreeWalker<R> {
    /// Read the filesystem through `reader` instead.
    pub fn with_reader<S: DirectoryReader>(self, reader: S) -> TreeWalker<S> {
        TreeWalker {
            config: self.config,
            reader,
        }
    }

    pub fn walk(&self, root: &Path) -> Result<Tree> {
        self.config.validate()?;

        let meta = self
            .reader
            .stat(root)
            .map_err(|e| TreeError::path(root, e))?;

        // "." and ".." have no final component; show them as given
        let name = root
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.to_string_lossy().into_owned());

        let (root, counts) = self.walk_entry(root.to_path_buf(), name, meta, 0)?;
        debug!(
            "walked {}: {} directories, {} files",
            root.path().display(),
            counts.dirs,
            counts.files
        );
        Ok(Tree { root, counts })
    }

    /// Build the node for one entry. The returned counts cover its
    /// descendants only; the caller counts the node itself.
    fn walk_entry(
        &self,
        path: PathBuf,
        name: String,
        meta: EntryMeta,
        level: usize,
    ) -> Result<(TreeNode, Counts)> {
        let entry = NodeEntry {
            name,
            path,
            permissions: meta.permissions,
            modified: meta.modified,
            level,
        };

        if !meta.is_dir {
            return Ok((TreeNode::File { entry }, Counts::default()));
        }

        // If at max depth, return the directory but don't descend
        if self.config.at_max_depth(level) {
            trace!("not expanding {} at level {}", entry.path.display(), level);
            return Ok((
                TreeNode::Dir {
                    entry,
                    children: Vec::new(),
                },
                Counts::default(),
            ));
        }

        let names = self
            .reader
            .list(&entry.path)
            .map_err(|e| TreeError::path(&entry.path, e))?;
        debug!("expanding {} ({} entries)", entry.path.display(), names.len());

        let mut children = Vec::with_capacity(names.len());
        let mut counts = Counts::default();

        for child_name in names {
            let child_path = entry.path.join(&child_name);
            let child_meta = self
                .reader
                .stat(&child_path)
                .map_err(|e| TreeError::path(&child_path, e))?;

            if self.config.dirs_only && !child_meta.is_dir {
                continue;
            }

            let (child, child_counts) = self.walk_entry(
                child_path,
                child_name.to_string_lossy().into_owned(),
                child_meta,
                level + 1,
            )?;
            counts.record(&child);
            counts += child_counts;
            children.push(child);
        }

        if self.config.sort_by_mtime {
            // sort_by_key is stable, so equal times keep listing order
            children.sort_by_key(TreeNode::modified);
        }

        Ok((TreeNode::Dir { entry, children }, counts))
    }
}

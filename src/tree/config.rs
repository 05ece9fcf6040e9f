//! Configuration types for tree walkers

use crate::error::{Result, TreeError};

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Directories at this level or deeper are listed but never expanded.
    /// `None` means no limit.
    pub max_depth: Option<usize>,
    /// Skip files entirely: they are neither listed nor counted.
    pub dirs_only: bool,
    /// Stable-sort each directory's children by modification time, oldest first.
    pub sort_by_mtime: bool,
}

impl WalkerConfig {
    /// Reject configurations the walker cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == Some(0) {
            return Err(TreeError::Configuration(
                "level cannot be less than 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Check if a directory at `depth` must not be expanded.
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}

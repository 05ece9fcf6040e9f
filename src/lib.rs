//! Arbor - render a directory tree as box-drawing text, JSON or XML

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{
    JsonFormatter, OutputConfig, OutputFormat, PathStyle, TreeFormatter, XmlFormatter, render,
};
pub use tree::{
    Counts, DirectoryReader, EntryMeta, FsReader, NodeEntry, Tree, TreeNode, TreeWalker,
    WalkerConfig,
};

//! Directory tree building
//!
//! `TreeWalker` stats the root, then recursively lists and stats every
//! directory beneath it through a `DirectoryReader`, producing a `Tree`:
//! the root `TreeNode` plus the directory and file `Counts` beneath it.

mod config;
mod node;
mod reader;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use node::{Counts, NodeEntry, Tree, TreeNode};
pub use reader::{DirectoryReader, EntryMeta, FsReader, format_mode};
pub use walker::TreeWalker;

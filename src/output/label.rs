//! Node labels for the ASCII renderer

use crate::tree::TreeNode;

use super::config::{OutputConfig, PathStyle};

/// Text shown for `node`: its name or path, optionally prefixed with
/// `[permissions] `.
pub fn label(node: &TreeNode, config: &OutputConfig) -> String {
    let base = if config.show_relative_path {
        let path = node.path().to_string_lossy();
        match config.path_style {
            PathStyle::Native => path.into_owned(),
            PathStyle::Slash => path.replace('\\', "/"),
        }
    } else {
        node.name().to_string()
    };

    if config.show_permissions {
        format!("[{}] {}", node.entry().permissions, base)
    } else {
        base
    }
}

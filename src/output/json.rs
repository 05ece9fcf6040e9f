//! JSON output formatting
//!
//! The document is a two-element array: the nested tree, then a report
//! object with the counts. Each node object sits on its own line, indented
//! two spaces per level; a directory's closing `]}` lines up with its
//! opening line.

use serde::Serialize;

use crate::error::Result;
use crate::tree::{Counts, Tree, TreeNode};

use super::config::OutputConfig;

#[derive(Serialize)]
struct Report {
    #[serde(rename = "type")]
    kind: &'static str,
    directories: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<usize>,
}

/// Formatter for JSON output.
pub struct JsonFormatter {
    config: OutputConfig,
}

impl JsonFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the document, without a trailing newline.
    pub fn format(&self, tree: &Tree) -> Result<String> {
        let mut output = String::from("[");
        self.format_node(&tree.root, &mut output)?;
        output.push_str(",\n");
        output.push_str(&self.report(tree.counts)?);
        output.push(']');
        Ok(output)
    }

    fn report(&self, counts: Counts) -> Result<String> {
        let report = Report {
            kind: "report",
            directories: counts.dirs,
            files: (!self.config.dirs_only).then_some(counts.files),
        };
        Ok(serde_json::to_string(&report)?)
    }

    fn format_node(&self, node: &TreeNode, output: &mut String) -> Result<()> {
        let indent = " ".repeat(node.level() * 2);

        output.push_str(&indent);
        output.push_str("{\"type\":\"");
        output.push_str(node.kind());
        output.push_str("\",\"name\":");
        output.push_str(&to_json_string(node.name())?);
        if self.config.show_permissions {
            output.push_str(",\"permissions\":");
            output.push_str(&to_json_string(&node.entry().permissions)?);
        }

        match node {
            TreeNode::File { .. } => output.push('}'),
            TreeNode::Dir { children, .. } => {
                output.push_str(",\"children\":[\n");
                for (i, child) in children.iter().enumerate() {
                    self.format_node(child, output)?;
                    if i != children.len() - 1 {
                        output.push(',');
                    }
                    output.push('\n');
                }
                output.push_str(&indent);
                output.push_str("]}");
            }
        }
        Ok(())
    }
}

fn to_json_string(s: &str) -> Result<String> {
    Ok(serde_json::to_string(s)?)
}

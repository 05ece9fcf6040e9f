//! XML output formatting

use std::borrow::Cow;

use crate::tree::{Counts, Tree, TreeNode};

use super::config::OutputConfig;

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Formatter for XML output.
pub struct XmlFormatter {
    config: OutputConfig,
}

impl XmlFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the document, without a trailing newline.
    pub fn format(&self, tree: &Tree) -> String {
        let mut output = String::from(XML_HEADER);
        output.push_str("<tree>\n");
        self.format_node(&tree.root, &mut output);
        self.format_report(tree.counts, &mut output);
        output.push_str("</tree>");
        output
    }

    fn format_node(&self, node: &TreeNode, output: &mut String) {
        // Nodes sit one level inside <tree>
        let indent = " ".repeat(node.level() * 2 + 2);

        output.push_str(&indent);
        output.push('<');
        output.push_str(node.kind());
        output.push_str(" name=\"");
        output.push_str(&escape(node.name()));
        output.push('"');
        if self.config.show_permissions {
            output.push_str(" permissions=\"");
            output.push_str(&escape(&node.entry().permissions));
            output.push('"');
        }
        output.push_str(">\n");

        for child in node.children() {
            self.format_node(child, output);
        }

        output.push_str(&indent);
        output.push_str("</");
        output.push_str(node.kind());
        output.push_str(">\n");
    }

    fn format_report(&self, counts: Counts, output: &mut String) {
        output.push_str("  <report>\n");
        output.push_str(&format!(
            "    <directories>{}</directories>\n",
            counts.dirs
        ));
        if !self.config.dirs_only {
            output.push_str(&format!("    <files>{}</files>\n", counts.files));
        }
        output.push_str("  </report>\n");
    }
}

/// Escape text for use inside a double-quoted attribute value.
fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

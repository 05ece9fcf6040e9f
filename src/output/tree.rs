//! Tree formatter for box-drawing output
//!
//! This module provides `TreeFormatter` which formats a complete `Tree`
//! into a string or prints it with colors.
//!
//! Every line below the root is `continuation + connector + label`. The
//! continuation has one three-column cell per ancestor between the root and
//! the node's parent: `│  ` when that ancestor still has siblings below it,
//! blank otherwise.

use std::convert::Infallible;
use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{Counts, Tree, TreeNode};

use super::config::OutputConfig;
use super::label::label;

const BRANCH: &str = "│──";
const LAST_BRANCH: &str = "└──";
const VERTICAL: &str = "│  ";
const BLANK: &str = "   ";

/// Formatter for ASCII tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the tree and summary line, without a trailing newline.
    pub fn format(&self, tree: &Tree) -> String {
        let mut output = String::new();
        let mut emit = |prefix: &str, node: &TreeNode| -> Result<(), Infallible> {
            output.push_str(prefix);
            output.push_str(&label(node, &self.config));
            output.push('\n');
            Ok(())
        };
        let Ok(()) = self.visit(&tree.root, false, &mut Vec::new(), &mut emit);
        output.push_str(&self.summary(tree.counts));
        output
    }

    /// Print to stdout, coloring directory labels when `use_color` is set.
    pub fn print(&self, tree: &Tree) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write(tree, &mut stdout)
    }

    /// Write to any color-capable sink, followed by a newline.
    pub fn write<W: WriteColor>(&self, tree: &Tree, out: &mut W) -> io::Result<()> {
        self.visit(&tree.root, false, &mut Vec::new(), &mut |prefix, node| {
            write!(out, "{}", prefix)?;
            if node.is_dir() {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            }
            write!(out, "{}", label(node, &self.config))?;
            out.reset()?;
            writeln!(out)
        })?;
        writeln!(out, "{}", self.summary(tree.counts))
    }

    fn summary(&self, counts: Counts) -> String {
        if self.config.dirs_only {
            format!("{} directories", counts.dirs)
        } else {
            format!("{} directories {} files", counts.dirs, counts.files)
        }
    }

    /// Depth-first walk handing each node and its line prefix to `emit`.
    ///
    /// `ancestors` holds, for every ancestor below the root, whether it was
    /// the last of its siblings.
    fn visit<E, F>(
        &self,
        node: &TreeNode,
        is_last: bool,
        ancestors: &mut Vec<bool>,
        emit: &mut F,
    ) -> Result<(), E>
    where
        F: FnMut(&str, &TreeNode) -> Result<(), E>,
    {
        let prefix = if self.config.no_indent {
            String::new()
        } else {
            line_prefix(node.level(), is_last, ancestors)
        };
        emit(&prefix, node)?;

        let children = node.children();
        if children.is_empty() {
            return Ok(());
        }

        let nested = node.level() > 0;
        if nested {
            ancestors.push(is_last);
        }
        for (i, child) in children.iter().enumerate() {
            self.visit(child, i == children.len() - 1, ancestors, emit)?;
        }
        if nested {
            ancestors.pop();
        }
        Ok(())
    }
}

fn line_prefix(level: usize, is_last: bool, ancestors: &[bool]) -> String {
    if level == 0 {
        return String::new();
    }

    let mut prefix = String::with_capacity((ancestors.len() + 1) * VERTICAL.len());
    for &ancestor_is_last in ancestors {
        prefix.push_str(if ancestor_is_last { BLANK } else { VERTICAL });
    }
    prefix.push_str(if is_last { LAST_BRANCH } else { BRANCH });
    prefix
}

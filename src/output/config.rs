//! Output configuration types

/// Which renderer produces the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Ascii,
    Json,
    Xml,
}

/// How relative paths are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PathStyle {
    /// As joined by the platform.
    #[default]
    Native,
    /// Backslashes rewritten to forward slashes.
    Slash,
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Label nodes with their path instead of their base name (ASCII only).
    pub show_relative_path: bool,
    pub show_permissions: bool,
    /// Drop the file count from the summary. Should match `WalkerConfig::dirs_only`.
    pub dirs_only: bool,
    /// ASCII only: one bare label per line, no connectors or continuation bars.
    pub no_indent: bool,
    pub path_style: PathStyle,
    pub use_color: bool,
}

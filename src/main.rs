//! CLI entry point for arbor

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::debug;

use arbor::{
    OutputConfig, OutputFormat, PathStyle, TreeFormatter, TreeWalker, WalkerConfig, render,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(about = "Print a directory tree as box-drawing text, JSON or XML")]
#[command(version)]
struct Args {
    /// Directory (or file) to display
    path: PathBuf,

    /// Show each entry's path instead of its name
    #[arg(short = 'f')]
    full_path: bool,

    /// List directories only
    #[arg(short = 'd')]
    dirs_only: bool,

    /// Descend only N levels deep
    #[arg(short = 'l', value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    level: Option<u64>,

    /// Show permissions before each name
    #[arg(short = 'p')]
    permissions: bool,

    /// Sort entries by modification time, oldest first
    #[arg(short = 't')]
    sort_by_mtime: bool,

    /// Output as XML
    #[arg(short = 'x', conflicts_with = "json")]
    xml: bool,

    /// Output as JSON
    #[arg(short = 'j')]
    json: bool,

    /// Print one name per line without tree lines
    #[arg(short = 'i')]
    no_indent: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Path separators used with -f: native, slash
    #[arg(long = "path-style", value_name = "STYLE", default_value = "native")]
    path_style: PathStyle,
}

impl Args {
    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.xml {
            OutputFormat::Xml
        } else {
            OutputFormat::Ascii
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("arbor: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> arbor::Result<()> {
    let walker_config = WalkerConfig {
        max_depth: args
            .level
            .map(|l| usize::try_from(l).unwrap_or(usize::MAX)),
        dirs_only: args.dirs_only,
        sort_by_mtime: args.sort_by_mtime,
    };

    let output_config = OutputConfig {
        format: args.format(),
        show_relative_path: args.full_path,
        show_permissions: args.permissions,
        dirs_only: args.dirs_only,
        no_indent: args.no_indent,
        path_style: args.path_style,
        use_color: should_use_color(args.color),
    };
    debug!("walker: {:?}, output: {:?}", walker_config, output_config);

    let tree = TreeWalker::new(walker_config).walk(&args.path)?;

    let format = output_config.format;
    match format {
        OutputFormat::Ascii => TreeFormatter::new(output_config).print(&tree)?,
        OutputFormat::Json | OutputFormat::Xml => {
            let document = render(&tree, &output_config)?;
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", document)?;
        }
    }
    Ok(())
}

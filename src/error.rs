//! Error types for tree building and rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    /// Stat or directory listing failed somewhere in the walk.
    #[error("cannot access '{}': {source}", .path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

impl TreeError {
    pub fn path(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TreeError::Path {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;

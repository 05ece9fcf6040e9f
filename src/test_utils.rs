//! Test utilities: temporary directory fixtures and an in-memory reader.
//!
//! This module is only compiled for tests and benchmarks.

use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

use crate::tree::{DirectoryReader, EntryMeta};

/// A temporary directory for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Create the `test_data` layout used throughout the tests:
    ///
    /// ```text
    /// test_data
    /// │──abc.txt
    /// │──dir1
    /// │  │──dir3
    /// │  │  └──pqr.txt
    /// │  └──dir4
    /// └──dir2
    /// ```
    pub fn sample() -> Self {
        let dir = Self::new();
        dir.add_file("test_data/abc.txt", "abc");
        dir.add_file("test_data/dir1/dir3/pqr.txt", "pqr");
        dir.add_dir("test_data/dir1/dir4");
        dir.add_dir("test_data/dir2");
        dir
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory and any missing parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory `DirectoryReader`.
///
/// Entries are listed in the order they were added, and every timestamp is
/// given as whole seconds after the epoch, which makes ordering and
/// modification-time sorting deterministic.
#[derive(Debug, Clone, Default)]
pub struct MemoryReader {
    entries: HashMap<PathBuf, EntryMeta>,
    listings: HashMap<PathBuf, Vec<OsString>>,
    unreadable: HashSet<PathBuf>,
}

impl MemoryReader {
    /// Create a reader holding an empty root directory.
    pub fn new(root: &str) -> Self {
        Self::default().dir(root, 0)
    }

    /// The same layout as `TestDir::sample`, rooted at `test_data`.
    pub fn sample() -> Self {
        Self::new("test_data")
            .file("test_data/abc.txt", 10)
            .dir("test_data/dir1", 20)
            .dir("test_data/dir1/dir3", 30)
            .file("test_data/dir1/dir3/pqr.txt", 40)
            .dir("test_data/dir1/dir4", 25)
            .dir("test_data/dir2", 5)
    }

    pub fn dir(self, path: &str, modified_secs: u64) -> Self {
        self.insert(path, true, modified_secs, "-rwxr-xr-x")
    }

    pub fn file(self, path: &str, modified_secs: u64) -> Self {
        self.insert(path, false, modified_secs, "-rw-r--r--")
    }

    /// List `path` under its parent but make stat on it fail, as a dangling
    /// symlink does.
    pub fn dangling(mut self, path: &str) -> Self {
        let path = PathBuf::from(path);
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            self.listings
                .entry(parent.to_path_buf())
                .or_default()
                .push(name.to_os_string());
        }
        self
    }

    /// Make listing `path` fail with `PermissionDenied`.
    pub fn unreadable(mut self, path: &str) -> Self {
        self.unreadable.insert(PathBuf::from(path));
        self
    }

    fn insert(mut self, path: &str, is_dir: bool, modified_secs: u64, permissions: &str) -> Self {
        let path = PathBuf::from(path);
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            if !parent.as_os_str().is_empty() {
                self.listings
                    .entry(parent.to_path_buf())
                    .or_default()
                    .push(name.to_os_string());
            }
        }
        if is_dir {
            self.listings.entry(path.clone()).or_default();
        }
        self.entries.insert(
            path,
            EntryMeta {
                is_dir,
                modified: SystemTime::UNIX_EPOCH + Duration::from_secs(modified_secs),
                permissions: permissions.to_string(),
            },
        );
        self
    }
}

impl DirectoryReader for MemoryReader {
    fn stat(&self, path: &Path) -> io::Result<EntryMeta> {
        self.entries.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory")
        })
    }

    fn list(&self, path: &Path) -> io::Result<Vec<OsString>> {
        if self.unreadable.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "Permission denied",
            ));
        }
        self.listings.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory")
        })
    }
}

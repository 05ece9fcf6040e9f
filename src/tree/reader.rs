//! Filesystem access used by the tree walker
//!
//! The walker only needs two capabilities: stat a path and list a
//! directory's immediate entries. `DirectoryReader` is that seam;
//! `FsReader` backs it with `std::fs`.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// What the walker needs to know about one filesystem entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMeta {
    pub is_dir: bool,
    pub modified: SystemTime,
    /// Rendered permission mask, e.g. `-rwxr-xr-x`.
    pub permissions: String,
}

pub trait DirectoryReader {
    /// Stat a path, following symlinks.
    fn stat(&self, path: &Path) -> io::Result<EntryMeta>;

    /// List the names of a directory's immediate entries, in listing order.
    fn list(&self, path: &Path) -> io::Result<Vec<OsString>>;
}

/// Reader over the real filesystem. Entries are listed sorted by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl DirectoryReader for FsReader {
    fn stat(&self, path: &Path) -> io::Result<EntryMeta> {
        let meta = fs::metadata(path)?;
        Ok(EntryMeta {
            is_dir: meta.is_dir(),
            modified: meta.modified()?,
            permissions: permission_string(&meta),
        })
    }

    fn list(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut names = fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }
}

#[cfg(unix)]
fn permission_string(meta: &fs::Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;
    format_mode(meta.permissions().mode())
}

#[cfg(not(unix))]
fn permission_string(meta: &fs::Metadata) -> String {
    if meta.permissions().readonly() {
        format_mode(0o444)
    } else {
        format_mode(0o666)
    }
}

/// Render the nine permission bits of `mode` as `-rwxrwxrwx`.
///
/// Only permission bits are shown, so the leading type column is always `-`.
pub fn format_mode(mode: u32) -> String {
    const RWX: [char; 3] = ['r', 'w', 'x'];

    let mut out = String::with_capacity(10);
    out.push('-');
    for bit in (0..9).rev() {
        if mode & (1 << bit) != 0 {
            out.push(RWX[(8 - bit) % 3]);
        } else {
            out.push('-');
        }
    }
    out
}

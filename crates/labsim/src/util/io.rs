//! I/O utility functions

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write content to a file atomically using write-then-rename.
///
/// The content lands in a sibling `<name>.tmp` first and is renamed over the
/// target, so an interrupted write never leaves a truncated file at the
/// target path. The rename is atomic on POSIX filesystems.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = temp_path_for(path);
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)
}

/// Sibling path with `.tmp` appended to the full file name, extension and
/// all, so `data.csv` stages as `data.csv.tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

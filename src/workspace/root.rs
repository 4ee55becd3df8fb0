//! Repository root discovery.

use std::path::{Path, PathBuf};

use crate::error::{Result, SherpaError};

/// Walk parent directories from `start` until a `.git` marker is found.
///
/// `start` may be a file; the walk begins at its containing directory.
/// Fails with [`SherpaError::RootNotFound`] when the filesystem root is
/// reached without finding a marker.
pub fn find_repo_root(start: &Path) -> Result<PathBuf> {
    let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());
    let mut dir = if start.is_file() {
        start.parent().unwrap_or(&start).to_path_buf()
    } else {
        start.clone()
    };

    loop {
        if dir.join(".git").exists() {
            return Ok(dir);
        }
        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => return Err(SherpaError::RootNotFound { start }),
        }
    }
}

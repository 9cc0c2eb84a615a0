//! Filesystem helpers: recursive directory creation and size formatting

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Error from [`ensure_dir`]: a component could not be created and does not
/// already exist as a directory.
#[derive(Debug)]
pub struct EnsureDirError {
    path: PathBuf,
    source: io::Error,
}

impl EnsureDirError {
    /// The prefix that failed to be created.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for EnsureDirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to create directory '{}': {}",
            self.path.display(),
            self.source
        )
    }
}

impl Error for EnsureDirError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Create every missing component of `path`, root-ward to leaf-ward.
///
/// A component that already exists as a directory counts as created; one that
/// exists as anything else, or any other creation failure, stops the walk
/// with an error naming the offending prefix. Calling this twice on the same
/// path succeeds both times.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<(), EnsureDirError> {
    let mut prefix = PathBuf::new();
    for component in path.as_ref().components() {
        prefix.push(component);
        match component {
            Component::Normal(_) => {}
            // Nothing to create for the root or for . / .. segments.
            _ => continue,
        }
        if let Err(err) = fs::create_dir(&prefix) {
            let exists_as_dir = err.kind() == io::ErrorKind::AlreadyExists && prefix.is_dir();
            if !exists_as_dir {
                return Err(EnsureDirError {
                    path: prefix,
                    source: err,
                });
            }
        }
    }
    Ok(())
}

/// Format a size in bytes to human-readable form.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

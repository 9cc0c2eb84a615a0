//! FileWalker - lazy depth-first iteration over regular files

use std::error::Error;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::Reporter;

use super::config::WalkerConfig;
use super::version_cmp::version_cmp;

/// Error returned when a walker cannot be opened.
#[derive(Debug)]
pub enum WalkError {
    /// The root path was empty.
    EmptyRoot,
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkError::EmptyRoot => write!(f, "root path is empty"),
        }
    }
}

impl Error for WalkError {}

/// The directory currently being enumerated: its path, the filtered and
/// sorted entry names, and a cursor into them. Path and entries exist
/// together or not at all.
struct OpenDir {
    path: PathBuf,
    entries: Vec<OsString>,
    cursor: usize,
}

impl OpenDir {
    /// Join the entry at the cursor onto the directory path and advance.
    /// Returns None once the entries are exhausted.
    fn take_next(&mut self) -> Option<PathBuf> {
        let name = self.entries.get(self.cursor)?;
        self.cursor += 1;
        Some(self.path.join(name))
    }
}

/// Iterator over the regular files beneath a root directory.
///
/// Directories are scanned lazily, one at a time; subdirectories discovered
/// while scanning are pushed onto a pending stack and drained last-in
/// first-out, so traversal is depth-first with the most recently discovered
/// sibling descended first. Entries within one directory are yielded in
/// version-aware sorted order (see [`version_cmp`]).
///
/// An unreadable directory is reported through the [`Reporter`] and treated
/// as empty; an entry whose status cannot be queried (broken symlink, race
/// with deletion) is skipped silently. Traversal never aborts for either.
pub struct FileWalker {
    config: WalkerConfig,
    reporter: Reporter,
    pending: Vec<PathBuf>,
    current: Option<OpenDir>,
}

impl FileWalker {
    /// Open a walker rooted at `root`. Fails if the root path is empty.
    ///
    /// No filesystem access happens here; the root is scanned on the first
    /// call to `next()`. A root given with a trailing separator behaves
    /// identically to one given without.
    pub fn open(root: impl AsRef<Path>, config: WalkerConfig) -> Result<Self, WalkError> {
        let root = root.as_ref();
        if root.as_os_str().is_empty() {
            return Err(WalkError::EmptyRoot);
        }
        // components().as_path() drops a trailing separator, so joined
        // paths never contain a doubled one.
        let root = root.components().as_path().to_path_buf();
        Ok(Self {
            config,
            reporter: Reporter::default(),
            pending: vec![root],
            current: None,
        })
    }

    /// Use `reporter` for non-fatal diagnostics instead of the default.
    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Release every retained path and the current entry list.
    ///
    /// Iteration afterwards reports exhaustion. Dropping the walker releases
    /// everything anyway; this exists for deterministic early release and is
    /// safe to call more than once.
    pub fn close(&mut self) {
        self.pending.clear();
        self.current = None;
    }

    /// List `path`, filter out unwanted names, and sort version-aware.
    ///
    /// A listing failure is reported as a non-fatal diagnostic and yields an
    /// empty list, so the directory is skipped rather than ending traversal.
    fn scan(&self, path: &Path) -> Vec<OsString> {
        let read = match fs::read_dir(path) {
            Ok(read) => read,
            Err(err) => {
                self.reporter.warn(path, &err);
                return Vec::new();
            }
        };

        let mut names: Vec<OsString> = read
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name())
            .filter(|name| {
                !(self.config.skip_hidden && name.as_encoded_bytes().first() == Some(&b'.'))
            })
            .collect();
        names.sort_by(|a, b| version_cmp(a, b));
        names
    }
}

impl Iterator for FileWalker {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let next_path = match self.current.as_mut() {
                Some(dir) => dir.take_next(),
                None => {
                    // Open the next pending directory, if there is one.
                    let path = self.pending.pop()?;
                    let entries = Self::scan(self, &path);
                    self.current = Some(OpenDir {
                        path,
                        entries,
                        cursor: 0,
                    });
                    continue;
                }
            };

            let full = match next_path {
                Some(full) => full,
                None => {
                    // Finished scanning the current directory.
                    self.current = None;
                    continue;
                }
            };

            // stat follows symlinks, like the status query of a plain `ls`.
            // A failure here is a benign race or a dangling link; skip it.
            let metadata = match fs::metadata(&full) {
                Ok(metadata) => metadata,
                Err(_) => continue,
            };

            if metadata.is_dir() {
                if self.config.recursive {
                    self.pending.push(full);
                }
                continue;
            }

            return Some(full);
        }
    }
}

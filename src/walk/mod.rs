//! Directory tree walking logic
//!
//! This module provides the traversal engine behind vwalk: a lazy,
//! depth-first iterator over regular files that keeps an explicit stack of
//! pending directories instead of recursing, and sorts each directory's
//! entries with a version-aware comparator before yielding them.

mod config;
mod version_cmp;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use version_cmp::version_cmp;
pub use walker::{FileWalker, WalkError};

//! vwalk - recursive file listing with version-aware ordering

pub mod fs_utils;
pub mod output;
pub mod report;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod walk;

pub use fs_utils::{EnsureDirError, ensure_dir, format_size};
pub use output::{FileRecord, print_json};
pub use report::Reporter;
pub use walk::{FileWalker, WalkError, WalkerConfig, version_cmp};

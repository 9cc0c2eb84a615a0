//! Configuration for the file walker

/// Configuration for walking behavior, fixed when a walker is opened.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Descend into subdirectories instead of listing only the root.
    pub recursive: bool,
    /// Filter out entries whose name starts with `.`
    pub skip_hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            recursive: false,
            skip_hidden: true,
        }
    }
}

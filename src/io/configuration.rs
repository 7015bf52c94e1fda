//! Runtime configuration defaults

/// Default frame file extension, matched without a leading dot
pub const DEFAULT_SUFFIX: &str = "exr";

// Progress bar display settings
/// Minimum number of planned copies before a progress bar is shown
pub const MIN_PROGRESS_COPIES: usize = 10;

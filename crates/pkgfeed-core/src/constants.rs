//! Built-in package feed defaults.
//!
//! These are compile-time literals; every read returns the same bytes and
//! concurrent readers need no synchronization.

use std::path::PathBuf;

/// Package feed (repository) endpoint.
pub const REPOSITORY_URL: &str = "https://www.nuget.org/v1/FeedService.svc";

/// Output directory, kept byte-for-byte including the trailing backslash.
pub const OUTPUT_DIR: &str = r"output\";

/// Output directory name without any separator.
pub const OUTPUT_DIR_NAME: &str = "output";

/// Returns the package feed endpoint.
pub fn repository_url() -> &'static str {
    REPOSITORY_URL
}

/// Returns the output directory literal (`output\`).
pub fn output_dir() -> &'static str {
    OUTPUT_DIR
}

/// Output directory as a native relative path.
///
/// Use this when the value is handed to the filesystem; [`output_dir`] stays
/// the exact literal for consumers that compare strings.
pub fn output_dir_path() -> PathBuf {
    PathBuf::from(OUTPUT_DIR_NAME)
}

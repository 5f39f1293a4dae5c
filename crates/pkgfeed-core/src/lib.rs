pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

pub use constants::{output_dir, repository_url, OUTPUT_DIR, REPOSITORY_URL};

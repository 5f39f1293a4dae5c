//! Validation errors for the feed configuration.

use thiserror::Error;

/// A configured value that cannot be used as a feed endpoint or output directory.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid repository URL {value:?}: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("repository URL {value:?} has unsupported scheme {scheme:?} (expected http or https)")]
    UnsupportedScheme { value: String, scheme: String },

    #[error("output directory is empty")]
    EmptyOutputDir,

    /// Output directory must stay relative to the working directory.
    #[error("output directory {value:?} is not a relative path")]
    AbsoluteOutputDir { value: String },
}

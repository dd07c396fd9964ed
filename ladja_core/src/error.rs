//! Error types for configuration and section lookup.

use thiserror::Error;

/// A navigation target that names no known section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section identifier `{0}`")]
pub struct UnknownSection(pub String);

/// Failures while reading or validating `site.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML for [`crate::SiteConfig`].
    #[error("invalid site config: {0}")]
    Parse(#[from] toml::de::Error),

    /// An asset URL could not be parsed or has no host.
    #[error("asset `{field}` has an invalid URL `{url}`")]
    InvalidUrl {
        /// Config key holding the URL
        field: &'static str,
        /// Offending value
        url: String,
    },

    /// An asset is served from a host missing in `[images] domains`.
    #[error("asset `{field}` is served from `{host}`, which is not in the image domain allow-list")]
    DisallowedHost {
        /// Config key holding the URL
        field: &'static str,
        /// Host extracted from the URL
        host: String,
    },

    /// A numeric setting is out of range.
    #[error("`{field}` {reason}")]
    OutOfRange {
        /// Config key
        field: &'static str,
        /// Human readable constraint
        reason: &'static str,
    },
}

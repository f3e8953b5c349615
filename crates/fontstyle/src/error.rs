//! Error types for style resolution and type-scale configuration.

use std::path::PathBuf;

/// Error returned when a style cannot be resolved, applied, or configured.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// The role is not known to the resolver.
    ///
    /// This is a configuration bug in the caller and is never retried.
    #[error("unknown text style role '{role}'")]
    UnknownRole { role: String },

    /// The element has no settable attribute at this path.
    #[error("element has no font attribute at path '{path}'")]
    UnknownAttribute { path: String },

    /// A type scale failed validation.
    #[error("invalid type scale: {reason}")]
    InvalidTypeScale { reason: String },

    /// A type scale document could not be parsed.
    #[error("failed to parse type scale: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A type scale file could not be read.
    #[error("failed to read type scale from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StyleError {
    pub(crate) fn unknown_role(role: &str) -> Self {
        StyleError::UnknownRole {
            role: role.to_string(),
        }
    }

    pub(crate) fn invalid_scale(reason: impl Into<String>) -> Self {
        StyleError::InvalidTypeScale {
            reason: reason.into(),
        }
    }
}

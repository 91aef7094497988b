//! Unified error types for the gdrive workspace.
//!
//! The formatting primitives never fail; errors only arise at the edges,
//! when configuration or records are loaded and when rendered text is
//! written to its destination.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum GdriveError {
    /// An I/O operation on a file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Writing rendered output to the destination stream failed.
    #[error("failed writing output: {source}")]
    Output {
        /// Underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// A required resource was not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Type of the missing resource.
        kind: &'static str,
        /// Identifier of the missing resource.
        id: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, GdriveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_kind_and_id() {
        let err = GdriveError::NotFound {
            kind: "file",
            id: "0B1abc".into(),
        };
        assert_eq!(err.to_string(), "file not found: 0B1abc");
    }

    #[test]
    fn io_error_converts_into_output_variant() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: GdriveError = io.into();
        assert!(matches!(err, GdriveError::Output { .. }));
        assert!(err.to_string().starts_with("failed writing output"));
    }
}

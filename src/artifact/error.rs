//! Error types for artifact notation parsing and configuration.
//!
//! Each variant names the offending input and the constraint it violated.

use thiserror::Error;

/// Errors arising while turning a notation into an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtifactError {
    /// The notation could not be converted into an artifact.
    #[error("cannot convert {notation} to an Ivy artifact: {reason}")]
    InvalidNotation {
        /// Rendering of the rejected notation.
        notation: String,
        /// Description of what was wrong with it.
        reason: String,
    },

    /// A configure callback rejected the artifact it was given.
    #[error("failed to configure artifact {artifact}: {reason}")]
    Configuration {
        /// Rendering of the artifact being configured.
        artifact: String,
        /// Description of the failure.
        reason: String,
    },
}

/// Result type alias using [`ArtifactError`].
pub type Result<T> = std::result::Result<T, ArtifactError>;

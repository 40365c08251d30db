//! Error types for configuring and normalising publications.
//!
//! Lower-level failures (notation parsing, descriptor resolution) are wrapped
//! without altering their message so callers see the underlying cause.

use crate::artifact::ArtifactError;
use crate::files::FileCollectionError;
use thiserror::Error;

/// Errors raised by [`crate::IvyPublication`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublicationError {
    /// `from` was called on a publication that already has a component.
    #[error("Ivy publication '{publication}' cannot include multiple components")]
    DuplicateComponent {
        /// Name of the publication.
        publication: String,
    },

    /// An artifact notation was rejected or an artifact failed to configure.
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    /// The publication was normalised before a descriptor file was assigned.
    #[error("descriptor file not set for Ivy publication '{publication}'")]
    MissingDescriptorFile {
        /// Name of the publication.
        publication: String,
    },

    /// The descriptor reference did not resolve to exactly one file.
    #[error("descriptor file for Ivy publication '{publication}' could not be resolved: {source}")]
    DescriptorFile {
        /// Name of the publication.
        publication: String,
        /// The resolution failure.
        #[source]
        source: FileCollectionError,
    },
}

/// Result type alias using [`PublicationError`].
pub type Result<T> = std::result::Result<T, PublicationError>;

//! Artifacts, the notations that describe them, and the ordered set a
//! publication keeps them in.
//!
//! # Sub-modules
//!
//! - [`error`] - Notation and configuration failures (`ArtifactError`).
//! - [`ivy_artifact`] - A single published file and its Ivy metadata.
//! - [`notation`] - Accepted artifact notations and the parser seam.
//! - [`set`] - Insertion-ordered artifact collection with a live file view.

pub mod error;
pub mod ivy_artifact;
pub mod notation;
pub mod set;

pub use error::ArtifactError;
pub use ivy_artifact::IvyArtifact;
#[cfg(test)]
pub use notation::MockNotationParser;
pub use notation::{ArtifactNotation, IvyArtifactNotationParser, NotationParser};
pub use set::{ArtifactFiles, IvyArtifactSet};

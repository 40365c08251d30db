//! Ivy publication model.
//!
//! This crate collects what a module ships to an Ivy repository (its
//! coordinates, artifacts, an optional software component and the generated
//! descriptor file) and freezes it into a [`NormalizedPublication`] that a
//! descriptor writer can serialise.
//!
//! # Modules
//!
//! - [`artifact`] - Artifacts, notations and the ordered artifact set
//! - [`component`] - Software components and their runtime dependencies
//! - [`config`] - Conventional locations for generated publication files
//! - [`coordinates`] - The `group:name:version` identifier
//! - [`descriptor`] - Descriptor metadata handle
//! - [`error`] - Publication-level errors
//! - [`files`] - Lazily evaluated file collections
//! - [`publication`] - The publication aggregate and its normalised snapshot

pub mod artifact;
pub mod component;
pub mod config;
pub mod coordinates;
pub mod descriptor;
pub mod error;
pub mod files;
pub mod publication;

pub use artifact::{
    ArtifactError, ArtifactNotation, IvyArtifact, IvyArtifactNotationParser, IvyArtifactSet,
    NotationParser,
};
pub use component::{Dependency, PublishArtifact, SoftwareComponent};
pub use config::PublishingConfig;
pub use coordinates::{Coordinates, CoordinatesError};
pub use descriptor::IvyModuleDescriptor;
pub use error::{PublicationError, Result};
pub use publication::{IvyPublication, NormalizedPublication};

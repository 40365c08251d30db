//! Immutable publication snapshot handed to the descriptor writer.

use crate::artifact::IvyArtifact;
use crate::coordinates::Coordinates;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

/// A frozen view of a publication: coordinates, artifacts in insertion order,
/// and the resolved descriptor file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedPublication {
    coordinates: Coordinates,
    artifacts: Vec<IvyArtifact>,
    descriptor_file: Utf8PathBuf,
}

impl NormalizedPublication {
    /// Assemble a snapshot from already-resolved parts.
    #[must_use]
    pub fn new(
        coordinates: Coordinates,
        artifacts: Vec<IvyArtifact>,
        descriptor_file: Utf8PathBuf,
    ) -> Self {
        Self {
            coordinates,
            artifacts,
            descriptor_file,
        }
    }

    /// Return the module coordinates.
    #[must_use]
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    /// Return the artifacts in insertion order.
    #[must_use]
    pub fn artifacts(&self) -> &[IvyArtifact] {
        &self.artifacts
    }

    /// Return the resolved descriptor file.
    #[must_use]
    pub fn descriptor_file(&self) -> &Utf8Path {
        &self.descriptor_file
    }
}

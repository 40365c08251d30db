//! The Ivy publication aggregate.
//!
//! An [`IvyPublication`] is configured during the build's configuration
//! phase: artifacts are added by notation, at most one
//! [`SoftwareComponent`] is attached, and a reference to the descriptor file
//! is recorded. [`IvyPublication::as_normalised_publication`] then freezes
//! the current state into a [`NormalizedPublication`] for the descriptor
//! writer. Configuration may continue afterwards and a later snapshot will
//! reflect it.
//!
//! Attaching a component copies the artifacts it reports *at that moment*.
//! Artifacts the component starts producing later are not picked up, while
//! its runtime dependencies are always read live.

mod normalized;

pub use normalized::NormalizedPublication;

use crate::artifact::{
    ArtifactNotation, IvyArtifact, IvyArtifactNotationParser, IvyArtifactSet, NotationParser,
};
use crate::component::{Dependency, SoftwareComponent};
use crate::config::PublishingConfig;
use crate::coordinates::Coordinates;
use crate::descriptor::IvyModuleDescriptor;
use crate::error::{PublicationError, Result};
use crate::files::{ExistingFile, FileCollection, UnionFiles};
use log::debug;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// A named, configurable Ivy publication.
///
/// # Examples
///
/// ```
/// use ivy_publish::files::FixedFiles;
/// use ivy_publish::{Coordinates, IvyPublication};
///
/// let coordinates = Coordinates::new("org.example", "widget", "1.0").expect("valid coordinates");
/// let mut publication = IvyPublication::new("ivy", coordinates);
/// publication.artifact("build/libs/widget.jar").expect("file notation");
/// publication.set_descriptor_file(FixedFiles::new(["build/publications/ivy/ivy.xml"]));
///
/// let normalised = publication.as_normalised_publication().expect("descriptor resolves");
/// assert_eq!(normalised.artifacts().len(), 1);
/// assert_eq!(normalised.descriptor_file().as_str(), "build/publications/ivy/ivy.xml");
/// ```
pub struct IvyPublication {
    name: String,
    coordinates: Coordinates,
    descriptor: IvyModuleDescriptor,
    artifacts: IvyArtifactSet,
    component: Option<Arc<dyn SoftwareComponent>>,
    descriptor_file: Option<Box<dyn FileCollection>>,
}

impl fmt::Debug for IvyPublication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IvyPublication")
            .field("name", &self.name)
            .field("coordinates", &self.coordinates)
            .field("descriptor", &self.descriptor)
            .field("artifacts", &self.artifacts)
            .field("component_attached", &self.component.is_some())
            .field("descriptor_file", &self.descriptor_file)
            .finish()
    }
}

impl IvyPublication {
    /// Create a publication whose file artifacts are named after the module.
    #[must_use]
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        let parser = IvyArtifactNotationParser::new(coordinates.name());
        Self::with_parser(name, coordinates, Box::new(parser))
    }

    /// Create a publication that parses artifact notations with `parser`.
    #[must_use]
    pub fn with_parser(
        name: impl Into<String>,
        coordinates: Coordinates,
        parser: Box<dyn NotationParser>,
    ) -> Self {
        Self {
            name: name.into(),
            coordinates,
            descriptor: IvyModuleDescriptor::default(),
            artifacts: IvyArtifactSet::new(parser),
            component: None,
            descriptor_file: None,
        }
    }

    /// Return the publication name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the module coordinates.
    #[must_use]
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    /// Return the descriptor metadata handle.
    #[must_use]
    pub fn descriptor(&self) -> &IvyModuleDescriptor {
        &self.descriptor
    }

    /// Adjust the descriptor metadata in place.
    pub fn configure_descriptor<F>(&mut self, configure: F)
    where
        F: FnOnce(&mut IvyModuleDescriptor),
    {
        configure(&mut self.descriptor);
    }

    /// Attach `component` and import the artifacts it currently reports.
    ///
    /// Artifacts are imported in the component's order through the notation
    /// parser. There is no rollback: if one fails to parse, those imported
    /// before it stay and the component remains attached.
    ///
    /// # Errors
    ///
    /// Returns [`PublicationError::DuplicateComponent`] when a component is
    /// already attached, or [`PublicationError::Artifact`] when an imported
    /// artifact is rejected.
    pub fn from(&mut self, component: Arc<dyn SoftwareComponent>) -> Result<()> {
        if self.component.is_some() {
            return Err(PublicationError::DuplicateComponent {
                publication: self.name.clone(),
            });
        }
        let produced = component.artifacts();
        debug!(
            "attaching component to Ivy publication '{}' with {} artifact(s)",
            self.name,
            produced.len()
        );
        self.component = Some(component);

        for artifact in produced {
            self.artifacts.add_artifact(artifact)?;
        }
        Ok(())
    }

    /// Add an artifact described by `notation`.
    ///
    /// # Errors
    ///
    /// Returns [`PublicationError::Artifact`] when the notation is rejected.
    pub fn artifact(&mut self, notation: impl Into<ArtifactNotation>) -> Result<&mut IvyArtifact> {
        Ok(self.artifacts.add_artifact(notation)?)
    }

    /// Add an artifact described by `notation` and configure it.
    ///
    /// The artifact stays in the publication if `configure` fails.
    ///
    /// # Errors
    ///
    /// Returns [`PublicationError::Artifact`] when the notation is rejected or
    /// `configure` fails.
    pub fn artifact_with<F>(
        &mut self,
        notation: impl Into<ArtifactNotation>,
        configure: F,
    ) -> Result<&mut IvyArtifact>
    where
        F: FnOnce(&mut IvyArtifact) -> crate::artifact::error::Result<()>,
    {
        Ok(self.artifacts.add_artifact_with(notation, configure)?)
    }

    /// Return the artifacts added so far.
    #[must_use]
    pub fn artifacts(&self) -> &IvyArtifactSet {
        &self.artifacts
    }

    /// Whether a component has been attached.
    #[must_use]
    pub fn component_attached(&self) -> bool {
        self.component.is_some()
    }

    /// Record where the generated descriptor will be found.
    ///
    /// The reference is not resolved until the publication is normalised.
    pub fn set_descriptor_file(&mut self, descriptor_file: impl FileCollection + 'static) {
        if let Some(previous) = &self.descriptor_file {
            debug!(
                "replacing descriptor file {} of Ivy publication '{}'",
                previous.describe(),
                self.name
            );
        }
        self.descriptor_file = Some(Box::new(descriptor_file));
    }

    /// Point the descriptor reference at the conventional location from
    /// `config`, counted only once the file exists.
    pub fn use_conventional_descriptor_file(&mut self, config: &PublishingConfig) {
        let path = config.descriptor_path(&self.name);
        self.set_descriptor_file(ExistingFile::new(path));
    }

    /// Every file this publication would upload: artifact files followed by
    /// the descriptor, re-evaluated on each access.
    #[must_use]
    pub fn publishable_files(&self) -> UnionFiles<'_> {
        let union = UnionFiles::new().with(self.artifacts.files());
        match &self.descriptor_file {
            Some(descriptor_file) => union.with(&**descriptor_file),
            None => union,
        }
    }

    /// Runtime dependencies of the attached component, or none.
    #[must_use]
    pub fn runtime_dependencies(&self) -> BTreeSet<Dependency> {
        self.component
            .as_ref()
            .map(|component| component.runtime_dependencies())
            .unwrap_or_default()
    }

    /// Freeze the current state for the descriptor writer.
    ///
    /// # Errors
    ///
    /// Returns [`PublicationError::MissingDescriptorFile`] when no descriptor
    /// file was set, or [`PublicationError::DescriptorFile`] when it does not
    /// resolve to exactly one file.
    pub fn as_normalised_publication(&self) -> Result<NormalizedPublication> {
        let descriptor_file = self
            .descriptor_file
            .as_ref()
            .ok_or_else(|| PublicationError::MissingDescriptorFile {
                publication: self.name.clone(),
            })?
            .single_file()
            .map_err(|source| PublicationError::DescriptorFile {
                publication: self.name.clone(),
                source,
            })?;
        debug!(
            "normalising Ivy publication '{}' ({}) with {} artifact(s)",
            self.name,
            self.coordinates,
            self.artifacts.len()
        );
        Ok(NormalizedPublication::new(
            self.coordinates.clone(),
            self.artifacts.snapshot(),
            descriptor_file,
        ))
    }
}

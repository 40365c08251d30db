//! Software components that can be attached to a publication.
//!
//! A component bundles the artifacts a build produces together with the
//! dependencies those artifacts need at runtime. Publications consume it
//! through the [`SoftwareComponent`] trait so that any producer (a library
//! build, a web application bundle, a test double) can be attached.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// An artifact record as produced by a component.
///
/// Publications import these by value through the artifact notation parser,
/// so later edits to the record are not reflected in the publication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublishArtifact {
    name: String,
    extension: String,
    artifact_type: String,
    classifier: Option<String>,
    file: Utf8PathBuf,
}

impl PublishArtifact {
    /// Describe a produced artifact.
    ///
    /// # Examples
    ///
    /// ```
    /// use ivy_publish::PublishArtifact;
    ///
    /// let jar = PublishArtifact::new("widget", "jar", "jar", "build/libs/widget.jar");
    /// assert_eq!(jar.file().as_str(), "build/libs/widget.jar");
    /// assert!(jar.classifier().is_none());
    /// ```
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        extension: impl Into<String>,
        artifact_type: impl Into<String>,
        file: impl Into<Utf8PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
            artifact_type: artifact_type.into(),
            classifier: None,
            file: file.into(),
        }
    }

    /// Attach a classifier such as `sources` or `javadoc`.
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    /// Return the artifact name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the file extension.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Return the artifact type.
    #[must_use]
    pub fn artifact_type(&self) -> &str {
        &self.artifact_type
    }

    /// Return the classifier, if any.
    #[must_use]
    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// Return the produced file.
    #[must_use]
    pub fn file(&self) -> &Utf8Path {
        &self.file
    }
}

/// A dependency required by a component at runtime.
///
/// Ordering is lexicographic over group, name, version, then configuration,
/// which keeps descriptor output deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Dependency {
    group: String,
    name: String,
    version: String,
    configuration: String,
}

impl Dependency {
    /// Declare a dependency in the `default` configuration.
    #[must_use]
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
            configuration: "default".to_owned(),
        }
    }

    /// Target a different configuration of the dependency module.
    #[must_use]
    pub fn in_configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = configuration.into();
        self
    }

    /// Return the dependency's group.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Return the dependency's module name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the dependency's version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Return the configuration the dependency maps to.
    #[must_use]
    pub fn configuration(&self) -> &str {
        &self.configuration
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}({})",
            self.group, self.name, self.version, self.configuration
        )
    }
}

/// A bundle of produced artifacts and their runtime dependencies.
///
/// Both methods report the component's state at the time of the call.
#[cfg_attr(test, mockall::automock)]
pub trait SoftwareComponent {
    /// The artifacts the component currently produces, in a stable order.
    fn artifacts(&self) -> Vec<PublishArtifact>;

    /// The dependencies consumers need at runtime.
    fn runtime_dependencies(&self) -> BTreeSet<Dependency>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn dependencies_default_to_the_default_configuration() {
        let dependency = Dependency::new("org.example", "core", "1.2");

        assert_eq!(dependency.configuration(), "default");
        assert_eq!(dependency.to_string(), "org.example:core:1.2(default)");
    }

    #[rstest]
    fn dependencies_order_deterministically() {
        let set: BTreeSet<_> = [
            Dependency::new("org.b", "x", "1"),
            Dependency::new("org.a", "y", "1").in_configuration("runtime"),
            Dependency::new("org.a", "y", "1"),
        ]
        .into_iter()
        .collect();

        let rendered: Vec<_> = set.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            ["org.a:y:1(default)", "org.a:y:1(runtime)", "org.b:x:1(default)"]
        );
    }

    #[rstest]
    fn publish_artifact_keeps_classifier() {
        let sources = PublishArtifact::new("widget", "jar", "source", "widget-sources.jar")
            .with_classifier("sources");

        assert_eq!(sources.classifier(), Some("sources"));
        assert_eq!(sources.artifact_type(), "source");
        assert_eq!(sources.extension(), "jar");
        assert_eq!(sources.name(), "widget");
    }
}

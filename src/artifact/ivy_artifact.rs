//! A single artifact inside an Ivy publication.

use super::error::{ArtifactError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use std::fmt;

/// One file, plus the metadata Ivy records for it.
///
/// The `name`, `type` and `ext` attributes map directly onto the descriptor's
/// `<artifact>` element; `classifier` becomes an extra attribute and `conf`
/// lists the configurations the artifact belongs to.
///
/// # Examples
///
/// ```
/// use ivy_publish::IvyArtifact;
///
/// let mut artifact = IvyArtifact::new("widget", "jar", "jar", "build/libs/widget.jar");
/// artifact.set_classifier(Some("sources"));
/// assert_eq!(artifact.to_string(), "widget-sources.jar");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IvyArtifact {
    name: String,
    extension: String,
    #[serde(rename = "type")]
    artifact_type: String,
    classifier: Option<String>,
    conf: Option<String>,
    file: Utf8PathBuf,
}

impl IvyArtifact {
    /// Create an artifact with no classifier or configuration.
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
            conf: None,
            file: file.into(),
        }
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

    /// Return the Ivy artifact type.
    #[must_use]
    pub fn artifact_type(&self) -> &str {
        &self.artifact_type
    }

    /// Return the classifier, if any.
    #[must_use]
    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// Return the configurations the artifact is published in, if restricted.
    #[must_use]
    pub fn conf(&self) -> Option<&str> {
        self.conf.as_deref()
    }

    /// Return the file backing the artifact.
    #[must_use]
    pub fn file(&self) -> &Utf8Path {
        &self.file
    }

    /// Rename the artifact.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::Configuration`] when `name` is blank.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ArtifactError::Configuration {
                artifact: self.to_string(),
                reason: "artifact name must not be empty".to_owned(),
            });
        }
        self.name = name;
        Ok(())
    }

    /// Replace the extension.
    pub fn set_extension(&mut self, extension: impl Into<String>) {
        self.extension = extension.into();
    }

    /// Replace the Ivy type.
    pub fn set_type(&mut self, artifact_type: impl Into<String>) {
        self.artifact_type = artifact_type.into();
    }

    /// Set or clear the classifier.
    pub fn set_classifier(&mut self, classifier: Option<impl Into<String>>) {
        self.classifier = classifier.map(Into::into);
    }

    /// Set or clear the configuration list.
    pub fn set_conf(&mut self, conf: Option<impl Into<String>>) {
        self.conf = conf.map(Into::into);
    }
}

impl fmt::Display for IvyArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(classifier) = &self.classifier {
            write!(f, "-{classifier}")?;
        }
        if !self.extension.is_empty() {
            write!(f, ".{}", self.extension)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn jar() -> IvyArtifact {
        IvyArtifact::new("widget", "jar", "jar", "build/libs/widget.jar")
    }

    #[rstest]
    fn displays_name_classifier_and_extension(mut jar: IvyArtifact) {
        assert_eq!(jar.to_string(), "widget.jar");

        jar.set_classifier(Some("javadoc"));

        assert_eq!(jar.to_string(), "widget-javadoc.jar");
    }

    #[rstest]
    fn omits_empty_extension() {
        let artifact = IvyArtifact::new("LICENSE", "", "", "LICENSE");

        assert_eq!(artifact.to_string(), "LICENSE");
    }

    #[rstest]
    fn setters_update_metadata(mut jar: IvyArtifact) {
        jar.set_extension("zip");
        jar.set_type("distribution");
        jar.set_conf(Some("runtime"));
        jar.set_name("widget-dist").expect("non-empty name");

        assert_eq!(jar.extension(), "zip");
        assert_eq!(jar.artifact_type(), "distribution");
        assert_eq!(jar.conf(), Some("runtime"));
        assert_eq!(jar.name(), "widget-dist");
        assert_eq!(jar.file().as_str(), "build/libs/widget.jar");
    }

    #[rstest]
    fn rejects_blank_names(mut jar: IvyArtifact) {
        let err = jar.set_name("  ").expect_err("blank name");

        assert!(matches!(err, ArtifactError::Configuration { .. }));
        assert_eq!(jar.name(), "widget");
    }

    #[rstest]
    fn clearing_the_classifier(mut jar: IvyArtifact) {
        jar.set_classifier(Some("sources"));
        jar.set_classifier(None::<String>);

        assert!(jar.classifier().is_none());
    }
}

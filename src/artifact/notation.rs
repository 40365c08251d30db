//! Artifact notations and the parser that turns them into [`IvyArtifact`]s.
//!
//! Callers may describe an artifact in several ways: as a bare file, as the
//! output of a producing task, as a record handed over by a component, or as
//! an attribute map naming the source file plus metadata overrides. The
//! [`NotationParser`] trait normalises all of these into an [`IvyArtifact`].

use super::error::{ArtifactError, Result};
use super::ivy_artifact::IvyArtifact;
use crate::component::PublishArtifact;
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeMap;
use std::fmt;

/// Attribute keys accepted by [`ArtifactNotation::Attributes`].
const SOURCE_KEY: &str = "source";
const OVERRIDE_KEYS: [&str; 5] = ["name", "extension", "type", "classifier", "conf"];

/// A value describing an artifact to add to a publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactNotation {
    /// A file on disk; metadata is derived from the file name.
    File(Utf8PathBuf),
    /// The output of a producing task, which must be exactly one file.
    TaskOutput {
        /// Name of the producing task.
        task: String,
        /// Files the task declares as outputs.
        outputs: Vec<Utf8PathBuf>,
    },
    /// An artifact record supplied by a component.
    Published(PublishArtifact),
    /// A `source` file plus optional `name`, `extension`, `type`,
    /// `classifier` and `conf` overrides.
    Attributes(BTreeMap<String, String>),
}

impl ArtifactNotation {
    /// Describe the outputs of a producing task.
    #[must_use]
    pub fn task_output<I, P>(task: impl Into<String>, outputs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        Self::TaskOutput {
            task: task.into(),
            outputs: outputs.into_iter().map(Into::into).collect(),
        }
    }

    /// Build an attribute-map notation from key/value pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use ivy_publish::ArtifactNotation;
    ///
    /// let notation = ArtifactNotation::attributes([
    ///     ("source", "build/docs.zip"),
    ///     ("classifier", "docs"),
    /// ]);
    /// assert!(matches!(notation, ArtifactNotation::Attributes(_)));
    /// ```
    #[must_use]
    pub fn attributes<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Attributes(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl fmt::Display for ArtifactNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file '{path}'"),
            Self::TaskOutput { task, .. } => write!(f, "outputs of task '{task}'"),
            Self::Published(artifact) => write!(f, "published artifact '{}'", artifact.file()),
            Self::Attributes(map) => {
                let rendered: Vec<_> = map.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                write!(f, "attributes [{}]", rendered.join(", "))
            }
        }
    }
}

impl From<Utf8PathBuf> for ArtifactNotation {
    fn from(path: Utf8PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<&Utf8Path> for ArtifactNotation {
    fn from(path: &Utf8Path) -> Self {
        Self::File(path.to_path_buf())
    }
}

impl From<&str> for ArtifactNotation {
    fn from(path: &str) -> Self {
        Self::File(Utf8PathBuf::from(path))
    }
}

impl From<String> for ArtifactNotation {
    fn from(path: String) -> Self {
        Self::File(Utf8PathBuf::from(path))
    }
}

impl From<PublishArtifact> for ArtifactNotation {
    fn from(artifact: PublishArtifact) -> Self {
        Self::Published(artifact)
    }
}

/// Converts notations into artifacts.
#[cfg_attr(test, mockall::automock)]
pub trait NotationParser {
    /// Parse `notation` into an artifact.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::InvalidNotation`] when the notation is not
    /// recognised or is incomplete.
    fn parse(&self, notation: ArtifactNotation) -> Result<IvyArtifact>;
}

/// The standard parser for Ivy publications.
///
/// Files take the module name as artifact name and their last extension as
/// both `ext` and `type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IvyArtifactNotationParser {
    module_name: String,
}

impl IvyArtifactNotationParser {
    /// Create a parser naming file artifacts after `module_name`.
    #[must_use]
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
        }
    }

    fn file_artifact(
        &self,
        file: Utf8PathBuf,
        notation: &ArtifactNotation,
    ) -> Result<IvyArtifact> {
        if file.file_name().is_none() {
            return Err(invalid(notation, "path does not name a file"));
        }
        let extension = file.extension().unwrap_or_default().to_owned();
        Ok(IvyArtifact::new(
            self.module_name.clone(),
            extension.clone(),
            extension,
            file,
        ))
    }

    fn attribute_artifact(
        &self,
        mut map: BTreeMap<String, String>,
        notation: &ArtifactNotation,
    ) -> Result<IvyArtifact> {
        if let Some(unknown) = map
            .keys()
            .find(|key| *key != SOURCE_KEY && !OVERRIDE_KEYS.contains(&key.as_str()))
        {
            return Err(invalid(
                notation,
                &format!("unsupported attribute '{unknown}'"),
            ));
        }
        let source = map
            .remove(SOURCE_KEY)
            .ok_or_else(|| invalid(notation, "the 'source' attribute is required"))?;
        let mut artifact = self.file_artifact(Utf8PathBuf::from(source), notation)?;
        if let Some(name) = map.remove("name") {
            artifact
                .set_name(name)
                .map_err(|error| invalid(notation, &error.to_string()))?;
        }
        if let Some(extension) = map.remove("extension") {
            artifact.set_extension(extension);
        }
        if let Some(artifact_type) = map.remove("type") {
            artifact.set_type(artifact_type);
        }
        artifact.set_classifier(map.remove("classifier"));
        artifact.set_conf(map.remove("conf"));
        Ok(artifact)
    }
}

impl NotationParser for IvyArtifactNotationParser {
    fn parse(&self, notation: ArtifactNotation) -> Result<IvyArtifact> {
        match &notation {
            ArtifactNotation::File(path) => self.file_artifact(path.clone(), &notation),
            ArtifactNotation::TaskOutput { task, outputs } => match outputs.as_slice() {
                [single] => self.file_artifact(single.clone(), &notation),
                other => Err(invalid(
                    &notation,
                    &format!(
                        "task '{task}' must produce exactly one file, but produced {}",
                        other.len()
                    ),
                )),
            },
            ArtifactNotation::Published(published) => {
                let mut artifact = IvyArtifact::new(
                    published.name(),
                    published.extension(),
                    published.artifact_type(),
                    published.file(),
                );
                artifact.set_classifier(published.classifier());
                Ok(artifact)
            }
            ArtifactNotation::Attributes(map) => self.attribute_artifact(map.clone(), &notation),
        }
    }
}

fn invalid(notation: &ArtifactNotation, reason: &str) -> ArtifactError {
    ArtifactError::InvalidNotation {
        notation: notation.to_string(),
        reason: reason.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn parser() -> IvyArtifactNotationParser {
        IvyArtifactNotationParser::new("widget")
    }

    #[rstest]
    fn files_take_the_module_name_and_extension(parser: IvyArtifactNotationParser) {
        let artifact = parser
            .parse(ArtifactNotation::from("build/libs/widget-1.0.jar"))
            .expect("file notation");

        assert_eq!(artifact.name(), "widget");
        assert_eq!(artifact.extension(), "jar");
        assert_eq!(artifact.artifact_type(), "jar");
        assert!(artifact.classifier().is_none());
        assert_eq!(artifact.file().as_str(), "build/libs/widget-1.0.jar");
    }

    #[rstest]
    fn only_the_last_extension_is_used(parser: IvyArtifactNotationParser) {
        let artifact = parser
            .parse(ArtifactNotation::from("dist/widget.tar.gz"))
            .expect("file notation");

        assert_eq!(artifact.extension(), "gz");
    }

    #[rstest]
    fn files_without_extension_have_empty_type(parser: IvyArtifactNotationParser) {
        let artifact = parser
            .parse(ArtifactNotation::from("LICENSE"))
            .expect("file notation");

        assert_eq!(artifact.extension(), "");
        assert_eq!(artifact.artifact_type(), "");
    }

    #[rstest]
    #[case::empty("")]
    #[case::parent_only("..")]
    fn paths_without_file_names_are_invalid(parser: IvyArtifactNotationParser, #[case] path: &str) {
        let err = parser
            .parse(ArtifactNotation::from(path))
            .expect_err("no file name");

        assert!(matches!(err, ArtifactError::InvalidNotation { .. }));
    }

    #[rstest]
    fn task_outputs_need_exactly_one_file(parser: IvyArtifactNotationParser) {
        let single = parser
            .parse(ArtifactNotation::task_output("jar", ["build/libs/widget.jar"]))
            .expect("single output");
        let err = parser
            .parse(ArtifactNotation::task_output("dist", ["a.zip", "b.zip"]))
            .expect_err("two outputs");

        assert_eq!(single.extension(), "jar");
        assert_eq!(
            err.to_string(),
            "cannot convert outputs of task 'dist' to an Ivy artifact: \
             task 'dist' must produce exactly one file, but produced 2"
        );
    }

    #[rstest]
    fn published_artifacts_keep_their_metadata(parser: IvyArtifactNotationParser) {
        let published = PublishArtifact::new("widget-api", "jar", "api", "build/api.jar")
            .with_classifier("api");

        let artifact = parser
            .parse(ArtifactNotation::from(published))
            .expect("published notation");

        assert_eq!(artifact.name(), "widget-api");
        assert_eq!(artifact.artifact_type(), "api");
        assert_eq!(artifact.classifier(), Some("api"));
    }

    #[rstest]
    fn attribute_maps_override_file_defaults(parser: IvyArtifactNotationParser) {
        let artifact = parser
            .parse(ArtifactNotation::attributes([
                ("source", "build/docs.zip"),
                ("type", "docs"),
                ("classifier", "docs"),
                ("conf", "documentation"),
            ]))
            .expect("attribute notation");

        assert_eq!(artifact.name(), "widget");
        assert_eq!(artifact.extension(), "zip");
        assert_eq!(artifact.artifact_type(), "docs");
        assert_eq!(artifact.classifier(), Some("docs"));
        assert_eq!(artifact.conf(), Some("documentation"));
    }

    #[rstest]
    #[case::missing_source(vec![("classifier", "docs")], "the 'source' attribute is required")]
    #[case::unknown_key(vec![("source", "a.zip"), ("colour", "blue")], "unsupported attribute 'colour'")]
    #[case::blank_name(vec![("source", "a.zip"), ("name", " ")], "artifact name must not be empty")]
    fn rejects_malformed_attribute_maps(
        parser: IvyArtifactNotationParser,
        #[case] pairs: Vec<(&str, &str)>,
        #[case] expected: &str,
    ) {
        let err = parser
            .parse(ArtifactNotation::attributes(pairs))
            .expect_err("malformed map");

        let ArtifactError::InvalidNotation { reason, .. } = err else {
            panic!("expected InvalidNotation, got {err:?}");
        };
        assert!(reason.contains(expected), "unexpected reason: {reason}");
    }
}

//! The ordered artifact collection owned by a publication.

use super::error::Result;
use super::ivy_artifact::IvyArtifact;
use super::notation::{ArtifactNotation, NotationParser};
use crate::files::{FileCollection, FileCollectionError};
use camino::Utf8PathBuf;
use log::trace;
use std::collections::HashSet;
use std::{fmt, slice};

/// Artifacts in insertion order, created through a pluggable parser.
///
/// # Examples
///
/// ```
/// use ivy_publish::files::FileCollection;
/// use ivy_publish::{IvyArtifactNotationParser, IvyArtifactSet};
///
/// let mut set = IvyArtifactSet::new(Box::new(IvyArtifactNotationParser::new("widget")));
/// set.add_artifact("build/libs/widget.jar").expect("file notation");
/// assert_eq!(set.files().files().expect("resolves").len(), 1);
/// ```
pub struct IvyArtifactSet {
    parser: Box<dyn NotationParser>,
    artifacts: Vec<IvyArtifact>,
}

impl IvyArtifactSet {
    /// Create an empty set that parses notations with `parser`.
    #[must_use]
    pub fn new(parser: Box<dyn NotationParser>) -> Self {
        Self {
            parser,
            artifacts: Vec::new(),
        }
    }

    /// Parse `notation` and append the resulting artifact.
    ///
    /// # Errors
    ///
    /// Returns [`super::ArtifactError::InvalidNotation`] from the parser
    /// unchanged; the set is left untouched in that case.
    pub fn add_artifact(
        &mut self,
        notation: impl Into<ArtifactNotation>,
    ) -> Result<&mut IvyArtifact> {
        let artifact = self.parser.parse(notation.into())?;
        trace!("adding artifact {artifact} from {}", artifact.file());
        let index = self.artifacts.len();
        self.artifacts.push(artifact);
        #[expect(clippy::indexing_slicing, reason = "the artifact was pushed at `index` above")]
        let added = &mut self.artifacts[index];
        Ok(added)
    }

    /// Parse `notation`, append the artifact, then run `configure` on it.
    ///
    /// The artifact stays in the set even when `configure` fails.
    ///
    /// # Errors
    ///
    /// Returns the parser's error, or whatever `configure` returns.
    pub fn add_artifact_with<F>(
        &mut self,
        notation: impl Into<ArtifactNotation>,
        configure: F,
    ) -> Result<&mut IvyArtifact>
    where
        F: FnOnce(&mut IvyArtifact) -> Result<()>,
    {
        let artifact = self.add_artifact(notation)?;
        configure(&mut *artifact)?;
        Ok(artifact)
    }

    /// A live view of the files behind the current artifacts.
    #[must_use]
    pub fn files(&self) -> ArtifactFiles<'_> {
        ArtifactFiles { set: self }
    }

    /// Iterate over the artifacts in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, IvyArtifact> {
        self.artifacts.iter()
    }

    /// Number of artifacts held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Whether the set holds no artifacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Copy the current artifacts out of the set.
    #[must_use]
    pub fn snapshot(&self) -> Vec<IvyArtifact> {
        self.artifacts.clone()
    }
}

impl fmt::Debug for IvyArtifactSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IvyArtifactSet")
            .field("artifacts", &self.artifacts)
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a IvyArtifactSet {
    type Item = &'a IvyArtifact;
    type IntoIter = slice::Iter<'a, IvyArtifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The files of an [`IvyArtifactSet`], read from the set on each access.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactFiles<'a> {
    set: &'a IvyArtifactSet,
}

impl FileCollection for ArtifactFiles<'_> {
    fn files(&self) -> std::result::Result<Vec<Utf8PathBuf>, FileCollectionError> {
        let mut seen = HashSet::with_capacity(self.set.len());
        let mut files = Vec::with_capacity(self.set.len());
        for artifact in self.set {
            if seen.insert(artifact.file()) {
                files.push(artifact.file().to_path_buf());
            }
        }
        Ok(files)
    }

    fn describe(&self) -> String {
        format!("files of {} artifact(s)", self.set.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{ArtifactError, IvyArtifactNotationParser, MockNotationParser};
    use rstest::{fixture, rstest};

    #[fixture]
    fn set() -> IvyArtifactSet {
        IvyArtifactSet::new(Box::new(IvyArtifactNotationParser::new("widget")))
    }

    #[rstest]
    fn keeps_insertion_order(mut set: IvyArtifactSet) {
        set.add_artifact("b.jar").expect("add b");
        set.add_artifact("a.zip").expect("add a");

        let files: Vec<_> = set.iter().map(|a| a.file().as_str().to_owned()).collect();
        assert_eq!(files, ["b.jar", "a.zip"]);
    }

    #[rstest]
    fn returns_the_created_artifact_for_further_edits(mut set: IvyArtifactSet) {
        let artifact = set.add_artifact("widget.jar").expect("add");
        artifact.set_classifier(Some("tests"));

        assert_eq!(set.iter().next().and_then(IvyArtifact::classifier), Some("tests"));
    }

    #[rstest]
    fn configure_runs_on_the_new_artifact(mut set: IvyArtifactSet) {
        let artifact = set
            .add_artifact_with("widget.jar", |artifact| {
                artifact.set_type("bundle");
                Ok(())
            })
            .expect("configured");

        assert_eq!(artifact.artifact_type(), "bundle");
    }

    #[rstest]
    fn failed_configure_keeps_the_artifact(mut set: IvyArtifactSet) {
        let err = set
            .add_artifact_with("widget.jar", |artifact| {
                Err(ArtifactError::Configuration {
                    artifact: artifact.to_string(),
                    reason: "rejected".to_owned(),
                })
            })
            .expect_err("configure fails");

        assert!(matches!(err, ArtifactError::Configuration { .. }));
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn parser_errors_leave_the_set_unchanged() {
        let mut parser = MockNotationParser::new();
        parser.expect_parse().times(1).returning(|notation| {
            Err(ArtifactError::InvalidNotation {
                notation: notation.to_string(),
                reason: "unsupported".to_owned(),
            })
        });
        let mut set = IvyArtifactSet::new(Box::new(parser));

        let err = set.add_artifact("thing").expect_err("parser rejects");

        assert_eq!(
            err,
            ArtifactError::InvalidNotation {
                notation: "file 'thing'".to_owned(),
                reason: "unsupported".to_owned(),
            }
        );
        assert!(set.is_empty());
    }

    #[rstest]
    fn file_view_tracks_later_additions(mut set: IvyArtifactSet) {
        set.add_artifact("a.jar").expect("add a");
        assert_eq!(set.files().files().expect("resolves").len(), 1);

        set.add_artifact("b.jar").expect("add b");

        assert_eq!(
            set.files().files().expect("resolves"),
            [Utf8PathBuf::from("a.jar"), Utf8PathBuf::from("b.jar")]
        );
    }

    #[rstest]
    fn file_view_deduplicates_shared_files(mut set: IvyArtifactSet) {
        set.add_artifact("a.jar").expect("add");
        set.add_artifact_with("a.jar", |artifact| {
            artifact.set_classifier(Some("copy"));
            Ok(())
        })
        .expect("add copy");

        assert_eq!(set.len(), 2);
        assert_eq!(set.files().files().expect("resolves").len(), 1);
    }

    #[rstest]
    fn file_view_keeps_first_seen_order(mut set: IvyArtifactSet) {
        for file in ["b.jar", "a.jar", "b.jar", "c.jar", "a.jar"] {
            set.add_artifact(file).expect("add");
        }

        assert_eq!(set.len(), 5);
        assert_eq!(
            set.files().files().expect("resolves"),
            [
                Utf8PathBuf::from("b.jar"),
                Utf8PathBuf::from("a.jar"),
                Utf8PathBuf::from("c.jar"),
            ]
        );
    }
}

//! Glob-backed file collections.

use super::{FileCollection, FileCollectionError};
use camino::Utf8PathBuf;
use std::path::PathBuf;

/// Files matching a glob pattern, re-evaluated on every access.
///
/// Matches are returned in the order produced by [`glob::glob`], which is
/// alphabetical within each directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobFiles {
    pattern: String,
}

impl GlobFiles {
    /// Match files against `pattern`.
    ///
    /// The pattern is only compiled when the collection is resolved, so an
    /// invalid pattern surfaces as [`FileCollectionError::InvalidPattern`] at
    /// that point.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Return the raw pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl FileCollection for GlobFiles {
    fn files(&self) -> Result<Vec<Utf8PathBuf>, FileCollectionError> {
        let entries =
            glob::glob(&self.pattern).map_err(|error| FileCollectionError::InvalidPattern {
                pattern: self.pattern.clone(),
                reason: error.msg.to_owned(),
            })?;

        entries
            .map(|entry| {
                let path = entry.map_err(|error| FileCollectionError::Unreadable {
                    path: error.path().to_path_buf(),
                    reason: error.error().to_string(),
                })?;
                utf8_match(path)
            })
            .filter(|resolved| match resolved {
                Ok(path) => path.is_file(),
                Err(_) => true,
            })
            .collect()
    }

    fn describe(&self) -> String {
        format!("files matching '{}'", self.pattern)
    }
}

fn utf8_match(path: PathBuf) -> Result<Utf8PathBuf, FileCollectionError> {
    Utf8PathBuf::from_path_buf(path).map_err(FileCollectionError::NonUtf8Path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new().expect("temp dir creation succeeds")
    }

    fn pattern_in(dir: &TempDir, suffix: &str) -> String {
        format!("{}/{suffix}", dir.path().display())
    }

    #[rstest]
    fn matches_files_written_after_construction(temp_dir: TempDir) {
        let files = GlobFiles::new(pattern_in(&temp_dir, "*.xml"));
        assert!(files.files().expect("resolves").is_empty());

        std::fs::write(temp_dir.path().join("ivy.xml"), "<ivy-module/>").expect("write");

        let resolved = files.single_file().expect("exactly one descriptor");
        assert!(resolved.as_str().ends_with("ivy.xml"));
    }

    #[rstest]
    fn multiple_matches_are_ambiguous(temp_dir: TempDir) {
        std::fs::write(temp_dir.path().join("a.xml"), "").expect("write a");
        std::fs::write(temp_dir.path().join("b.xml"), "").expect("write b");
        let files = GlobFiles::new(pattern_in(&temp_dir, "*.xml"));

        let err = files.single_file().expect_err("two matches");

        assert!(matches!(
            err,
            FileCollectionError::NotSingleFile { count: 2, .. }
        ));
    }

    #[rstest]
    fn directories_are_not_files(temp_dir: TempDir) {
        std::fs::create_dir(temp_dir.path().join("nested.xml")).expect("mkdir");
        let files = GlobFiles::new(pattern_in(&temp_dir, "*.xml"));

        assert!(files.files().expect("resolves").is_empty());
    }

    #[rstest]
    fn invalid_patterns_fail_on_resolution() {
        let files = GlobFiles::new("build/[unclosed");

        let err = files.files().expect_err("invalid pattern");

        assert!(matches!(err, FileCollectionError::InvalidPattern { .. }));
    }

    #[cfg(unix)]
    #[rstest]
    fn non_utf8_matches_are_reported(temp_dir: TempDir) {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = temp_dir.path().join(OsStr::from_bytes(b"ivy-\xff.xml"));

        let err = utf8_match(path.clone()).expect_err("invalid UTF-8 name");

        assert_eq!(err, FileCollectionError::NonUtf8Path(path));
        assert!(err.to_string().starts_with("path is not valid UTF-8: "));
    }
}

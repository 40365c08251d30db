//! Basic file collection sources.

use super::{FileCollection, FileCollectionError};
use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;

/// A literal list of files, resolved as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedFiles {
    paths: Vec<Utf8PathBuf>,
}

impl FixedFiles {
    /// Wrap a list of paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use ivy_publish::files::{FileCollection, FixedFiles};
    ///
    /// let files = FixedFiles::new(["build/ivy.xml"]);
    /// assert_eq!(files.single_file().expect("one file").as_str(), "build/ivy.xml");
    /// ```
    #[must_use]
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl FileCollection for FixedFiles {
    fn files(&self) -> Result<Vec<Utf8PathBuf>, FileCollectionError> {
        Ok(self.paths.clone())
    }

    fn describe(&self) -> String {
        let joined = self
            .paths
            .iter()
            .map(|path| path.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("file collection [{joined}]")
    }
}

/// A single path that only counts once it exists on disk.
///
/// Useful for generated files such as the Ivy descriptor: the reference can be
/// recorded while configuring and resolves to nothing until the generating
/// task has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingFile {
    path: Utf8PathBuf,
}

impl ExistingFile {
    /// Refer to `path`, which need not exist yet.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Return the referenced path regardless of whether it exists.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl FileCollection for ExistingFile {
    fn files(&self) -> Result<Vec<Utf8PathBuf>, FileCollectionError> {
        if self.path.is_file() {
            Ok(vec![self.path.clone()])
        } else {
            Ok(Vec::new())
        }
    }

    fn describe(&self) -> String {
        format!("file '{}'", self.path)
    }
}

/// A collection computed by a closure on every access.
pub struct DeferredFiles<F> {
    description: String,
    resolve: F,
}

impl<F> DeferredFiles<F>
where
    F: Fn() -> Vec<Utf8PathBuf>,
{
    /// Build a collection from a description and a resolver closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8PathBuf;
    /// use ivy_publish::files::{DeferredFiles, FileCollection};
    ///
    /// let files = DeferredFiles::new("generated descriptor", || {
    ///     vec![Utf8PathBuf::from("build/ivy.xml")]
    /// });
    /// assert_eq!(files.files().expect("resolves").len(), 1);
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>, resolve: F) -> Self {
        Self {
            description: description.into(),
            resolve,
        }
    }
}

impl<F> fmt::Debug for DeferredFiles<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredFiles")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl<F> FileCollection for DeferredFiles<F>
where
    F: Fn() -> Vec<Utf8PathBuf>,
{
    fn files(&self) -> Result<Vec<Utf8PathBuf>, FileCollectionError> {
        Ok((self.resolve)())
    }

    fn describe(&self) -> String {
        self.description.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use tempfile::TempDir;

    #[rstest]
    fn existing_file_resolves_only_once_written() {
        let dir = TempDir::new().expect("temp dir creation succeeds");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("ivy.xml")).expect("utf-8 path");
        let reference = ExistingFile::new(path.clone());

        assert!(reference.files().expect("resolves").is_empty());

        std::fs::write(&path, "<ivy-module/>").expect("write descriptor");

        assert_eq!(reference.single_file().expect("one file"), path);
    }

    #[rstest]
    fn deferred_files_reevaluate_on_every_access() {
        let calls = Cell::new(0_usize);
        let files = DeferredFiles::new("counter", || {
            calls.set(calls.get() + 1);
            vec![Utf8PathBuf::from(format!("out-{}.jar", calls.get()))]
        });

        let first = files.files().expect("resolves");
        let second = files.files().expect("resolves");

        assert_eq!(first, [Utf8PathBuf::from("out-1.jar")]);
        assert_eq!(second, [Utf8PathBuf::from("out-2.jar")]);
    }

    #[rstest]
    fn fixed_files_describe_their_contents() {
        let files = FixedFiles::new(["a.jar", "b.jar"]);

        assert_eq!(files.describe(), "file collection [a.jar, b.jar]");
    }
}

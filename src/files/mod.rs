//! Lazily evaluated file collections.
//!
//! Publications refer to files that usually do not exist yet while the build
//! is being configured: the descriptor is generated by a later task and
//! artifacts are produced by compilation. A [`FileCollection`] therefore
//! describes *how* to find files and only resolves them when [`files`] is
//! called. Nothing is cached; every call re-evaluates the source.
//!
//! [`files`]: FileCollection::files

mod pattern;
mod sources;
mod union;

pub use self::pattern::GlobFiles;
pub use self::sources::{DeferredFiles, ExistingFile, FixedFiles};
pub use self::union::UnionFiles;

use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving a file collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileCollectionError {
    /// A single file was required but the collection resolved to a
    /// different number of files.
    #[error("expected {description} to contain exactly one file, but it contained {count}")]
    NotSingleFile {
        /// Human-readable description of the collection.
        description: String,
        /// Number of files the collection resolved to.
        count: usize,
    },

    /// A glob pattern could not be compiled.
    #[error("invalid file pattern \"{pattern}\": {reason}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// Parser message.
        reason: String,
    },

    /// A matched path could not be read while walking the file system.
    #[error("failed to read {path}: {reason}")]
    Unreadable {
        /// The path that could not be read.
        path: PathBuf,
        /// Description of the I/O failure.
        reason: String,
    },

    /// A resolved path is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
}

/// A set of files resolved on demand.
pub trait FileCollection: fmt::Debug {
    /// Resolve the collection to its current files, in a stable order.
    ///
    /// # Errors
    ///
    /// Returns a [`FileCollectionError`] when the underlying source cannot be
    /// evaluated.
    fn files(&self) -> Result<Vec<Utf8PathBuf>, FileCollectionError>;

    /// A short description used in error messages.
    fn describe(&self) -> String;

    /// Resolve the collection and require exactly one file.
    ///
    /// # Errors
    ///
    /// Returns [`FileCollectionError::NotSingleFile`] when zero or several
    /// files resolve, or any error raised by [`Self::files`].
    fn single_file(&self) -> Result<Utf8PathBuf, FileCollectionError> {
        let mut files = self.files()?;
        match files.len() {
            1 => Ok(files.remove(0)),
            count => Err(FileCollectionError::NotSingleFile {
                description: self.describe(),
                count,
            }),
        }
    }

    /// Whether the collection currently contains `path`.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by [`Self::files`].
    fn contains(&self, path: &Utf8Path) -> Result<bool, FileCollectionError> {
        Ok(self.files()?.iter().any(|candidate| candidate == path))
    }
}

impl<T: FileCollection + ?Sized> FileCollection for Box<T> {
    fn files(&self) -> Result<Vec<Utf8PathBuf>, FileCollectionError> {
        (**self).files()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: FileCollection + ?Sized> FileCollection for &T {
    fn files(&self) -> Result<Vec<Utf8PathBuf>, FileCollectionError> {
        (**self).files()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

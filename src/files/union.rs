//! Ordered union of several file collections.

use super::{FileCollection, FileCollectionError};
use camino::Utf8PathBuf;
use std::collections::HashSet;

/// The union of several collections, evaluated afresh on every access.
///
/// Files keep the order of their first appearance; duplicates contributed by
/// later members are dropped.
#[derive(Debug, Default)]
pub struct UnionFiles<'a> {
    members: Vec<Box<dyn FileCollection + 'a>>,
}

impl<'a> UnionFiles<'a> {
    /// Start an empty union.
    #[must_use]
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Append a member collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use ivy_publish::files::{FileCollection, FixedFiles, UnionFiles};
    ///
    /// let union = UnionFiles::new()
    ///     .with(FixedFiles::new(["a.jar", "b.jar"]))
    ///     .with(FixedFiles::new(["b.jar", "ivy.xml"]));
    /// let names: Vec<_> = union
    ///     .files()
    ///     .expect("resolves")
    ///     .into_iter()
    ///     .map(|path| path.into_string())
    ///     .collect();
    /// assert_eq!(names, ["a.jar", "b.jar", "ivy.xml"]);
    /// ```
    #[must_use]
    pub fn with(mut self, member: impl FileCollection + 'a) -> Self {
        self.members.push(Box::new(member));
        self
    }

    /// Number of member collections.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

impl FileCollection for UnionFiles<'_> {
    fn files(&self) -> Result<Vec<Utf8PathBuf>, FileCollectionError> {
        let mut seen = HashSet::new();
        let mut union = Vec::new();
        for member in &self.members {
            for path in member.files()? {
                if seen.insert(path.clone()) {
                    union.push(path);
                }
            }
        }
        Ok(union)
    }

    fn describe(&self) -> String {
        let parts: Vec<_> = self.members.iter().map(FileCollection::describe).collect();
        format!("union of ({})", parts.join(", "))
    }
}

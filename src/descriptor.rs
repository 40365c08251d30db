//! Mutable metadata for the generated Ivy module descriptor.
//!
//! The descriptor handle travels with the publication so that build scripts
//! can adjust what ends up in `ivy.xml` before it is generated. Rendering the
//! document is the job of a downstream writer.

use serde::Serialize;
use std::collections::BTreeMap;

/// Status used when none is configured.
pub const DEFAULT_STATUS: &str = "integration";

/// Descriptor-level metadata for a publication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IvyModuleDescriptor {
    status: Option<String>,
    branch: Option<String>,
    extra_info: BTreeMap<String, String>,
}

impl IvyModuleDescriptor {
    /// Return the configured status, or [`DEFAULT_STATUS`].
    #[must_use]
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_STATUS)
    }

    /// Set the module status (`integration`, `milestone`, `release`, ...).
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    /// Return the branch, if one was set.
    #[must_use]
    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    /// Set or clear the branch.
    pub fn set_branch(&mut self, branch: Option<impl Into<String>>) {
        self.branch = branch.map(Into::into);
    }

    /// Add an `<info>` extra element, replacing any previous value.
    pub fn add_extra_info(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.extra_info.insert(key.into(), value.into());
    }

    /// Extra info elements ordered by key.
    #[must_use]
    pub fn extra_info(&self) -> &BTreeMap<String, String> {
        &self.extra_info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn status_defaults_to_integration() {
        let descriptor = IvyModuleDescriptor::default();

        assert_eq!(descriptor.status(), "integration");
        assert!(descriptor.branch().is_none());
    }

    #[rstest]
    fn extra_info_is_keyed_and_sorted() {
        let mut descriptor = IvyModuleDescriptor::default();
        descriptor.add_extra_info("owner", "build-team");
        descriptor.add_extra_info("ci", "first");
        descriptor.add_extra_info("ci", "second");

        let keys: Vec<_> = descriptor.extra_info().keys().map(String::as_str).collect();
        assert_eq!(keys, ["ci", "owner"]);
        assert_eq!(descriptor.extra_info().get("ci").map(String::as_str), Some("second"));
    }
}

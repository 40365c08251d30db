//! Publishing conventions shared by every publication in a build.
//!
//! `PublishingConfig` mirrors the settings a build script may override for
//! where generated descriptors are written. Values are deserialised by the
//! caller (typically from a `[publishing]` TOML table) and fall back to the
//! conventional layout when omitted.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

/// Directory that holds per-publication output by default.
const DEFAULT_PUBLICATIONS_DIR: &str = "build/publications";

/// File name of the generated Ivy descriptor by default.
const DEFAULT_DESCRIPTOR_FILE_NAME: &str = "ivy.xml";

/// Where generated publication files live.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PublishingConfig {
    /// Root directory for generated publication files.
    pub publications_dir: Utf8PathBuf,
    /// File name given to each generated descriptor.
    pub descriptor_file_name: String,
}

impl PublishingConfig {
    /// Conventional path of the descriptor generated for `publication`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ivy_publish::PublishingConfig;
    ///
    /// let config = PublishingConfig::default();
    /// assert_eq!(config.descriptor_path("ivy"), "build/publications/ivy/ivy.xml");
    /// ```
    #[must_use]
    pub fn descriptor_path(&self, publication: &str) -> Utf8PathBuf {
        self.publication_dir(publication)
            .join(&self.descriptor_file_name)
    }

    /// Directory reserved for `publication`'s generated files.
    #[must_use]
    pub fn publication_dir(&self, publication: &str) -> Utf8PathBuf {
        self.publications_dir.join(publication)
    }

    /// Return the publications root.
    #[must_use]
    pub fn publications_dir(&self) -> &Utf8Path {
        &self.publications_dir
    }
}

impl Default for PublishingConfig {
    fn default() -> Self {
        Self {
            publications_dir: Utf8PathBuf::from(DEFAULT_PUBLICATIONS_DIR),
            descriptor_file_name: DEFAULT_DESCRIPTOR_FILE_NAME.to_owned(),
        }
    }
}

//! Module coordinates identifying what a publication ships.
//!
//! Coordinates are the `group:name:version` triple written into the Ivy
//! descriptor's `<info>` element. Each component must be non-empty and free of
//! whitespace so that the rendered triple stays unambiguous.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors arising from invalid coordinate components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinatesError {
    /// A component is empty or contains whitespace.
    #[error("invalid {field} \"{value}\": {reason}")]
    Invalid {
        /// Which component was rejected (`group`, `name`, or `version`).
        field: &'static str,
        /// The rejected value.
        value: String,
        /// Description of the validation failure.
        reason: String,
    },
}

/// An immutable `group:name:version` identifier.
///
/// # Examples
///
/// ```
/// use ivy_publish::Coordinates;
///
/// let coordinates = Coordinates::new("org.example", "widget", "1.0").expect("valid coordinates");
/// assert_eq!(coordinates.to_string(), "org.example:widget:1.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinates {
    group: String,
    name: String,
    version: String,
}

impl Coordinates {
    /// Build coordinates from their three components.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatesError::Invalid`] when any component is blank or
    /// contains whitespace.
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self, CoordinatesError> {
        let group = validate_component("group", group.into())?;
        let name = validate_component("name", name.into())?;
        let version = validate_component("version", version.into())?;
        Ok(Self {
            group,
            name,
            version,
        })
    }

    /// Return the organisation/group component.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Return the module name component.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the revision/version component.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

fn validate_component(field: &'static str, value: String) -> Result<String, CoordinatesError> {
    if value.trim().is_empty() {
        return Err(CoordinatesError::Invalid {
            field,
            value,
            reason: "must not be empty".to_owned(),
        });
    }
    if let Some(bad) = value.chars().find(|c| c.is_whitespace()) {
        return Err(CoordinatesError::Invalid {
            field,
            reason: format!("whitespace character {bad:?} is not allowed"),
            value,
        });
    }
    Ok(value)
}

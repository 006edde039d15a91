//! Comparison options
//!
//! Strictness toggles consulted by the leaf comparators. The node comparator
//! forwards these unchanged and never interprets them itself.

use serde::{Deserialize, Serialize};

use crate::errors::{CompareError, ExError, Result};

/// How property values are compared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyLevel {
    /// Every property pair counts as equal
    None,
    /// Only top-level properties (`level <= 1`) are compared
    Simple,
    #[default]
    All,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventLevel {
    /// Any two events match; pairing becomes positional
    None,
    #[default]
    All,
}

/// Whether block tags take part in the comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdLevel {
    None,
    #[default]
    All,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactLevel {
    /// Any two artifacts match; pairing becomes positional
    None,
    /// Name, type and extension must agree
    Name,
    /// Descriptor and content hash must agree
    #[default]
    Content,
}

/// Comparison options forwarded to every leaf comparator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    pub property_level: PropertyLevel,
    pub event_level: EventLevel,
    pub id_level: IdLevel,
    pub artifact_level: ArtifactLevel,
}

impl CompareOptions {
    /// Parse options from a TOML document
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// - `InvalidOptions`: the document is not valid TOML or a level is unknown
    ///
    /// # Example
    ///
    /// ```
    /// use blockrate_core::options::{CompareOptions, PropertyLevel};
    ///
    /// let options = CompareOptions::from_toml_str("property_level = \"simple\"").unwrap();
    /// assert_eq!(options.property_level, PropertyLevel::Simple);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| {
            ExError::from(CompareError::InvalidOptions {
                reason: e.to_string(),
            })
        })
    }

    pub fn with_property_level(mut self, level: PropertyLevel) -> Self {
        self.property_level = level;
        self
    }

    pub fn with_event_level(mut self, level: EventLevel) -> Self {
        self.event_level = level;
        self
    }

    pub fn with_id_level(mut self, level: IdLevel) -> Self {
        self.id_level = level;
        self
    }

    pub fn with_artifact_level(mut self, level: ArtifactLevel) -> Self {
        self.artifact_level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;

    #[test]
    fn test_defaults_are_strict() {
        let options = CompareOptions::default();
        assert_eq!(options.property_level, PropertyLevel::All);
        assert_eq!(options.event_level, EventLevel::All);
        assert_eq!(options.id_level, IdLevel::All);
        assert_eq!(options.artifact_level, ArtifactLevel::Content);
    }

    #[test]
    fn test_from_toml_partial_document() {
        let options = CompareOptions::from_toml_str(
            r#"
            id_level = "none"
            artifact_level = "name"
            "#,
        )
        .unwrap();
        assert_eq!(options.id_level, IdLevel::None);
        assert_eq!(options.artifact_level, ArtifactLevel::Name);
        assert_eq!(options.property_level, PropertyLevel::All);
    }

    #[test]
    fn test_from_toml_rejects_unknown_level() {
        let err = CompareOptions::from_toml_str("event_level = \"sometimes\"").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidOptions);
    }
}

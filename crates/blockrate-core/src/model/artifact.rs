use serde::{Deserialize, Serialize};

use crate::compare::Equatable;

/// A file or resource attached to a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub name: String,
    /// Storage identifier; differs between copies of the same file
    #[serde(default)]
    pub uuid: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub extension: String,
    /// Content digest
    #[serde(default)]
    pub hash: String,
}

impl Artifact {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        extension: impl Into<String>,
        hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            uuid: String::new(),
            kind: kind.into(),
            extension: extension.into(),
            hash: hash.into(),
        }
    }

    /// True when name, type and extension agree
    pub fn same_descriptor(&self, other: &Self) -> bool {
        self.name == other.name && self.kind == other.kind && self.extension == other.extension
    }
}

/// `uuid` is ignored: two uploads of the same file are the same artifact.
impl Equatable for Artifact {
    fn equal(&self, other: &Self) -> bool {
        self.same_descriptor(other) && self.hash == other.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_ignores_uuid() {
        let mut a = Artifact::new("schema", "json", "json", "abc");
        let mut b = a.clone();
        a.uuid = "u-1".to_string();
        b.uuid = "u-2".to_string();
        assert!(a.equal(&b));
    }

    #[test]
    fn test_equal_detects_content_change() {
        let a = Artifact::new("schema", "json", "json", "abc");
        let b = Artifact::new("schema", "json", "json", "def");
        assert!(a.same_descriptor(&b));
        assert!(!a.equal(&b));
    }
}

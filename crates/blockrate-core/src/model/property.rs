use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Path of the synthetic property carrying a block's tag
pub const TAG_PATH: &str = "tag";

/// Distinguishes ordinary configuration properties from the synthetic tag entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    #[default]
    Property,
    Tag,
}

/// A keyed configuration value on a block
///
/// Properties are aligned across two blocks by `path`, which is stable
/// between versions of the same policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Leaf name (last path segment)
    pub name: String,

    /// Full dotted path, the alignment key
    pub path: String,

    /// Configured value
    #[serde(default)]
    pub value: Value,

    /// Nesting depth; 1 for top-level options
    #[serde(default = "default_level")]
    pub level: u32,

    #[serde(default)]
    pub kind: PropertyKind,
}

fn default_level() -> u32 {
    1
}

impl Property {
    /// Create a top-level property whose name is its path
    pub fn new(path: impl Into<String>, value: impl Into<Value>) -> Self {
        let path = path.into();
        let name = path.rsplit('.').next().unwrap_or(&path).to_string();
        let level = path.split('.').count() as u32;
        Self {
            name,
            path,
            value: value.into(),
            level,
            kind: PropertyKind::Property,
        }
    }

    /// Synthetic property representing a whole-block tag
    pub fn tag(tag: Option<&str>) -> Self {
        Self {
            name: TAG_PATH.to_string(),
            path: TAG_PATH.to_string(),
            value: tag.map_or(Value::Null, |t| Value::String(t.to_string())),
            level: 1,
            kind: PropertyKind::Tag,
        }
    }

    pub fn is_tag(&self) -> bool {
        self.kind == PropertyKind::Tag
    }
}

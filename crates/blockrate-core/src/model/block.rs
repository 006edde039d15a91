use serde::{Deserialize, Serialize};

use super::{Artifact, Event, PermissionId, Property};

/// Read-only view of one block in a policy tree
///
/// The comparison engine only ever reads a block through this trait, so any
/// host representation of a policy can be rated without conversion.
pub trait BlockModel {
    /// Block type tag (e.g. `interfaceContainerBlock`)
    fn block_type(&self) -> &str;

    /// Position among siblings
    fn index(&self) -> usize;

    /// Block-level tag identifier, if any
    fn tag(&self) -> Option<&str>;

    /// Configuration properties; paths must be unique within one block
    fn properties(&self) -> &[Property];

    fn events(&self) -> &[Event];

    fn permissions(&self) -> &[PermissionId];

    fn artifacts(&self) -> &[Artifact];
}

/// Owned block tree as loaded from a policy document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub block_type: String,

    #[serde(default)]
    pub index: usize,

    #[serde(default)]
    pub tag: Option<String>,

    #[serde(default)]
    pub properties: Vec<Property>,

    #[serde(default)]
    pub events: Vec<Event>,

    #[serde(default)]
    pub permissions: Vec<PermissionId>,

    #[serde(default)]
    pub artifacts: Vec<Artifact>,

    /// Nested blocks in sibling order
    #[serde(default)]
    pub children: Vec<Block>,
}

impl Block {
    /// Create an empty block of the given type at a sibling position
    pub fn new(block_type: impl Into<String>, index: usize) -> Self {
        Self {
            block_type: block_type.into(),
            index,
            tag: None,
            properties: Vec::new(),
            events: Vec::new(),
            permissions: Vec::new(),
            artifacts: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_permission(mut self, permission: impl Into<PermissionId>) -> Self {
        self.permissions.push(permission.into());
        self
    }

    pub fn with_artifact(mut self, artifact: Artifact) -> Self {
        self.artifacts.push(artifact);
        self
    }

    pub fn with_child(mut self, child: Block) -> Self {
        self.children.push(child);
        self
    }

    /// Nested blocks in sibling order
    pub fn children(&self) -> &[Block] {
        &self.children
    }
}

impl BlockModel for Block {
    fn block_type(&self) -> &str {
        &self.block_type
    }

    fn index(&self) -> usize {
        self.index
    }

    fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    fn properties(&self) -> &[Property] {
        &self.properties
    }

    fn events(&self) -> &[Event] {
        &self.events
    }

    fn permissions(&self) -> &[PermissionId] {
        &self.permissions
    }

    fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }
}

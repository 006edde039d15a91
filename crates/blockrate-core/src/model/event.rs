use serde::{Deserialize, Serialize};

use crate::compare::Equatable;

/// An event link declared on a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Tag of the emitting block
    pub source: String,
    /// Tag of the receiving block
    pub target: String,
    /// Input event name on the target
    pub input: String,
    /// Output event name on the source
    pub output: String,
    #[serde(default)]
    pub actor: String,
    #[serde(default)]
    pub disabled: bool,
}

impl Event {
    pub fn new(
        source: impl Into<String>,
        output: impl Into<String>,
        target: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            input: input.into(),
            output: output.into(),
            actor: String::new(),
            disabled: false,
        }
    }
}

impl Equatable for Event {
    fn equal(&self, other: &Self) -> bool {
        self == other
    }
}

use blockrate_core::model::{Artifact, Block, Event, Property};
use serde_json::json;

/// A fully populated container block used as the baseline in most scenarios
#[allow(dead_code)]
pub fn container_block(index: usize) -> Block {
    Block::new("interfaceContainerBlock", index)
        .with_tag("main_container")
        .with_property(Property::new("title", json!("Main")))
        .with_property(Property::new("uiMetaData.type", json!("blank")))
        .with_event(Event::new(
            "main_container",
            "RunEvent",
            "report",
            "RunEvent",
        ))
        .with_permission("OWNER")
        .with_permission("STANDARD_REGISTRY")
        .with_artifact(Artifact::new("schema", "json", "json", "a1b2c3"))
}

/// A block with a single property `x`
#[allow(dead_code)]
pub fn block_with_x(value: i64) -> Block {
    Block::new("interfaceContainerBlock", 0).with_property(Property::new("x", json!(value)))
}

/// A block carrying only permissions
#[allow(dead_code)]
pub fn roles_block(permissions: &[&str]) -> Block {
    permissions
        .iter()
        .fold(Block::new("policyRolesBlock", 0), |block, p| {
            block.with_permission(*p)
        })
}

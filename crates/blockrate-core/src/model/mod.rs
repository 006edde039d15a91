pub mod artifact;
pub mod block;
pub mod event;
pub mod permission;
pub mod property;

pub use artifact::Artifact;
pub use block::{Block, BlockModel};
pub use event::Event;
pub use permission::PermissionId;
pub use property::{Property, PropertyKind};

//! The platform accessibility tree.

mod node;
mod reader;

pub use node::AccessibilityNode;
pub use reader::{build_snapshot, next_snapshot_token, AccessibilitySnapshot};

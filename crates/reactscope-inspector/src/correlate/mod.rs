//! Merging the accessibility tree and the authoring tree.

mod builder;
mod render;

pub use builder::{build_map, props_summary, AccessibilityRef, ComponentMap, CorrelatedNode, MapOptions};
pub use render::{compact_value, component_line, host_line};

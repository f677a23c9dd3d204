//! Common utility types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata map type.
pub type Metadata = HashMap<String, serde_json::Value>;

/// Side-effect class of a tool.
///
/// Inspection tools only read; a tool that may reload the page (hook install
/// retry) is classed as `Navigates`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SideEffect {
    #[default]
    ReadOnly,
    Navigates,
}

#[cfg(test)]
#[path = "common_tests.rs"]
mod tests;

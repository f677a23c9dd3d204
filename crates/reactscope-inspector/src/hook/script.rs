//! Page-side script and the expressions evaluated against it.

use serde_json::json;

use crate::value::SerializeLimits;

/// Installs the hook table when evaluated; a no-op once installed.
pub const HOOK_SCRIPT: &str = include_str!("hook.js");

/// Page global holding the table.
pub const TABLE_GLOBAL: &str = "window.__REACTSCOPE__";

/// Install (or reuse) the table and return its report.
pub fn install_expression() -> String {
    format!(
        "{HOOK_SCRIPT}\n;({TABLE_GLOBAL} ? {TABLE_GLOBAL}.report() : null)"
    )
}

/// Options for `exportTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    pub max_nodes: usize,
    /// Nesting depth copied into the value heap.
    pub value_depth: usize,
    pub max_properties: usize,
    pub max_array_items: usize,
}

impl ExportOptions {
    /// Copy enough of each value for `limits` to apply on this side.
    pub fn for_limits(max_nodes: usize, limits: &SerializeLimits) -> Self {
        Self {
            max_nodes,
            value_depth: limits.max_depth + 1,
            max_properties: limits.max_properties,
            max_array_items: limits.max_array_items,
        }
    }
}

/// Export every committed root. Evaluates to `null` without the table.
pub fn export_expression(options: &ExportOptions) -> String {
    let opts = json!({
        "maxNodes": options.max_nodes,
        "valueDepth": options.value_depth,
        "maxProperties": options.max_properties,
        "maxArrayItems": options.max_array_items,
    });
    format!("({TABLE_GLOBAL} ? {TABLE_GLOBAL}.exportTree({opts}) : null)")
}

/// The DOM nodes of the last export, indexed by host slot.
pub fn host_nodes_expression() -> String {
    format!("({TABLE_GLOBAL} ? {TABLE_GLOBAL}.hostNodes : [])")
}

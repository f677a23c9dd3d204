//! Materialized accessibility nodes.

use std::fmt::Write as _;

use serde::Serialize;

use crate::cdp::{AXNode, AXProperty};

/// State properties reported on nodes, in display order.
const STATE_PROPERTIES: &[&str] = &[
    "focused",
    "disabled",
    "expanded",
    "checked",
    "pressed",
    "selected",
    "required",
    "readonly",
    "modal",
    "multiselectable",
    "invalid",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessibilityNode {
    pub uid: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// State flags such as `focused`, `collapsed` or `checked=mixed`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_node_id: Option<i64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub ignored: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AccessibilityNode>,
}

impl AccessibilityNode {
    pub(crate) fn from_ax(ax: &AXNode, uid: String) -> Self {
        Self {
            uid,
            role: ax
                .role
                .as_ref()
                .and_then(|r| r.as_text())
                .unwrap_or_else(|| "generic".to_string()),
            name: ax.name.as_ref().and_then(|v| v.as_text()),
            value: ax.value.as_ref().and_then(|v| v.as_text()),
            description: ax.description.as_ref().and_then(|v| v.as_text()),
            states: ax.properties.as_deref().map(states).unwrap_or_default(),
            backend_node_id: ax.backend_dom_node_id,
            ignored: ax.ignored,
            children: Vec::new(),
        }
    }

    /// One-line summary: `uid=1_4 button "Log in" focused`.
    pub fn summary(&self) -> String {
        let mut line = format!("uid={} {}", self.uid, self.role);
        if let Some(name) = &self.name {
            let _ = write!(line, " {:?}", name);
        }
        if let Some(value) = &self.value {
            let _ = write!(line, " value={:?}", value);
        }
        for state in &self.states {
            line.push(' ');
            line.push_str(state);
        }
        line
    }

    /// Whether the role matches exactly and the name contains `name`, both
    /// ignoring case.
    pub fn matches(&self, role: Option<&str>, name: &str) -> bool {
        let role_ok = role.is_none_or(|r| self.role.eq_ignore_ascii_case(r));
        let needle = name.to_lowercase();
        let name_ok = needle.is_empty()
            || self
                .name
                .as_ref()
                .is_some_and(|n| n.to_lowercase().contains(&needle));
        role_ok && name_ok
    }
}

fn states(properties: &[AXProperty]) -> Vec<String> {
    let mut out = Vec::new();
    for &wanted in STATE_PROPERTIES {
        let Some(prop) = properties.iter().find(|p| p.name == wanted) else {
            continue;
        };
        let value = prop.value.value.as_ref();
        match value {
            Some(serde_json::Value::Bool(true)) => out.push(wanted.to_string()),
            Some(serde_json::Value::Bool(false)) if wanted == "expanded" => {
                out.push("collapsed".to_string())
            }
            Some(serde_json::Value::String(s)) if s == "true" => out.push(wanted.to_string()),
            Some(serde_json::Value::String(s)) if s == "mixed" => {
                out.push(format!("{}=mixed", wanted))
            }
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ax(value: serde_json::Value) -> AXNode {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_from_ax_reads_fields_and_states() {
        let node = AccessibilityNode::from_ax(
            &ax(json!({
                "nodeId": "7",
                "role": {"type": "role", "value": "checkbox"},
                "name": {"type": "computedString", "value": "Remember me"},
                "properties": [
                    {"name": "focusable", "value": {"type": "boolean", "value": true}},
                    {"name": "checked", "value": {"type": "tristate", "value": "mixed"}},
                    {"name": "disabled", "value": {"type": "boolean", "value": false}},
                    {"name": "focused", "value": {"type": "boolean", "value": true}},
                    {"name": "expanded", "value": {"type": "boolean", "value": false}}
                ],
                "backendDOMNodeId": 42
            })),
            "1_3".to_string(),
        );
        assert_eq!(node.role, "checkbox");
        assert_eq!(node.name.as_deref(), Some("Remember me"));
        assert_eq!(node.states, vec!["focused", "collapsed", "checked=mixed"]);
        assert_eq!(node.backend_node_id, Some(42));
        assert_eq!(
            node.summary(),
            "uid=1_3 checkbox \"Remember me\" focused collapsed checked=mixed"
        );
    }

    #[test]
    fn test_missing_role_is_generic() {
        let node = AccessibilityNode::from_ax(&ax(json!({"nodeId": "1"})), "1_0".to_string());
        assert_eq!(node.role, "generic");
        assert_eq!(node.summary(), "uid=1_0 generic");
    }

    #[test]
    fn test_matches() {
        let node = AccessibilityNode::from_ax(
            &ax(json!({
                "nodeId": "2",
                "role": {"type": "role", "value": "button"},
                "name": {"type": "computedString", "value": "Log in"}
            })),
            "1_1".to_string(),
        );
        assert!(node.matches(Some("BUTTON"), "log"));
        assert!(node.matches(None, "IN"));
        assert!(node.matches(Some("button"), ""));
        assert!(!node.matches(Some("butto"), "log"));
        assert!(!node.matches(None, "sign up"));
    }
}

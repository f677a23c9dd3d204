//! Text form of the correlated map.

use std::fmt::Write as _;

use serde_json::Value;

use crate::fiber::ComponentDescriptor;
use crate::text::{render_forest, TextTree};

use super::builder::{AccessibilityRef, ComponentMap, CorrelatedNode};

/// Longest rendered value before it is cut.
const MAX_VALUE_CHARS: usize = 60;

impl ComponentMap {
    /// One line per node with box-drawing connectors. A merged node prints its
    /// component line with the host line nested under it.
    pub fn render(&self) -> String {
        let forest: Vec<TextTree> = self.roots.iter().map(text_tree).collect();
        let mut out = render_forest(&forest);
        if self.truncated {
            out.push_str("(tree truncated)\n");
        }
        out
    }
}

fn text_tree(node: &CorrelatedNode) -> TextTree {
    let children: Vec<TextTree> = node.children.iter().map(text_tree).collect();
    match (&node.component, &node.accessibility) {
        (Some(component), Some(host)) => TextTree::new(
            component_line(component),
            vec![TextTree::new(host_line(host), children)],
        ),
        (Some(component), None) => TextTree::new(component_line(component), children),
        (None, Some(host)) => TextTree::new(host_line(host), children),
        (None, None) => TextTree::new(
            format!("<{}>", node.host_type.as_deref().unwrap_or("?")),
            children,
        ),
    }
}

/// `LoginForm title="Sign in" state={...} @ src/LoginForm.tsx:12:3`
pub fn component_line(component: &ComponentDescriptor) -> String {
    let mut line = component.name.clone();
    if let Some(Value::Object(props)) = &component.props {
        for (key, value) in props {
            let _ = write!(line, " {}={}", key, compact_value(value));
        }
    }
    if let Some(state) = &component.state {
        let _ = write!(line, " state={}", compact_value(state));
    }
    if let Some(source) = &component.source {
        let _ = write!(line, " @ {}", source);
    }
    line
}

/// `uid=1_4 button "Log in"`
pub fn host_line(host: &AccessibilityRef) -> String {
    match &host.name {
        Some(name) => format!("uid={} {} {:?}", host.uid, host.role, name),
        None => format!("uid={} {}", host.uid, host.role),
    }
}

/// Compact JSON, cut to a readable length.
pub fn compact_value(value: &Value) -> String {
    let text = value.to_string();
    if text.chars().count() <= MAX_VALUE_CHARS {
        return text;
    }
    let cut: String = text.chars().take(MAX_VALUE_CHARS).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fiber::{FiberKind, SourceLocation};
    use serde_json::json;

    fn component(props: Value) -> ComponentDescriptor {
        ComponentDescriptor {
            id: "1:0:0".parse().unwrap(),
            name: "LoginForm".to_string(),
            kind: FiberKind::FunctionComponent,
            key: None,
            props: Some(props),
            state: Some(json!([true])),
            source: Some(SourceLocation {
                file: Some("src/LoginForm.tsx".to_string()),
                line: Some(12),
                column: None,
            }),
            owners: None,
        }
    }

    #[test]
    fn test_component_line() {
        let line = component_line(&component(json!({"title": "Sign in"})));
        assert_eq!(
            line,
            "LoginForm title=\"Sign in\" state=[true] @ src/LoginForm.tsx:12"
        );
    }

    #[test]
    fn test_host_line() {
        let host = AccessibilityRef {
            uid: "2_3".to_string(),
            role: "button".to_string(),
            name: Some("Log in".to_string()),
            backend_node_id: 4,
        };
        assert_eq!(host_line(&host), "uid=2_3 button \"Log in\"");
    }

    #[test]
    fn test_compact_value_cuts_long_values() {
        let long = json!("x".repeat(100));
        let text = compact_value(&long);
        assert!(text.ends_with("..."));
        assert_eq!(text.chars().count(), MAX_VALUE_CHARS + 3);
        assert_eq!(compact_value(&json!(5)), "5");
    }

    #[test]
    fn test_unmatched_host_rendered_as_tag() {
        let map = ComponentMap {
            roots: vec![CorrelatedNode {
                component: None,
                accessibility: None,
                host_type: Some("div".to_string()),
                children: Vec::new(),
            }],
            truncated: true,
        };
        assert_eq!(map.render(), "<div>\n(tree truncated)\n");
    }
}

//! Box-drawing rendering of labelled trees.

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// A labelled node ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTree {
    pub label: String,
    pub children: Vec<TextTree>,
}

impl TextTree {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn new(label: impl Into<String>, children: Vec<TextTree>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }
}

/// Render a forest. Top-level labels are unprefixed; nested labels carry
/// sibling-aware connectors.
pub fn render_forest(roots: &[TextTree]) -> String {
    let mut out = String::new();
    // (node, prefix for its children, connector for its own line)
    let mut stack: Vec<(&TextTree, String, &str)> =
        roots.iter().rev().map(|t| (t, String::new(), "")).collect();

    while let Some((node, prefix, connector)) = stack.pop() {
        out.push_str(&prefix);
        out.push_str(connector);
        out.push_str(&node.label);
        out.push('\n');

        let child_prefix = match connector {
            "" => prefix.clone(),
            LAST_BRANCH => format!("{}{}", prefix, SPACE),
            _ => format!("{}{}", prefix, PIPE),
        };
        let last = node.children.len().saturating_sub(1);
        for (i, child) in node.children.iter().enumerate().rev() {
            let connector = if i == last { LAST_BRANCH } else { BRANCH };
            stack.push((child, child_prefix.clone(), connector));
        }
    }

    out
}

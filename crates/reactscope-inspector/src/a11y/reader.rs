//! Rebuilding the accessibility hierarchy from the flat node list.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::cdp::AXNode;
use crate::text::{render_forest, TextTree};

use super::node::AccessibilityNode;

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// A fresh snapshot token; strictly increasing within the process.
pub fn next_snapshot_token() -> u64 {
    NEXT_TOKEN.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessibilitySnapshot {
    pub token: u64,
    pub node_count: usize,
    pub root: AccessibilityNode,
}

struct Slot<'a> {
    ax: &'a AXNode,
    parent: Option<usize>,
}

/// Materialize the tree rooted at the first node of `nodes`.
///
/// Without `verbose`, ignored nodes are dropped and their children attach to
/// the nearest kept ancestor; the root is always kept. Unknown and repeated
/// child ids are skipped. Uids are assigned in pre-order. `None` for an empty
/// list.
pub fn build_snapshot(nodes: &[AXNode], verbose: bool, token: u64) -> Option<AccessibilitySnapshot> {
    let first = nodes.first()?;
    let by_id: HashMap<&str, &AXNode> = nodes.iter().map(|n| (n.node_id.as_str(), n)).collect();

    // Pre-order list of kept nodes with their parent slot.
    let mut slots: Vec<Slot> = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<(&AXNode, Option<usize>)> = vec![(first, None)];

    while let Some((ax, parent)) = stack.pop() {
        if !visited.insert(ax.node_id.as_str()) {
            continue;
        }
        let keep = verbose || !ax.ignored || slots.is_empty();
        let children_parent = if keep {
            slots.push(Slot { ax, parent });
            Some(slots.len() - 1)
        } else {
            parent
        };

        if let Some(child_ids) = &ax.child_ids {
            for id in child_ids.iter().rev() {
                if let Some(child) = by_id.get(id.as_str()) {
                    stack.push((child, children_parent));
                }
            }
        }
    }

    // Slots are in pre-order, so every child comes after its parent: build
    // bottom-up by walking them backwards.
    let node_count = slots.len();
    let mut children: Vec<Vec<AccessibilityNode>> = vec![Vec::new(); node_count];
    let mut root = None;
    for (index, slot) in slots.iter().enumerate().rev() {
        let mut node = AccessibilityNode::from_ax(slot.ax, format!("{}_{}", token, index));
        let mut own = std::mem::take(&mut children[index]);
        own.reverse();
        node.children = own;
        match slot.parent {
            Some(parent) => children[parent].push(node),
            None => root = Some(node),
        }
    }

    root.map(|root| AccessibilitySnapshot {
        token,
        node_count,
        root,
    })
}

impl AccessibilitySnapshot {
    /// All nodes in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = &AccessibilityNode> {
        let mut stack = vec![&self.root];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Nodes whose role equals `role` and whose name contains `name`, both
    /// ignoring case, in pre-order.
    pub fn find(&self, role: Option<&str>, name: &str) -> Vec<&AccessibilityNode> {
        self.iter().filter(|n| n.matches(role, name)).collect()
    }

    /// Nodes by backend node id. A later node replaces an earlier one.
    pub fn backend_index(&self) -> HashMap<i64, &AccessibilityNode> {
        self.iter()
            .filter_map(|n| n.backend_node_id.map(|id| (id, n)))
            .collect()
    }

    pub fn render(&self) -> String {
        render_forest(&[text_tree(&self.root)])
    }
}

fn text_tree(node: &AccessibilityNode) -> TextTree {
    TextTree::new(node.summary(), node.children.iter().map(text_tree).collect())
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;

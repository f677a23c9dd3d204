//! Pre-order walks over committed roots.

use std::collections::HashSet;

use serde::Serialize;

use reactscope_config::LimitsConfig;

use super::graph::{child_list, FiberGraph, FiberSnapshot, NodeId};
use super::id::ComponentId;
use super::kind::FiberKind;
use super::source::{source_location, SourceLocation};

/// Bounds and filters for [`list_components`].
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Deepest emitted level; top-level components are at depth 0.
    pub max_depth: usize,
    pub max_nodes: usize,
    /// Emit host and other nodes too.
    pub include_all_types: bool,
    /// Case-insensitive substring match on the display name.
    pub name_filter: Option<String>,
}

impl WalkOptions {
    pub fn from_limits(limits: &LimitsConfig) -> Self {
        Self {
            max_depth: limits.max_depth,
            max_nodes: limits.max_nodes,
            include_all_types: false,
            name_filter: None,
        }
    }
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::from_limits(&LimitsConfig::default())
    }
}

/// One listed node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentEntry {
    pub id: ComponentId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FiberKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceLocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Listing {
    pub components: Vec<ComponentEntry>,
    /// Matching nodes were left out because `max_nodes` was reached.
    pub truncated: bool,
}

struct Frame {
    node: NodeId,
    id: ComponentId,
    /// Listed-kind ancestors above this node.
    depth: usize,
}

/// List the nodes of every root in pre-order.
///
/// Depth counts the listed-kind ancestors of a node. Once `max_nodes` entries
/// are emitted the walk still finishes so `truncated` is exact.
pub fn list_components(snapshot: &FiberSnapshot, options: &WalkOptions) -> Listing {
    let filter = options.name_filter.as_ref().map(|f| f.to_lowercase());
    let mut listing = Listing::default();
    let mut visited = HashSet::new();

    for root in &snapshot.roots {
        let mut stack = vec![Frame {
            node: root.node,
            id: ComponentId::root(root.registration_id, root.root_index),
            depth: 0,
        }];

        while let Some(frame) = stack.pop() {
            if !visited.insert(frame.node) {
                continue;
            }

            let kind = snapshot.kind(frame.node);
            let listed = options.include_all_types || kind.is_authored();
            if listed && frame.depth <= options.max_depth {
                let name = snapshot.name(frame.node);
                let matches = filter
                    .as_ref()
                    .is_none_or(|f| name.to_lowercase().contains(f.as_str()));
                if matches {
                    if listing.components.len() < options.max_nodes {
                        listing.components.push(entry(snapshot, &frame, kind, name));
                    } else {
                        listing.truncated = true;
                    }
                }
            }

            let child_depth = if listed { frame.depth + 1 } else { frame.depth };
            let children = child_list(snapshot, frame.node);
            for (index, child) in children.into_iter().enumerate().rev() {
                stack.push(Frame {
                    node: child,
                    id: frame.id.child(index),
                    depth: child_depth,
                });
            }
        }
    }

    listing
}

fn entry(snapshot: &FiberSnapshot, frame: &Frame, kind: FiberKind, name: String) -> ComponentEntry {
    let node = snapshot.node(frame.node);
    ComponentEntry {
        id: frame.id.clone(),
        name,
        kind,
        key: node.and_then(|n| n.key.clone()),
        depth: frame.depth,
        source: node.and_then(|n| source_location(&snapshot.values, &n.props)),
    }
}

/// Find the node an id names by re-walking its path from the root.
pub fn resolve(snapshot: &FiberSnapshot, id: &ComponentId) -> Option<NodeId> {
    let root = snapshot.root(id.registration_id, id.root_index)?;
    id.path.iter().try_fold(root.node, |node, &index| {
        child_list(snapshot, node).get(index).copied()
    })
}

/// Path id of a node, computed from its parent links.
pub fn id_of(snapshot: &FiberSnapshot, node: NodeId) -> Option<ComponentId> {
    let mut path = Vec::new();
    let mut seen = HashSet::new();
    let mut current = node;

    loop {
        if !seen.insert(current) {
            return None;
        }
        if let Some(root) = snapshot.roots.iter().find(|r| r.node == current) {
            path.reverse();
            return Some(ComponentId {
                registration_id: root.registration_id,
                root_index: root.root_index,
                path,
            });
        }
        let parent = snapshot.parent(current)?;
        let index = child_list(snapshot, parent)
            .iter()
            .position(|&c| c == current)?;
        path.push(index);
        current = parent;
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;

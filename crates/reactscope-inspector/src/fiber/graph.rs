//! The exported fiber graph.
//!
//! The page flattens each committed tree into an index-linked node table. The
//! table is a read-only snapshot: it is decoded once per call and never
//! outlives it.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{InspectError, Result};
use crate::value::{HeapValue, ValueHeap};

use super::kind::FiberKind;
use super::naming;

/// Index of a node in a [`FiberSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

/// Pointer structure of a fiber tree.
///
/// Traversals are written against this trait so their step counts can be
/// observed independently of the snapshot layout.
pub trait FiberGraph {
    fn kind(&self, node: NodeId) -> FiberKind;
    fn parent(&self, node: NodeId) -> Option<NodeId>;
    fn first_child(&self, node: NodeId) -> Option<NodeId>;
    fn next_sibling(&self, node: NodeId) -> Option<NodeId>;
}

/// Children of `node` in order. A sibling chain that loops back on itself is
/// cut at the first repeat.
pub fn child_list<G: FiberGraph + ?Sized>(graph: &G, node: NodeId) -> Vec<NodeId> {
    let mut children = Vec::new();
    let mut seen = HashSet::new();
    let mut next = graph.first_child(node);
    while let Some(child) = next {
        if !seen.insert(child) {
            break;
        }
        children.push(child);
        next = graph.next_sibling(child);
    }
    children
}

/// Raw naming inputs read off the fiber's type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameHints {
    /// `type.displayName`
    #[serde(default)]
    pub display_name: Option<String>,
    /// `type.name`
    #[serde(default)]
    pub own_name: Option<String>,
    /// `elementType.name`
    #[serde(default)]
    pub element_type_name: Option<String>,
    /// `type.render.name` (forwardRef)
    #[serde(default)]
    pub render_name: Option<String>,
    /// `type.type.name` (memo)
    #[serde(default)]
    pub inner_name: Option<String>,
}

impl NameHints {
    pub fn named(name: &str) -> Self {
        Self {
            own_name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiberNode {
    pub tag: u32,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub names: NameHints,
    /// Element tag name (`div`) or `#text`, for host nodes.
    #[serde(default)]
    pub host_type: Option<String>,
    #[serde(default)]
    pub props: HeapValue,
    #[serde(default)]
    pub state: HeapValue,
    /// Slot of the rendered DOM node in the page's `hostNodes` array.
    #[serde(default, rename = "host")]
    pub host_slot: Option<usize>,
    /// Filled in after export from the resolved `hostNodes`.
    #[serde(skip)]
    pub backend_node_id: Option<i64>,
    #[serde(default)]
    pub parent: Option<NodeId>,
    #[serde(default)]
    pub child: Option<NodeId>,
    #[serde(default)]
    pub sibling: Option<NodeId>,
}

impl FiberNode {
    pub fn kind(&self) -> FiberKind {
        FiberKind::from_tag(self.tag)
    }
}

/// One committed root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootEntry {
    pub registration_id: u32,
    pub root_index: usize,
    pub node: NodeId,
}

/// A decoded export: every committed root, their nodes and the values their
/// props/state reference.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FiberSnapshot {
    #[serde(default)]
    pub roots: Vec<RootEntry>,
    #[serde(default)]
    pub nodes: Vec<FiberNode>,
    #[serde(default)]
    pub values: ValueHeap,
    /// The page stopped exporting at its node cap.
    #[serde(default)]
    pub truncated: bool,
}

impl FiberSnapshot {
    /// Decode and bounds-check an export payload.
    pub fn from_export(payload: Value) -> Result<Self> {
        let snapshot: FiberSnapshot = serde_json::from_value(payload)?;
        snapshot.check_links()?;
        Ok(snapshot)
    }

    fn check_links(&self) -> Result<()> {
        let len = self.nodes.len();
        let in_bounds = |id: Option<NodeId>| id.is_none_or(|NodeId(i)| i < len);

        for root in &self.roots {
            if root.node.0 >= len {
                return Err(InspectError::Export(format!(
                    "root {}:{} points at missing node {}",
                    root.registration_id, root.root_index, root.node.0
                )));
            }
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if !(in_bounds(node.parent) && in_bounds(node.child) && in_bounds(node.sibling)) {
                return Err(InspectError::Export(format!(
                    "node {} links outside the node table",
                    i
                )));
            }
        }
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&FiberNode> {
        self.nodes.get(id.0)
    }

    pub fn root(&self, registration_id: u32, root_index: usize) -> Option<&RootEntry> {
        self.roots
            .iter()
            .find(|r| r.registration_id == registration_id && r.root_index == root_index)
    }

    /// Display name of a node.
    pub fn name(&self, id: NodeId) -> String {
        match self.node(id) {
            Some(node) => naming::display_name(node),
            None => naming::UNKNOWN.to_string(),
        }
    }

    /// Highest host slot referenced, plus one.
    pub fn host_slot_count(&self) -> usize {
        self.nodes
            .iter()
            .filter_map(|n| n.host_slot)
            .max()
            .map_or(0, |m| m + 1)
    }

    /// Record the backend node ids resolved for the page's `hostNodes`,
    /// index-aligned with host slots.
    pub fn attach_backend_ids(&mut self, ids: &[Option<i64>]) {
        for node in &mut self.nodes {
            node.backend_node_id = node.host_slot.and_then(|slot| ids.get(slot).copied().flatten());
        }
    }

    /// Host node per backend node id. A later node replaces an earlier one
    /// with the same id.
    pub fn host_index(&self) -> HashMap<i64, NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.kind().is_host())
            .filter_map(|(i, n)| n.backend_node_id.map(|b| (b, NodeId(i))))
            .collect()
    }
}

impl FiberGraph for FiberSnapshot {
    fn kind(&self, node: NodeId) -> FiberKind {
        self.node(node).map_or(FiberKind::Other, FiberNode::kind)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.parent
    }

    fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.child
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.sibling
    }
}

#[cfg(test)]
#[path = "graph_tests.rs"]
mod tests;

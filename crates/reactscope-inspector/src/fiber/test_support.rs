//! In-memory fiber trees for unit tests.

use serde_json::Value;

use super::graph::{FiberNode, FiberSnapshot, NameHints, NodeId, RootEntry};

pub const HOST_ROOT: u32 = 3;
pub const FUNCTION: u32 = 0;
pub const CLASS: u32 = 1;
pub const FORWARD_REF: u32 = 11;
pub const MEMO: u32 = 14;
pub const HOST: u32 = 5;
pub const TEXT: u32 = 6;
pub const FRAGMENT: u32 = 7;

#[derive(Default)]
pub struct TreeBuilder {
    snapshot: FiberSnapshot,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root fiber registered as `registration_id:root_index`.
    pub fn root(&mut self, registration_id: u32, root_index: usize) -> NodeId {
        let id = self.push(FiberNode {
            tag: HOST_ROOT,
            ..FiberNode::default()
        });
        self.snapshot.roots.push(RootEntry {
            registration_id,
            root_index,
            node: id,
        });
        id
    }

    /// Append an authored (or other) node as the last child of `parent`.
    pub fn component(&mut self, parent: NodeId, tag: u32, name: &str) -> NodeId {
        self.append(
            parent,
            FiberNode {
                tag,
                names: NameHints::named(name),
                ..FiberNode::default()
            },
        )
    }

    /// Append a host node rendering `host_type` with the given backend id.
    pub fn host(&mut self, parent: NodeId, host_type: &str, backend: Option<i64>) -> NodeId {
        let tag = if host_type == "#text" { TEXT } else { HOST };
        let slot = self.snapshot.nodes.iter().filter(|n| n.host_slot.is_some()).count();
        self.append(
            parent,
            FiberNode {
                tag,
                host_type: Some(host_type.to_string()),
                host_slot: Some(slot),
                backend_node_id: backend,
                ..FiberNode::default()
            },
        )
    }

    pub fn props(&mut self, node: NodeId, props: Value) {
        let value = self.snapshot.values.import_json(&props);
        self.snapshot.nodes[node.0].props = value;
    }

    pub fn state(&mut self, node: NodeId, state: Value) {
        let value = self.snapshot.values.import_json(&state);
        self.snapshot.nodes[node.0].state = value;
    }

    pub fn key(&mut self, node: NodeId, key: &str) {
        self.snapshot.nodes[node.0].key = Some(key.to_string());
    }

    /// Append a node and link it under `parent`.
    pub fn append(&mut self, parent: NodeId, mut node: FiberNode) -> NodeId {
        node.parent = Some(parent);
        let id = self.push(node);

        match self.snapshot.nodes[parent.0].child {
            None => self.snapshot.nodes[parent.0].child = Some(id),
            Some(first) => {
                let mut last = first;
                while let Some(next) = self.snapshot.nodes[last.0].sibling {
                    last = next;
                }
                self.snapshot.nodes[last.0].sibling = Some(id);
            }
        }
        id
    }

    pub fn node_mut(&mut self, node: NodeId) -> &mut FiberNode {
        &mut self.snapshot.nodes[node.0]
    }

    pub fn build(self) -> FiberSnapshot {
        self.snapshot
    }

    fn push(&mut self, node: FiberNode) -> NodeId {
        self.snapshot.nodes.push(node);
        NodeId(self.snapshot.nodes.len() - 1)
    }
}

//! Building the correlated forest.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::a11y::{AccessibilityNode, AccessibilitySnapshot};
use crate::fiber::{
    child_list, is_source_prop, source_location, ComponentDescriptor, ComponentId,
    FiberGraph, FiberKind, FiberSnapshot, NodeId,
};
use crate::value::{serialize, HeapObject, HeapValue, SerializeLimits, ValueHeap, RESERVED_KEY_PREFIX};

/// Props shown per component.
pub const SUMMARY_PROPS: usize = 3;

/// Depth used for values in the map.
const SUMMARY_DEPTH: usize = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapOptions {
    /// Keep host nodes without an accessibility match as `<tag>` nodes.
    pub verbose: bool,
    pub include_state: bool,
}

/// The accessibility side of a correlated node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessibilityRef {
    pub uid: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub backend_node_id: i64,
}

impl AccessibilityRef {
    pub(crate) fn new(node: &AccessibilityNode, backend_node_id: i64) -> Self {
        Self {
            uid: node.uid.clone(),
            role: node.role.clone(),
            name: node.name.clone(),
            backend_node_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelatedNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<AccessibilityRef>,
    /// Tag of an unmatched host node, kept in verbose maps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CorrelatedNode>,
}

impl CorrelatedNode {
    fn empty() -> Self {
        Self {
            component: None,
            accessibility: None,
            host_type: None,
            children: Vec::new(),
        }
    }

    /// A host primitive matched to an accessibility node, with no component.
    pub fn is_matched_host(&self) -> bool {
        self.component.is_none() && self.accessibility.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComponentMap {
    pub roots: Vec<CorrelatedNode>,
    /// The fiber export stopped at its node cap.
    pub truncated: bool,
}

struct Entry {
    node: CorrelatedNode,
    parent: Option<usize>,
}

/// Correlate every committed root with the accessibility tree.
///
/// Authored nodes become component nodes; host nodes whose backend id is in
/// the accessibility tree become accessibility nodes; everything else is
/// transparent. A component whose only output is one matched host node is
/// merged with it.
pub fn build_map(
    fibers: &FiberSnapshot,
    a11y: Option<&AccessibilitySnapshot>,
    options: &MapOptions,
) -> ComponentMap {
    let index: HashMap<i64, &AccessibilityNode> =
        a11y.map(|s| s.backend_index()).unwrap_or_default();

    let mut entries: Vec<Entry> = Vec::new();
    let mut processed: HashSet<NodeId> = HashSet::new();

    for root in &fibers.roots {
        let root_id = ComponentId::root(root.registration_id, root.root_index);
        let mut stack: Vec<(NodeId, ComponentId, Option<usize>)> = vec![(root.node, root_id, None)];

        while let Some((node, id, parent)) = stack.pop() {
            if !processed.insert(node) {
                continue;
            }

            let emitted = correlate_node(fibers, node, &id, &index, options).map(|n| {
                entries.push(Entry { node: n, parent });
                entries.len() - 1
            });
            let children_parent = emitted.or(parent);

            for (i, child) in child_list(fibers, node).into_iter().enumerate().rev() {
                stack.push((child, id.child(i), children_parent));
            }
        }
    }

    ComponentMap {
        roots: assemble(entries),
        truncated: fibers.truncated,
    }
}

fn correlate_node(
    fibers: &FiberSnapshot,
    node: NodeId,
    id: &ComponentId,
    index: &HashMap<i64, &AccessibilityNode>,
    options: &MapOptions,
) -> Option<CorrelatedNode> {
    let fiber = fibers.node(node)?;
    match fibers.kind(node) {
        kind if kind.is_authored() => {
            let mut out = CorrelatedNode::empty();
            out.component = Some(map_component(fibers, node, id, kind, options));
            Some(out)
        }
        FiberKind::Host => {
            let matched = fiber
                .backend_node_id
                .and_then(|b| index.get(&b).map(|a| AccessibilityRef::new(a, b)));
            match matched {
                Some(accessibility) => {
                    let mut out = CorrelatedNode::empty();
                    out.accessibility = Some(accessibility);
                    Some(out)
                }
                None if options.verbose => {
                    let mut out = CorrelatedNode::empty();
                    out.host_type = Some(fibers.name(node));
                    Some(out)
                }
                None => None,
            }
        }
        _ => None,
    }
}

fn map_component(
    fibers: &FiberSnapshot,
    node: NodeId,
    id: &ComponentId,
    kind: FiberKind,
    options: &MapOptions,
) -> ComponentDescriptor {
    let heap = &fibers.values;
    let fiber = fibers.node(node);
    let props = fiber.map(|f| props_summary(heap, &f.props, SUMMARY_PROPS));
    let state = fiber
        .filter(|_| options.include_state)
        .map(|f| &f.state)
        .filter(|s| !matches!(s, HeapValue::Undefined | HeapValue::Null))
        .map(|s| serialize(heap, s, &SerializeLimits::new(SUMMARY_DEPTH)));

    ComponentDescriptor {
        id: id.clone(),
        name: fibers.name(node),
        kind,
        key: fiber.and_then(|f| f.key.clone()),
        props: props.filter(|p| p.as_object().is_some_and(|m| !m.is_empty())),
        state,
        source: fiber.and_then(|f| source_location(heap, &f.props)),
        owners: None,
    }
}

/// Up to `max` props, skipping framework-internal keys, `children` and source
/// annotations. Values are serialized one level deep.
pub fn props_summary(heap: &ValueHeap, props: &HeapValue, max: usize) -> Value {
    let mut out = Map::new();
    if let Some(HeapObject::Object { entries, .. }) = heap.deref(props) {
        let shown = entries.iter().filter(|(key, _)| {
            !key.starts_with(RESERVED_KEY_PREFIX) && key != "children" && !is_source_prop(key)
        });
        for (key, value) in shown.take(max) {
            out.insert(
                key.clone(),
                serialize(heap, value, &SerializeLimits::new(SUMMARY_DEPTH)),
            );
        }
    }
    Value::Object(out)
}

/// Build the forest from pre-ordered entries. Children always follow their
/// parent, so walking backwards completes each subtree before its parent.
fn assemble(entries: Vec<Entry>) -> Vec<CorrelatedNode> {
    let mut children: Vec<Vec<CorrelatedNode>> = vec![Vec::new(); entries.len()];
    let mut roots = Vec::new();

    for (index, entry) in entries.into_iter().enumerate().rev() {
        let mut node = entry.node;
        let mut own = std::mem::take(&mut children[index]);
        own.reverse();

        if node.component.is_some() && own.len() == 1 && own[0].is_matched_host() {
            let host = own.remove(0);
            node.accessibility = host.accessibility;
            node.children = host.children;
        } else {
            node.children = own;
        }

        match entry.parent {
            Some(parent) => children[parent].push(node),
            None => roots.push(node),
        }
    }

    roots.reverse();
    roots
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;

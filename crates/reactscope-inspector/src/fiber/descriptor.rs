//! Component descriptors: the synthesized view of one authored node.

use serde::Serialize;
use serde_json::Value;

use reactscope_config::LimitsConfig;

use crate::value::{serialize, HeapValue, SerializeLimits};

use super::ancestry::owner_chain;
use super::graph::{FiberGraph, FiberSnapshot, NodeId};
use super::id::ComponentId;
use super::kind::FiberKind;
use super::source::{source_location, SourceLocation};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnerEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FiberKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentDescriptor {
    pub id: ComponentId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FiberKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<OwnerEntry>>,
}

#[derive(Debug, Clone)]
pub struct DescribeOptions {
    pub include_props: bool,
    pub include_state: bool,
    pub include_owners: bool,
    pub max_owners: usize,
    pub limits: SerializeLimits,
}

impl DescribeOptions {
    pub fn from_limits(limits: &LimitsConfig) -> Self {
        Self {
            include_props: true,
            include_state: true,
            include_owners: true,
            max_owners: limits.max_owners,
            limits: SerializeLimits {
                max_depth: limits.serialize_depth,
                max_properties: limits.max_properties,
                max_array_items: limits.max_array_items,
            },
        }
    }
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self::from_limits(&LimitsConfig::default())
    }
}

/// Describe `node`, known by `id`.
pub fn describe(
    snapshot: &FiberSnapshot,
    node: NodeId,
    id: ComponentId,
    options: &DescribeOptions,
) -> ComponentDescriptor {
    let fiber = snapshot.node(node);
    let heap = &snapshot.values;
    let present = |v: &&HeapValue| !matches!(v, HeapValue::Undefined | HeapValue::Null);

    let props = fiber
        .map(|f| &f.props)
        .filter(|_| options.include_props)
        .filter(present)
        .map(|p| serialize(heap, p, &options.limits));
    let state = fiber
        .map(|f| &f.state)
        .filter(|_| options.include_state)
        .filter(present)
        .map(|s| serialize(heap, s, &options.limits));

    let owners = options.include_owners.then(|| {
        owner_chain(snapshot, node, options.max_owners)
            .into_iter()
            .map(|owner| OwnerEntry {
                name: snapshot.name(owner),
                kind: snapshot.kind(owner),
                source: snapshot
                    .node(owner)
                    .and_then(|n| source_location(heap, &n.props)),
            })
            .collect()
    });

    ComponentDescriptor {
        id,
        name: snapshot.name(node),
        kind: snapshot.kind(node),
        key: fiber.and_then(|f| f.key.clone()),
        props,
        state,
        source: fiber.and_then(|f| source_location(heap, &f.props)),
        owners,
    }
}

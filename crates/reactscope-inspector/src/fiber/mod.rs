//! The authoring tree: kinds, names, ids, walks and upward traversals over an
//! exported fiber graph.

mod ancestry;
mod descriptor;
mod graph;
mod id;
mod kind;
mod naming;
mod source;
mod walker;

#[cfg(test)]
pub(crate) mod test_support;

pub use ancestry::{nearest_authored_ancestor, owner_chain};
pub use descriptor::{describe, ComponentDescriptor, DescribeOptions, OwnerEntry};
pub use graph::{child_list, FiberGraph, FiberNode, FiberSnapshot, NameHints, NodeId, RootEntry};
pub use id::ComponentId;
pub use kind::FiberKind;
pub use naming::{component_name, display_name};
pub use source::{is_source_prop, source_location, SourceLocation};
pub use walker::{id_of, list_components, resolve, ComponentEntry, Listing, WalkOptions};

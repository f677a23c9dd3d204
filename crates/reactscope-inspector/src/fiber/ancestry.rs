//! Bounded upward traversals.

use std::collections::HashSet;

use super::graph::{FiberGraph, NodeId};

/// Nearest authored ancestor of `node`, starting at its parent.
///
/// Performs at most `max_steps` parent traversals; `None` when the step limit runs
/// out or the root is reached first.
pub fn nearest_authored_ancestor<G: FiberGraph + ?Sized>(
    graph: &G,
    node: NodeId,
    max_steps: usize,
) -> Option<NodeId> {
    let mut current = node;
    for _ in 0..max_steps {
        current = graph.parent(current)?;
        if graph.kind(current).is_authored() {
            return Some(current);
        }
    }
    None
}

/// Authored ancestors of `node`, innermost first, at most `max_owners`.
///
/// A node seen twice ends the walk.
pub fn owner_chain<G: FiberGraph + ?Sized>(
    graph: &G,
    node: NodeId,
    max_owners: usize,
) -> Vec<NodeId> {
    let mut owners = Vec::new();
    let mut seen = HashSet::from([node]);
    let mut current = node;

    while owners.len() < max_owners {
        let Some(parent) = graph.parent(current) else {
            break;
        };
        if !seen.insert(parent) {
            break;
        }
        if graph.kind(parent).is_authored() {
            owners.push(parent);
        }
        current = parent;
    }

    owners
}

#[cfg(test)]
#[path = "ancestry_tests.rs"]
mod tests;

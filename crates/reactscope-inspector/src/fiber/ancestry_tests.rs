use std::cell::Cell;

use super::*;
use crate::fiber::graph::FiberSnapshot;
use crate::fiber::kind::FiberKind;
use crate::fiber::test_support::{TreeBuilder, CLASS, FORWARD_REF, FRAGMENT, FUNCTION};

/// Counts parent traversals made through it.
struct Counting<'a> {
    inner: &'a FiberSnapshot,
    parent_calls: Cell<usize>,
}

impl<'a> Counting<'a> {
    fn new(inner: &'a FiberSnapshot) -> Self {
        Self {
            inner,
            parent_calls: Cell::new(0),
        }
    }
}

impl FiberGraph for Counting<'_> {
    fn kind(&self, node: NodeId) -> FiberKind {
        self.inner.kind(node)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parent_calls.set(self.parent_calls.get() + 1);
        self.inner.parent(node)
    }

    fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.inner.first_child(node)
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.inner.next_sibling(node)
    }
}

/// A host leaf under `depth` host/fragment levels with no component above.
fn deep_hosts(depth: usize) -> (FiberSnapshot, NodeId) {
    let mut tree = TreeBuilder::new();
    let mut current = tree.root(1, 0);
    for i in 0..depth {
        current = if i % 2 == 0 {
            tree.host(current, "div", None)
        } else {
            tree.component(current, FRAGMENT, "")
        };
    }
    (tree.build(), current)
}

#[test]
fn test_nearest_finds_first_authored_parent() {
    let mut tree = TreeBuilder::new();
    let root = tree.root(1, 0);
    let app = tree.component(root, FUNCTION, "App");
    let form = tree.component(app, FUNCTION, "LoginForm");
    let div = tree.host(form, "div", None);
    let button = tree.host(div, "button", Some(1));
    let snapshot = tree.build();

    assert_eq!(nearest_authored_ancestor(&snapshot, button, 20), Some(form));
    assert_eq!(nearest_authored_ancestor(&snapshot, form, 20), Some(app));
}

#[test]
fn test_nearest_starts_at_parent() {
    let mut tree = TreeBuilder::new();
    let root = tree.root(1, 0);
    let outer = tree.component(root, FUNCTION, "Outer");
    let inner = tree.component(outer, FUNCTION, "Inner");
    let snapshot = tree.build();

    assert_eq!(nearest_authored_ancestor(&snapshot, inner, 20), Some(outer));
}

#[test]
fn test_nearest_exhausts_exact_step_count() {
    let (snapshot, leaf) = deep_hosts(30);
    let graph = Counting::new(&snapshot);

    assert_eq!(nearest_authored_ancestor(&graph, leaf, 20), None);
    assert_eq!(graph.parent_calls.get(), 20);
}

#[test]
fn test_nearest_stops_at_root() {
    let (snapshot, leaf) = deep_hosts(3);
    let graph = Counting::new(&snapshot);

    assert_eq!(nearest_authored_ancestor(&graph, leaf, 20), None);
    // Three parents up to the root, then one call that finds no parent.
    assert_eq!(graph.parent_calls.get(), 4);
}

#[test]
fn test_nearest_bounded_on_cycle() {
    let mut tree = TreeBuilder::new();
    let root = tree.root(1, 0);
    let a = tree.host(root, "div", None);
    let b = tree.host(a, "div", None);
    tree.node_mut(a).parent = Some(b);
    let snapshot = tree.build();
    let graph = Counting::new(&snapshot);

    assert_eq!(nearest_authored_ancestor(&graph, b, 20), None);
    assert_eq!(graph.parent_calls.get(), 20);
}

#[test]
fn test_owner_chain_innermost_first() {
    let mut tree = TreeBuilder::new();
    let root = tree.root(1, 0);
    let app = tree.component(root, CLASS, "App");
    let layout = tree.component(app, FUNCTION, "Layout");
    let div = tree.host(layout, "div", None);
    let field = tree.component(div, FORWARD_REF, "Field");
    let input = tree.component(field, FUNCTION, "Input");
    let snapshot = tree.build();

    assert_eq!(owner_chain(&snapshot, input, 10), vec![field, layout, app]);
}

#[test]
fn test_owner_chain_respects_max_owners() {
    let mut tree = TreeBuilder::new();
    let root = tree.root(1, 0);
    let a = tree.component(root, FUNCTION, "A");
    let b = tree.component(a, FUNCTION, "B");
    let c = tree.component(b, FUNCTION, "C");
    let d = tree.component(c, FUNCTION, "D");
    let snapshot = tree.build();

    assert_eq!(owner_chain(&snapshot, d, 2), vec![c, b]);
    assert!(owner_chain(&snapshot, d, 0).is_empty());
}

#[test]
fn test_owner_chain_of_top_level_is_empty() {
    let mut tree = TreeBuilder::new();
    let root = tree.root(1, 0);
    let app = tree.component(root, FUNCTION, "App");
    let snapshot = tree.build();

    assert!(owner_chain(&snapshot, app, 10).is_empty());
}

#[test]
fn test_owner_chain_ends_on_cycle() {
    let mut tree = TreeBuilder::new();
    let root = tree.root(1, 0);
    let a = tree.component(root, FUNCTION, "A");
    let b = tree.component(a, FUNCTION, "B");
    let c = tree.component(b, FUNCTION, "C");
    tree.node_mut(a).parent = Some(c);
    let snapshot = tree.build();

    assert_eq!(owner_chain(&snapshot, c, 10), vec![b, a]);
}

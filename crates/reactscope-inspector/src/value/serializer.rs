//! Bounded, cycle-safe conversion of heap values to plain JSON.

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::heap::{HeapObject, HeapValue, ObjectId, ValueHeap};

pub const CIRCULAR_MARKER: &str = "[Circular]";
pub const MAX_DEPTH_MARKER: &str = "[Max Depth]";
pub const ELEMENT_MARKER: &str = "[React Element]";
pub const DOM_NODE_MARKER: &str = "[DOM Node]";

/// Keys with this prefix are framework-internal and never copied.
pub const RESERVED_KEY_PREFIX: &str = "__react";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeLimits {
    pub max_depth: usize,
    pub max_properties: usize,
    pub max_array_items: usize,
}

impl SerializeLimits {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    pub fn with_max_properties(mut self, max: usize) -> Self {
        self.max_properties = max;
        self
    }

    pub fn with_max_array_items(mut self, max: usize) -> Self {
        self.max_array_items = max;
        self
    }
}

impl Default for SerializeLimits {
    fn default() -> Self {
        Self {
            max_depth: 3,
            max_properties: 50,
            max_array_items: 100,
        }
    }
}

/// Serialize `value` to a finite JSON tree.
///
/// Every object is expanded at most once per call: a second encounter, whether
/// through a cycle or a shared reference, yields [`CIRCULAR_MARKER`].
pub fn serialize(heap: &ValueHeap, value: &HeapValue, limits: &SerializeLimits) -> Value {
    let mut serializer = Serializer {
        heap,
        limits,
        seen: HashSet::new(),
    };
    serializer.visit(value, limits.max_depth)
}

struct Serializer<'a> {
    heap: &'a ValueHeap,
    limits: &'a SerializeLimits,
    seen: HashSet<ObjectId>,
}

impl Serializer<'_> {
    fn visit(&mut self, value: &HeapValue, depth: usize) -> Value {
        let id = match value {
            HeapValue::Undefined | HeapValue::Null => return Value::Null,
            HeapValue::Bool(b) => return Value::Bool(*b),
            HeapValue::Number(n) => return Value::Number(n.clone()),
            HeapValue::String(s) => return Value::String(s.clone()),
            HeapValue::Opaque(desc) => return Value::String(desc.clone()),
            HeapValue::Ref(id) => *id,
        };

        if !self.seen.insert(id) {
            return marker(CIRCULAR_MARKER);
        }
        if depth == 0 {
            return marker(MAX_DEPTH_MARKER);
        }

        let heap = self.heap;
        match heap.get(id) {
            Some(HeapObject::Array { items, .. }) => Value::Array(
                items
                    .iter()
                    .take(self.limits.max_array_items)
                    .map(|item| self.visit(item, depth - 1))
                    .collect(),
            ),
            Some(HeapObject::Element { .. }) => marker(ELEMENT_MARKER),
            Some(HeapObject::Dom { .. }) => marker(DOM_NODE_MARKER),
            Some(HeapObject::Function { name }) => Value::String(format!(
                "[Function: {}]",
                name.as_deref().filter(|n| !n.is_empty()).unwrap_or("anonymous")
            )),
            Some(HeapObject::Object { entries, .. }) => {
                let mut out = Map::new();
                for (key, item) in entries {
                    if out.len() >= self.limits.max_properties {
                        break;
                    }
                    if key.starts_with(RESERVED_KEY_PREFIX) {
                        continue;
                    }
                    let v = self.visit(item, depth - 1);
                    out.insert(key.clone(), v);
                }
                Value::Object(out)
            }
            // Not copied by the page, or a dangling id.
            Some(HeapObject::Unexpanded) | None => marker(MAX_DEPTH_MARKER),
        }
    }
}

fn marker(text: &str) -> Value {
    Value::String(text.to_string())
}

#[cfg(test)]
#[path = "serializer_tests.rs"]
mod tests;

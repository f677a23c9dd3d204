//! Live object graphs exported from the page, and their safe serialization.
//!
//! The page flattens props/state into a [`ValueHeap`]: one [`HeapObject`] per
//! distinct JS object, linked by [`ObjectId`]. Object identity is the id, so
//! cycles and shared references survive the export and are detected here.

mod heap;
mod serializer;

pub use heap::{HeapObject, HeapValue, ObjectId, ValueHeap};
pub use serializer::{
    serialize, SerializeLimits, CIRCULAR_MARKER, DOM_NODE_MARKER, ELEMENT_MARKER,
    MAX_DEPTH_MARKER, RESERVED_KEY_PREFIX,
};

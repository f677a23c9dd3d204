//! Identity-indexed value heap.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Identity of one exported JS object within a single export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub usize);

/// A value slot: a primitive, or a reference into the heap.
///
/// Wire form: JSON primitives as-is, `{"$ref": n}`, `{"$undefined": true}`,
/// `{"$opaque": "Symbol(x)"}` for primitives JSON cannot carry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub enum HeapValue {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// Symbol, bigint, NaN, Infinity: carried as their description.
    Opaque(String),
    Ref(ObjectId),
}

impl TryFrom<Value> for HeapValue {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(HeapValue::Null),
            Value::Bool(b) => Ok(HeapValue::Bool(b)),
            Value::Number(n) => Ok(HeapValue::Number(n)),
            Value::String(s) => Ok(HeapValue::String(s)),
            Value::Object(map) => {
                if let Some(r) = map.get("$ref") {
                    let index = r
                        .as_u64()
                        .ok_or_else(|| format!("invalid $ref: {}", r))?;
                    Ok(HeapValue::Ref(ObjectId(index as usize)))
                } else if map.contains_key("$undefined") {
                    Ok(HeapValue::Undefined)
                } else if let Some(Value::String(desc)) = map.get("$opaque") {
                    Ok(HeapValue::Opaque(desc.clone()))
                } else {
                    Err(format!("unexpected inline object: {}", Value::Object(map)))
                }
            }
            Value::Array(_) => Err("arrays must be exported as heap objects".to_string()),
        }
    }
}

impl HeapValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeapValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer view of a number, or of a string holding one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            HeapValue::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            HeapValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// One exported JS object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeapObject {
    /// Plain object, own enumerable entries in insertion order.
    Object {
        entries: Vec<(String, HeapValue)>,
        /// The page stopped copying entries early.
        #[serde(default)]
        truncated: bool,
    },
    Array {
        items: Vec<HeapValue>,
        /// Length of the live array (may exceed `items`).
        length: usize,
    },
    Function {
        #[serde(default)]
        name: Option<String>,
    },
    /// A framework element (`$$typeof` marked).
    Element {
        #[serde(default)]
        type_name: Option<String>,
    },
    /// A platform DOM node.
    Dom {
        #[serde(default)]
        node_name: Option<String>,
    },
    /// Beyond the page's export depth; contents were not copied.
    Unexpanded,
}

impl HeapObject {
    pub fn object<K: Into<String>>(entries: Vec<(K, HeapValue)>) -> Self {
        HeapObject::Object {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            truncated: false,
        }
    }

    pub fn array(items: Vec<HeapValue>) -> Self {
        let length = items.len();
        HeapObject::Array { items, length }
    }

    /// Own entry `key` of a plain object.
    pub fn entry(&self, key: &str) -> Option<&HeapValue> {
        match self {
            HeapObject::Object { entries, .. } => {
                entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
            }
            _ => None,
        }
    }
}

/// All objects of one export, addressed by [`ObjectId`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ValueHeap {
    objects: Vec<HeapObject>,
}

impl ValueHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ObjectId) -> Option<&HeapObject> {
        self.objects.get(id.0)
    }

    /// Resolve a slot to its object, if it is a reference.
    pub fn deref(&self, value: &HeapValue) -> Option<&HeapObject> {
        match value {
            HeapValue::Ref(id) => self.get(*id),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Add an object, returning its identity.
    pub fn alloc(&mut self, object: HeapObject) -> ObjectId {
        self.objects.push(object);
        ObjectId(self.objects.len() - 1)
    }

    /// Overwrite an allocated object. Used to close cycles when building a heap.
    pub fn replace(&mut self, id: ObjectId, object: HeapObject) {
        if let Some(slot) = self.objects.get_mut(id.0) {
            *slot = object;
        }
    }

    /// Copy a JSON tree into the heap. Every JSON object/array becomes a
    /// distinct heap object.
    pub fn import_json(&mut self, value: &Value) -> HeapValue {
        match value {
            Value::Null => HeapValue::Null,
            Value::Bool(b) => HeapValue::Bool(*b),
            Value::Number(n) => HeapValue::Number(n.clone()),
            Value::String(s) => HeapValue::String(s.clone()),
            Value::Array(items) => {
                let items = items.iter().map(|v| self.import_json(v)).collect();
                HeapValue::Ref(self.alloc(HeapObject::array(items)))
            }
            Value::Object(map) => {
                let entries: Vec<(String, HeapValue)> = map
                    .iter()
                    .map(|(k, v)| (k.clone(), self.import_json(v)))
                    .collect();
                HeapValue::Ref(self.alloc(HeapObject::object(entries)))
            }
        }
    }
}

use super::*;
use serde_json::json;

fn import(value: Value) -> (ValueHeap, HeapValue) {
    let mut heap = ValueHeap::new();
    let root = heap.import_json(&value);
    (heap, root)
}

#[test]
fn test_primitives_pass_through() {
    let heap = ValueHeap::new();
    let limits = SerializeLimits::default();
    assert_eq!(serialize(&heap, &HeapValue::Null, &limits), Value::Null);
    assert_eq!(serialize(&heap, &HeapValue::Undefined, &limits), Value::Null);
    assert_eq!(serialize(&heap, &HeapValue::Bool(true), &limits), json!(true));
    assert_eq!(
        serialize(&heap, &HeapValue::String("hi".to_string()), &limits),
        json!("hi")
    );
}

#[test]
fn test_primitives_ignore_depth_zero() {
    let heap = ValueHeap::new();
    let limits = SerializeLimits::new(0);
    assert_eq!(
        serialize(&heap, &HeapValue::Number(5.into()), &limits),
        json!(5)
    );
}

#[test]
fn test_self_cycle_becomes_marker() {
    let mut heap = ValueHeap::new();
    let a = heap.alloc(HeapObject::object::<String>(vec![]));
    heap.replace(a, HeapObject::object(vec![("self", HeapValue::Ref(a))]));

    let out = serialize(&heap, &HeapValue::Ref(a), &SerializeLimits::default());
    assert_eq!(out, json!({"self": "[Circular]"}));
}

#[test]
fn test_shared_reference_reported_as_circular() {
    let mut heap = ValueHeap::new();
    let shared = heap.alloc(HeapObject::object(vec![("n", HeapValue::Number(1.into()))]));
    let root = heap.alloc(HeapObject::object(vec![
        ("a", HeapValue::Ref(shared)),
        ("b", HeapValue::Ref(shared)),
    ]));

    let out = serialize(&heap, &HeapValue::Ref(root), &SerializeLimits::default());
    assert_eq!(out, json!({"a": {"n": 1}, "b": "[Circular]"}));
}

#[test]
fn test_depth_limit() {
    let (heap, root) = import(json!({"a": {"b": {"c": {"d": 1}}}}));
    let out = serialize(&heap, &root, &SerializeLimits::new(2));
    assert_eq!(out, json!({"a": {"b": "[Max Depth]"}}));
}

#[test]
fn test_depth_zero_object() {
    let (heap, root) = import(json!({"a": 1}));
    let out = serialize(&heap, &root, &SerializeLimits::new(0));
    assert_eq!(out, json!("[Max Depth]"));
}

#[test]
fn test_array_truncated() {
    let items: Vec<i64> = (0..150).collect();
    let (heap, root) = import(json!(items));
    let out = serialize(&heap, &root, &SerializeLimits::default());
    let arr = out.as_array().unwrap();
    assert_eq!(arr.len(), 100);
    assert_eq!(arr[0], json!(0));
    assert_eq!(arr[99], json!(99));
}

#[test]
fn test_array_items_limit_applies_at_every_level() {
    let (heap, root) = import(json!({"rows": [[1, 2, 3], [4, 5, 6], [7, 8, 9]]}));
    let limits = SerializeLimits::default().with_max_array_items(2);
    let out = serialize(&heap, &root, &limits);
    assert_eq!(out, json!({"rows": [[1, 2], [4, 5]]}));
}

#[test]
fn test_special_objects() {
    let mut heap = ValueHeap::new();
    let element = heap.alloc(HeapObject::Element {
        type_name: Some("Icon".to_string()),
    });
    let dom = heap.alloc(HeapObject::Dom {
        node_name: Some("DIV".to_string()),
    });
    let named = heap.alloc(HeapObject::Function {
        name: Some("handleClick".to_string()),
    });
    let anon = heap.alloc(HeapObject::Function { name: None });
    let root = heap.alloc(HeapObject::object(vec![
        ("element", HeapValue::Ref(element)),
        ("dom", HeapValue::Ref(dom)),
        ("onClick", HeapValue::Ref(named)),
        ("cb", HeapValue::Ref(anon)),
    ]));

    let out = serialize(&heap, &HeapValue::Ref(root), &SerializeLimits::default());
    assert_eq!(
        out,
        json!({
            "element": "[React Element]",
            "dom": "[DOM Node]",
            "onClick": "[Function: handleClick]",
            "cb": "[Function: anonymous]"
        })
    );
}

#[test]
fn test_reserved_keys_skipped() {
    let (heap, root) = import(json!({"__reactFiber$abc": 1, "__reactProps": 2, "label": "x"}));
    let out = serialize(&heap, &root, &SerializeLimits::default());
    assert_eq!(out, json!({"label": "x"}));
}

#[test]
fn test_max_properties() {
    let mut heap = ValueHeap::new();
    let entries: Vec<(String, HeapValue)> = (0..10)
        .map(|i| (format!("k{}", i), HeapValue::Number(i.into())))
        .collect();
    let root = heap.alloc(HeapObject::object(entries));

    let limits = SerializeLimits::default().with_max_properties(3);
    let out = serialize(&heap, &HeapValue::Ref(root), &limits);
    let map = out.as_object().unwrap();
    assert_eq!(map.len(), 3);
    assert!(map.contains_key("k0"));
    assert!(map.contains_key("k2"));
    assert!(!map.contains_key("k3"));
}

#[test]
fn test_unexpanded_and_dangling_are_max_depth() {
    let mut heap = ValueHeap::new();
    let deep = heap.alloc(HeapObject::Unexpanded);
    let root = heap.alloc(HeapObject::object(vec![
        ("deep", HeapValue::Ref(deep)),
        ("gone", HeapValue::Ref(ObjectId(99))),
    ]));
    let out = serialize(&heap, &HeapValue::Ref(root), &SerializeLimits::default());
    assert_eq!(out, json!({"deep": "[Max Depth]", "gone": "[Max Depth]"}));
}

#[test]
fn test_opaque_keeps_description() {
    let heap = ValueHeap::new();
    let out = serialize(
        &heap,
        &HeapValue::Opaque("Symbol(id)".to_string()),
        &SerializeLimits::default(),
    );
    assert_eq!(out, json!("Symbol(id)"));
}

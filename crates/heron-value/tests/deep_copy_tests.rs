//! Deep copy behavior tests
//!
//! Covers structure preservation, cycles, shared references, atomic
//! pass-through and cache isolation between top-level calls.

use chrono::Utc;
use heron_value::{
    CloneStats, DeepCopier, GcRef, JsArray, JsFunction, JsObject, Value, ValueKind, deep_copy,
    structurally_equal,
};
use serde_json::json;

/// Break cycles so reference-counted graphs are released
fn release(values: &[&Value]) {
    for value in values {
        match value {
            Value::Object(obj) => obj.clear(),
            Value::Array(arr) => arr.clear(),
            _ => {}
        }
    }
}

/// Walk both graphs in lockstep and assert no container is shared
fn assert_no_shared_containers(original: &Value, copy: &Value) {
    match (original, copy) {
        (Value::Object(a), Value::Object(b)) => {
            assert!(!GcRef::ptr_eq(a, b), "mapping shared with copy");
            for (key, child) in a.entries() {
                let copied = b.get(&key).expect("key missing from copy");
                assert_no_shared_containers(&child, &copied);
            }
        }
        (Value::Array(a), Value::Array(b)) => {
            assert!(!GcRef::ptr_eq(a, b), "sequence shared with copy");
            for (child, copied) in a.elements().iter().zip(b.elements().iter()) {
                assert_no_shared_containers(child, copied);
            }
        }
        _ => assert!(original.strict_equals(copy) || structurally_equal(original, copy)),
    }
}

#[test]
fn test_structure_preserved_without_sharing() {
    let original = Value::from(json!({
        "name": "heron",
        "tags": ["a", "b"],
        "nested": {"deep": {"deeper": [1, 2, {"x": null}]}},
        "empty_obj": {},
        "empty_arr": []
    }));

    let copy = deep_copy(&original);

    assert!(structurally_equal(&original, &copy));
    assert_no_shared_containers(&original, &copy);
}

#[test]
fn test_self_cycle() {
    let a = GcRef::new(JsObject::new());
    a.set("self", Value::object(a.clone()));
    let original = Value::object(a);

    let copy = deep_copy(&original);
    let copy_self = copy.as_object().unwrap().get("self").unwrap();

    assert!(copy_self.strict_equals(&copy));
    assert!(!copy_self.strict_equals(&original));

    release(&[&original, &copy]);
}

#[test]
fn test_mutual_cycle_through_array() {
    // obj.items = [obj, {back: obj}]
    let obj = GcRef::new(JsObject::new());
    let back = GcRef::new(JsObject::new());
    back.set("back", Value::object(obj.clone()));
    let items = Value::new_array(vec![Value::object(obj.clone()), Value::object(back)]);
    obj.set("items", items.clone());
    let original = Value::object(obj);

    let copy = deep_copy(&original);
    let copy_items = copy.as_object().unwrap().get("items").unwrap();
    let copy_arr = copy_items.as_array().unwrap();

    assert!(copy_arr.get(0).unwrap().strict_equals(&copy));
    let copy_back = copy_arr.get(1).unwrap();
    assert!(
        copy_back
            .as_object()
            .unwrap()
            .get("back")
            .unwrap()
            .strict_equals(&copy)
    );
    assert!(structurally_equal(&original, &copy));

    release(&[&original, &copy, &items, &copy_items]);
}

#[test]
fn test_shared_reference_preserved_within_call() {
    let shared = Value::from(json!({"x": 1}));
    let obj = JsObject::new();
    obj.set("a", shared.clone());
    obj.set("b", shared.clone());
    let original = Value::object(GcRef::new(obj));

    let copy = deep_copy(&original);
    let copy_obj = copy.as_object().unwrap();
    let a = copy_obj.get("a").unwrap();
    let b = copy_obj.get("b").unwrap();

    assert!(a.strict_equals(&b));
    assert!(!a.strict_equals(&shared));
}

#[test]
fn test_separate_calls_produce_separate_clones() {
    let shared = Value::from(json!({"x": 1}));
    let obj = JsObject::new();
    obj.set("a", shared.clone());
    obj.set("b", shared);
    let original = Value::object(GcRef::new(obj));

    let first = deep_copy(&original);
    let second = deep_copy(&original);

    let first_a = first.as_object().unwrap().get("a").unwrap();
    let second_b = second.as_object().unwrap().get("b").unwrap();
    assert!(!first_a.strict_equals(&second_b));
    assert!(!first.strict_equals(&second));
}

#[test]
fn test_atomic_pass_through() {
    assert_eq!(deep_copy(&Value::from(42)).as_number(), Some(42.0));
    assert!(deep_copy(&Value::Null).is_null());
    assert!(deep_copy(&Value::Undefined).is_undefined());
    assert_eq!(deep_copy(&Value::from("s")).as_str(), Some("s"));
    assert_eq!(deep_copy(&Value::from(false)).as_boolean(), Some(false));

    let func = Value::function(GcRef::new(JsFunction::new("noop", |_: &[Value]| {
        Value::Undefined
    })));
    let date = Value::date(Utc::now());
    let re = Value::regex("^h", "i");

    assert!(deep_copy(&func).strict_equals(&func));
    assert!(deep_copy(&date).strict_equals(&date));
    assert!(deep_copy(&re).strict_equals(&re));

    // Nested atomics are shared too
    let holder = Value::new_array(vec![func.clone(), date.clone()]);
    let copy = deep_copy(&holder);
    let arr = copy.as_array().unwrap();
    assert!(arr.get(0).unwrap().strict_equals(&func));
    assert!(arr.get(1).unwrap().strict_equals(&date));
}

#[test]
fn test_array_and_mapping_shapes() {
    let original = Value::from(json!([1, {"a": 2}, [3]]));
    let copy = deep_copy(&original);

    assert_eq!(copy.kind(), ValueKind::Sequence);
    let arr = copy.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr.get(0).unwrap().as_number(), Some(1.0));

    let mapping = arr.get(1).unwrap();
    assert_eq!(mapping.kind(), ValueKind::Mapping);
    assert_eq!(
        mapping.as_object().unwrap().get("a").unwrap().as_number(),
        Some(2.0)
    );

    let inner = arr.get(2).unwrap();
    assert_eq!(inner.kind(), ValueKind::Sequence);
    assert_eq!(inner.as_array().unwrap().get(0).unwrap().as_number(), Some(3.0));

    assert_no_shared_containers(&original, &copy);
}

#[test]
fn test_array_like_mapping_stays_mapping() {
    let original = Value::from(json!({"0": "a", "1": "b", "length": 2}));
    let copy = deep_copy(&original);

    assert_eq!(copy.kind(), ValueKind::Mapping);
    let keys: Vec<String> = copy
        .as_object()
        .unwrap()
        .own_keys()
        .iter()
        .map(|k| k.to_string())
        .collect();
    assert_eq!(keys.len(), 3);
    assert!(keys.contains(&"length".to_string()));
}

#[test]
fn test_empty_containers_keep_kind() {
    let empty_arr = deep_copy(&Value::new_array(vec![]));
    let empty_obj = deep_copy(&Value::new_object());

    assert_eq!(empty_arr.kind(), ValueKind::Sequence);
    assert!(empty_arr.as_array().unwrap().is_empty());
    assert_eq!(empty_obj.kind(), ValueKind::Mapping);
    assert!(empty_obj.as_object().unwrap().is_empty());
}

#[test]
fn test_mutation_isolation() {
    let original = Value::from(json!({"outer": {"inner": [1, 2]}}));
    let copy = deep_copy(&original);

    // Mutate the copy
    let copy_outer = copy.as_object().unwrap().get("outer").unwrap();
    copy_outer
        .as_object()
        .unwrap()
        .set("inner", Value::from("changed"));

    let orig_outer = original.as_object().unwrap().get("outer").unwrap();
    assert!(orig_outer.as_object().unwrap().get("inner").unwrap().is_array());

    // Mutate the original
    let orig_inner = orig_outer.as_object().unwrap().get("inner").unwrap();
    orig_inner.as_array().unwrap().push(Value::from(3));
    assert_eq!(orig_inner.as_array().unwrap().len(), 3);
    assert_eq!(
        copy_outer.as_object().unwrap().get("inner").unwrap().as_str(),
        Some("changed")
    );
}

#[test]
fn test_independent_caches_across_calls() {
    // x and y hold the same inner container. A leaked cache would hand y's
    // copy the clone made for x.
    let inner = Value::from(json!({"v": 1}));
    let x = Value::new_array(vec![inner.clone()]);
    let y = Value::new_array(vec![inner.clone()]);

    let copy_x = deep_copy(&x);
    // Mutate the inner original between calls; y's copy must reflect it
    inner.as_object().unwrap().set("v", Value::from(2));
    let copy_y = deep_copy(&y);

    let from_x = copy_x.as_array().unwrap().get(0).unwrap();
    let from_y = copy_y.as_array().unwrap().get(0).unwrap();
    assert!(!from_x.strict_equals(&from_y));
    assert_eq!(from_x.as_object().unwrap().get("v").unwrap().as_number(), Some(1.0));
    assert_eq!(from_y.as_object().unwrap().get("v").unwrap().as_number(), Some(2.0));
}

#[test]
fn test_reused_copier_shares_identity() {
    let inner = Value::from(json!({"v": 1}));
    let x = Value::new_array(vec![inner.clone()]);
    let y = Value::new_array(vec![inner.clone()]);

    let mut copier = DeepCopier::new();
    let copy_x = copier.copy(&x).unwrap();
    let copy_y = copier.copy(&y).unwrap();

    let from_x = copy_x.as_array().unwrap().get(0).unwrap();
    let from_y = copy_y.as_array().unwrap().get(0).unwrap();
    assert!(from_x.strict_equals(&from_y));
    assert_eq!(
        copier.stats(),
        CloneStats {
            containers_copied: 3,
            cache_hits: 1,
            atomics_passed: 1,
        }
    );
    assert_eq!(copier.cache().len(), 3);
}

#[test]
fn test_deep_chain_terminates() {
    let root = GcRef::new(JsArray::new());
    let mut tail = root.clone();
    for _ in 0..500 {
        let next = GcRef::new(JsArray::new());
        tail.push(Value::array(next.clone()));
        tail = next;
    }
    // Close the loop back to the root
    tail.push(Value::array(root.clone()));
    let original = Value::array(root);

    let mut copier = DeepCopier::new();
    let copy = copier.copy(&original).unwrap();
    assert_eq!(copier.stats().containers_copied, 501);
    assert_eq!(copier.stats().cache_hits, 1);
    assert!(structurally_equal(&original, &copy));

    release(&[&original, &copy]);
}

#[test]
fn test_value_method_matches_function() {
    let original = Value::from(json!({"k": [true]}));
    let copy = original.deep_copy();
    assert!(structurally_equal(&original, &copy));
    assert!(!copy.strict_equals(&original));
}

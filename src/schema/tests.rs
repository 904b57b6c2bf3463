use super::*;
use crate::infer::ScalarType::{self, Bool, Float64, Null, String as Str};
use std::sync::Arc;

fn header(names: &[&str]) -> Header {
    Header::new(names.iter().copied()).unwrap()
}

#[test]
fn test_header_rejects_duplicates() {
    let err = Header::new(["a", "b", "a"]).unwrap_err();
    assert!(matches!(err, SchemaError::DuplicateColumn(ref name) if name == "a"));
}

#[test]
fn test_header_keeps_order() {
    let h = header(&["z", "a", "m"]);
    assert_eq!(h.len(), 3);
    assert_eq!(h.names(), &["z", "a", "m"]);
}

#[test]
fn test_type_ids_start_at_zero_and_increase() {
    let mut table = TypeTable::new();
    assert!(table.is_empty());

    let first = table.lookup_or_insert(&[Float64, Float64, Str]).unwrap();
    let second = table.lookup_or_insert(&[Float64, Null, Str]).unwrap();
    let third = table.lookup_or_insert(&[Bool, Null, Str]).unwrap();

    assert_eq!(first, TypeId(0));
    assert_eq!(second, TypeId(1));
    assert_eq!(third, TypeId(2));
    assert_eq!(table.len(), 3);
}

#[test]
fn test_repeated_signature_reuses_id() {
    let mut table = TypeTable::new();
    let a: [ScalarType; 2] = [Float64, Str];
    let b: [ScalarType; 2] = [Str, Float64];

    let id_a = table.lookup_or_insert(&a).unwrap();
    let id_b = table.lookup_or_insert(&b).unwrap();
    assert_eq!(table.lookup_or_insert(&a).unwrap(), id_a);
    assert_eq!(table.lookup_or_insert(&a).unwrap(), id_a);
    assert_eq!(table.lookup_or_insert(&b).unwrap(), id_b);
    assert_eq!(table.lookup_or_insert(&a).unwrap(), id_a);

    assert_eq!(table.len(), 2);
    assert_eq!(table.get(&b), Some(id_b));
    assert_eq!(table.signature(id_a).unwrap().types(), &a);
}

#[test]
fn test_registry_builds_once() {
    let h = header(&["a", "b"]);
    let mut registry = SchemaRegistry::new();
    let sig = [Float64, Str];

    assert!(!registry.contains(TypeId(0)));
    let first = registry.resolve(TypeId(0), &h, &sig).unwrap();
    let again = registry.resolve(TypeId(0), &h, &sig).unwrap();

    assert!(Arc::ptr_eq(&first, &again));
    assert!(registry.contains(TypeId(0)));
    assert_eq!(registry.len(), 1);

    assert_eq!(first.id(), TypeId(0));
    assert_eq!(first.columns()[0].name, "a");
    assert_eq!(first.columns()[0].ty, Float64);
    assert_eq!(first.columns()[1].name, "b");
    assert_eq!(first.columns()[1].ty, Str);
}

#[test]
fn test_registry_rejects_length_mismatch() {
    let h = header(&["a", "b", "c"]);
    let mut registry = SchemaRegistry::new();

    let err = registry.resolve(TypeId(0), &h, &[Float64]).unwrap_err();
    assert!(matches!(
        err,
        SchemaError::LengthMismatch {
            header: 3,
            signature: 1
        }
    ));
    assert!(registry.is_empty());
}

#[test]
fn test_record_type_serializes_with_type_names() {
    let h = header(&["flag", "note"]);
    let rt = RecordType::new(TypeId(4), &h, &[Bool, Null]).unwrap();
    let json = serde_json::to_string(&rt).unwrap();
    assert_eq!(
        json,
        r#"{"id":4,"columns":[{"name":"flag","type":"bool"},{"name":"note","type":"null"}]}"#
    );
}

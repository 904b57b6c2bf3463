use super::*;
use crate::infer::{parse_field, ParseMode, ScalarType, ScalarValue};
use crate::schema::{Header, RecordType, TypeId};
use proptest::prelude::*;

fn record_type(names: &[&str], types: &[ScalarType]) -> RecordType {
    let header = Header::new(names.iter().copied()).unwrap();
    RecordType::new(TypeId(0), &header, types).unwrap()
}

#[test]
fn test_float_is_little_endian() {
    let rt = record_type(&["x"], &[ScalarType::Float64]);
    let mut builder = RecordBuilder::new();
    let bytes = builder.encode(&[ScalarValue::Float64(2.5)], &rt).unwrap();
    assert_eq!(bytes, 2.5f64.to_le_bytes());
}

#[test]
fn test_field_layout() {
    let rt = record_type(
        &["a", "b", "c", "d"],
        &[
            ScalarType::Bool,
            ScalarType::String,
            ScalarType::Null,
            ScalarType::Bool,
        ],
    );
    let values = [
        ScalarValue::Bool(true),
        ScalarValue::String("hi".to_string()),
        ScalarValue::Null,
        ScalarValue::Bool(false),
    ];

    let mut builder = RecordBuilder::new();
    let bytes = builder.encode(&values, &rt).unwrap();
    assert_eq!(bytes, &[1, 2, 0, 0, 0, b'h', b'i', 0]);
}

#[test]
fn test_null_and_empty_string_differ() {
    let null_rt = record_type(&["v"], &[ScalarType::Null]);
    let empty_rt = record_type(&["v"], &[ScalarType::String]);
    let mut builder = RecordBuilder::new();

    let null_bytes = builder.encode(&[ScalarValue::Null], &null_rt).unwrap().to_vec();
    let empty_bytes = builder
        .encode(&[ScalarValue::String(String::new())], &empty_rt)
        .unwrap()
        .to_vec();

    assert!(null_bytes.is_empty());
    assert_eq!(empty_bytes, vec![0, 0, 0, 0]);

    assert_eq!(decode_record(&null_bytes, &null_rt).unwrap(), vec![ScalarValue::Null]);
    assert_eq!(
        decode_record(&empty_bytes, &empty_rt).unwrap(),
        vec![ScalarValue::String(String::new())]
    );
}

#[test]
fn test_type_mismatch_is_rejected() {
    let rt = record_type(&["a", "b"], &[ScalarType::Float64, ScalarType::Float64]);
    let mut builder = RecordBuilder::new();
    let err = builder
        .encode(&[ScalarValue::Float64(1.0), ScalarValue::Null], &rt)
        .unwrap_err();

    match err {
        EncodingError::TypeMismatch {
            column,
            name,
            expected,
            found,
        } => {
            assert_eq!(column, 1);
            assert_eq!(name, "b");
            assert_eq!(expected, ScalarType::Float64);
            assert_eq!(found, ScalarType::Null);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_arity_mismatch_is_rejected() {
    let rt = record_type(&["a", "b"], &[ScalarType::Null, ScalarType::Null]);
    let mut builder = RecordBuilder::new();
    let err = builder.encode(&[ScalarValue::Null], &rt).unwrap_err();
    assert!(matches!(
        err,
        EncodingError::ArityMismatch {
            expected: 2,
            found: 1
        }
    ));
}

#[test]
fn test_scratch_buffer_is_reused() {
    let rt = record_type(&["s"], &[ScalarType::String]);
    let mut builder = RecordBuilder::with_capacity(64);
    let capacity = builder.capacity();

    for word in ["one", "two", "three"] {
        let bytes = builder
            .encode(&[ScalarValue::String(word.to_string())], &rt)
            .unwrap();
        assert_eq!(bytes.len(), 4 + word.len());
    }
    assert_eq!(builder.capacity(), capacity);
}

#[test]
fn test_descriptor_roundtrip() {
    let rt = record_type(
        &["id", "name", "ok", "gap"],
        &[
            ScalarType::Float64,
            ScalarType::String,
            ScalarType::Bool,
            ScalarType::Null,
        ],
    );
    let mut builder = RecordBuilder::new();
    let bytes = builder.encode_descriptor(&rt).unwrap().to_vec();

    assert_eq!(&bytes[..4], &4u32.to_le_bytes());
    assert_eq!(decode_descriptor(TypeId(0), &bytes).unwrap(), rt);
}

#[test]
fn test_decode_rejects_bad_payloads() {
    let rt = record_type(&["b"], &[ScalarType::Bool]);
    assert!(matches!(
        decode_record(&[2], &rt),
        Err(EncodingError::InvalidBool(2))
    ));
    assert!(matches!(
        decode_record(&[], &rt),
        Err(EncodingError::UnexpectedEof)
    ));
    assert!(matches!(
        decode_record(&[1, 9], &rt),
        Err(EncodingError::TrailingBytes(1))
    ));

    let s = record_type(&["s"], &[ScalarType::String]);
    assert!(matches!(
        decode_record(&[200, 0, 0, 0, b'x'], &s),
        Err(EncodingError::UnexpectedEof)
    ));

    let bad_code = [1, 0, 0, 0, 1, 0, 0, 0, b'x', 9];
    assert!(matches!(
        decode_descriptor(TypeId(0), &bad_code),
        Err(EncodingError::InvalidTypeCode(9))
    ));
}

proptest! {
    #[test]
    fn prop_record_roundtrip(fields in prop::collection::vec(".{0,12}", 1..8)) {
        let values: Vec<ScalarValue> = fields
            .iter()
            .map(|f| parse_field(f, ParseMode::Infer))
            .collect();
        let types: Vec<ScalarType> = values.iter().map(ScalarValue::scalar_type).collect();
        let names: Vec<String> = (0..values.len()).map(|i| format!("c{i}")).collect();
        let header = Header::new(names).unwrap();
        let rt = RecordType::new(TypeId(0), &header, &types).unwrap();

        let mut builder = RecordBuilder::new();
        let bytes = builder.encode(&values, &rt).unwrap().to_vec();
        let decoded = decode_record(&bytes, &rt).unwrap();

        prop_assert_eq!(decoded.len(), values.len());
        for (original, back) in values.iter().zip(&decoded) {
            prop_assert!(original.same_as(back));
        }
    }
}

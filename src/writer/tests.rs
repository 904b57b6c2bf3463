use super::*;
use crate::infer::{ScalarType, ScalarValue};
use crate::schema::{Header, RecordType, TypeId};

fn record_type(id: u32) -> RecordType {
    let header = Header::new(["a", "b"]).unwrap();
    RecordType::new(TypeId(id), &header, &[ScalarType::Float64, ScalarType::String]).unwrap()
}

fn values() -> Vec<ScalarValue> {
    vec![ScalarValue::Float64(1.5), ScalarValue::String("x".to_string())]
}

#[test]
fn test_binary_stream_layout() -> Result<(), WriterError> {
    let rt = record_type(0);
    let mut writer = BinaryWriter::new(Vec::new(), WriterConfig::default())?;
    writer.write_descriptor(&rt)?;
    writer.write_record(&rt, &values())?;
    let stats = writer.finish()?;
    let bytes = writer.into_inner()?;

    assert_eq!(&bytes[..4], &STREAM_MAGIC);

    // Descriptor unit header
    assert_eq!(bytes[4], UNIT_DESCRIPTOR);
    assert_eq!(&bytes[5..9], &0u32.to_le_bytes());
    let desc_len = u32::from_le_bytes([bytes[9], bytes[10], bytes[11], bytes[12]]) as usize;

    // Record unit follows the descriptor payload
    let rec = 13 + desc_len;
    assert_eq!(bytes[rec], UNIT_RECORD);
    assert_eq!(&bytes[rec + 1..rec + 5], &0u32.to_le_bytes());
    assert_eq!(&bytes[rec + 5..rec + 9], &13u32.to_le_bytes());
    assert_eq!(&bytes[rec + 9..rec + 17], &1.5f64.to_le_bytes());
    assert_eq!(&bytes[rec + 17..], &[1, 0, 0, 0, b'x']);

    assert_eq!(stats.descriptors_written, 1);
    assert_eq!(stats.records_written, 1);
    assert_eq!(stats.bytes_written, bytes.len() as u64);
    Ok(())
}

#[test]
fn test_record_before_descriptor_is_rejected() {
    let rt = record_type(3);
    let mut writer = BinaryWriter::new(Vec::new(), WriterConfig::default()).unwrap();
    let err = writer.write_record(&rt, &values()).unwrap_err();
    assert!(matches!(err, WriterError::UndeclaredType(TypeId(3))));
}

#[test]
fn test_mismatched_values_surface_encoding_error() {
    let rt = record_type(0);
    let mut writer = BinaryWriter::new(Vec::new(), WriterConfig::default()).unwrap();
    writer.write_descriptor(&rt).unwrap();

    let err = writer
        .write_record(&rt, &[ScalarValue::Null, ScalarValue::Null])
        .unwrap_err();
    assert!(matches!(err, WriterError::EncodingError(_)));
}

#[test]
fn test_write_after_finish_fails() {
    let rt = record_type(0);
    let mut writer = BinaryWriter::new(Vec::new(), WriterConfig::default()).unwrap();
    writer.finish().unwrap();
    assert!(matches!(
        writer.write_descriptor(&rt),
        Err(WriterError::Finished)
    ));
}

#[test]
fn test_interactive_config_flushes_each_unit() {
    let rt = record_type(0);
    let mut out = Vec::new();
    {
        let mut writer = BinaryWriter::new(&mut out, WriterConfig::interactive()).unwrap();
        writer.write_descriptor(&rt).unwrap();
        writer.write_record(&rt, &values()).unwrap();
        assert_eq!(writer.stats().records_written, 1);
        // Dropped without finish(): everything must already be flushed
        std::mem::forget(writer);
    }
    assert!(out.len() > STREAM_MAGIC.len());
}

#[test]
fn test_json_lines() -> Result<(), WriterError> {
    let rt = record_type(0);
    let mut writer = JsonLinesWriter::new(Vec::new(), WriterConfig::json());
    writer.write_descriptor(&rt)?;
    writer.write_record(&rt, &values())?;
    writer.write_record(
        &rt,
        &[ScalarValue::Float64(f64::NAN), ScalarValue::String(String::new())],
    )?;
    let stats = writer.finish()?;
    let text = String::from_utf8(writer.into_inner()?).unwrap();

    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines[0], serde_json::json!({"a": 1.5, "b": "x"}));
    assert_eq!(lines[1], serde_json::json!({"a": "NaN", "b": ""}));

    assert_eq!(stats.descriptors_written, 1);
    assert_eq!(stats.records_written, 2);
    assert_eq!(stats.bytes_written, text.len() as u64);
    Ok(())
}

#[test]
fn test_to_json_null_and_bool() {
    assert_eq!(to_json(&ScalarValue::Null), serde_json::Value::Null);
    assert_eq!(to_json(&ScalarValue::Bool(true)), serde_json::Value::Bool(true));
}

#[test]
fn test_json_number_rendering() {
    let render = |v: f64| serde_json::to_string(&to_json(&ScalarValue::Float64(v))).unwrap();

    assert_eq!(render(1.0), "1");
    assert_eq!(render(-300.0), "-300");
    assert_eq!(render(0.0), "0");
    assert_eq!(render(2.5), "2.5");
    assert_eq!(render(-0.0), "-0.0");
    assert_eq!(render(9_007_199_254_740_991.0), "9007199254740991");
    assert_eq!(render(f64::MAX), "1.7976931348623157e308");
    assert_eq!(render(-f64::MAX), "-1.7976931348623157e308");
}

#[test]
fn test_stats_display() {
    let stats = WriterStats {
        descriptors_written: 2,
        records_written: 10,
        bytes_written: 321,
    };
    assert_eq!(
        stats.to_string(),
        "Wrote 10 records using 2 record types (321 bytes)"
    );
}

use std::io::{BufWriter, Write};

use serde_json::{Map, Value};

use super::{RecordSink, WriterConfig, WriterError, WriterStats};
use crate::infer::ScalarValue;
use crate::schema::RecordType;

/// Writer emitting one JSON object per record.
///
/// Keys are column names. JSON has no NaN, so NaN floats are written as the
/// string `"NaN"`. Descriptors are counted but produce no output.
pub struct JsonLinesWriter<W: Write> {
    out: BufWriter<W>,
    config: WriterConfig,
    stats: WriterStats,
    finished: bool,
}

impl<W: Write> JsonLinesWriter<W> {
    /// Create a JSON lines writer
    pub fn new(writer: W, config: WriterConfig) -> Self {
        Self {
            out: BufWriter::with_capacity(config.buffer_capacity, writer),
            config,
            stats: WriterStats::default(),
            finished: false,
        }
    }

    /// Finish output and return the underlying writer
    pub fn into_inner(mut self) -> Result<W, WriterError> {
        if !self.finished {
            self.finish()?;
        }
        self.out
            .into_inner()
            .map_err(|e| WriterError::IoError(e.into_error()))
    }
}

/// JSON rendering of a single value
pub fn to_json(value: &ScalarValue) -> Value {
    match value {
        ScalarValue::Float64(v) if v.is_nan() => Value::String("NaN".to_string()),
        ScalarValue::Float64(v) => float_to_json(*v),
        ScalarValue::Bool(b) => Value::Bool(*b),
        ScalarValue::String(s) => Value::String(s.clone()),
        ScalarValue::Null => Value::Null,
    }
}

/// Largest magnitude at which every integral f64 is exact
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

// Integral values are written as `1` rather than `1.0`; negative zero keeps
// its sign through the float path.
fn float_to_json(v: f64) -> Value {
    if v.fract() == 0.0 && v.abs() < MAX_EXACT_INTEGER && !(v == 0.0 && v.is_sign_negative()) {
        return Value::Number((v as i64).into());
    }
    serde_json::Number::from_f64(v)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// JSON object for a record, keyed by column name
pub fn record_to_json(record_type: &RecordType, values: &[ScalarValue]) -> Value {
    let object: Map<String, Value> = record_type
        .columns()
        .iter()
        .zip(values)
        .map(|(col, value)| (col.name.clone(), to_json(value)))
        .collect();
    Value::Object(object)
}

impl<W: Write> RecordSink for JsonLinesWriter<W> {
    fn write_descriptor(&mut self, _record_type: &RecordType) -> Result<(), WriterError> {
        if self.finished {
            return Err(WriterError::Finished);
        }
        self.stats.descriptors_written += 1;
        Ok(())
    }

    fn write_record(
        &mut self,
        record_type: &RecordType,
        values: &[ScalarValue],
    ) -> Result<(), WriterError> {
        if self.finished {
            return Err(WriterError::Finished);
        }

        let line = serde_json::to_vec(&record_to_json(record_type, values))?;
        self.out.write_all(&line)?;
        self.out.write_all(b"\n")?;

        self.stats.records_written += 1;
        self.stats.bytes_written += line.len() as u64 + 1;
        if self.config.flush_each_record {
            self.out.flush()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<WriterStats, WriterError> {
        if self.finished {
            return Err(WriterError::Finished);
        }
        self.out.flush()?;
        self.finished = true;
        Ok(self.stats.clone())
    }
}

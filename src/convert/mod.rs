//! # Conversion Session
//!
//! A [`Converter`] holds all state of one conversion run: the header, the
//! [`TypeTable`], the [`SchemaRegistry`] and the output sink. Nothing outlives
//! the run.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized --first row--> Ready --data rows--> Ready
//!       |                        |
//!       +---- finish / error ----+--> Closed
//! ```
//!
//! The first row fixes the header. Every later row is parsed, its signature
//! interned, and, if the signature is new, its descriptor written before the
//! record itself. Any error closes the session; there is no skip-and-continue.
//!
//! ## Line Numbers
//!
//! Lines count input records, 1-based and **including the header**, so the
//! first data row is line 2. Blank lines are skipped and not counted, and a
//! quoted field spanning several physical lines is still one record.
//!
//! ## Example
//!
//! ```rust
//! use cz::convert::{ConversionConfig, Converter, RowOutcome};
//! use cz::writer::{JsonLinesWriter, WriterConfig};
//!
//! let mut out = Vec::new();
//! let sink = JsonLinesWriter::new(&mut out, WriterConfig::json());
//! let mut converter = Converter::new(sink, &ConversionConfig::default());
//!
//! converter.push_row(["a", "b"])?;
//! let outcome = converter.push_row(["1", "yes"])?;
//! assert!(matches!(outcome, RowOutcome::Record { new_type: true, .. }));
//! converter.finish()?;
//! drop(converter);
//!
//! assert_eq!(String::from_utf8(out)?, "{\"a\":1,\"b\":\"yes\"}\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod error;
mod stats;


pub use config::ConversionConfig;
pub use error::{ConvertError, ErrorKind};
pub use stats::ConversionStats;

use std::io::{Read, Write};

use log::{debug, warn};

use crate::infer::{parse_field, ParseMode, ScalarType, ScalarValue};
use crate::schema::{Header, SchemaRegistry, TypeId, TypeTable};
use crate::writer::{BinaryWriter, JsonLinesWriter, OutputFormat, RecordSink};

/// Result of pushing one row into a [`Converter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// The row was taken as the header
    Header,
    /// The row was written as a record
    Record {
        /// Record type of the row
        type_id: TypeId,
        /// True if this row introduced the record type
        new_type: bool,
    },
}

enum State {
    Uninitialized,
    Ready(Header),
    Closed,
}

/// Per-run conversion session
pub struct Converter<S: RecordSink> {
    sink: S,
    parse_mode: ParseMode,
    delimiter: u8,
    state: State,
    types: TypeTable,
    registry: SchemaRegistry,
    values: Vec<ScalarValue>,
    signature: Vec<ScalarType>,
    lines: u64,
    records: u64,
}

impl<S: RecordSink> Converter<S> {
    /// Start a run writing to `sink`
    pub fn new(sink: S, config: &ConversionConfig) -> Self {
        Self {
            sink,
            parse_mode: config.parse_mode,
            delimiter: config.delimiter,
            state: State::Uninitialized,
            types: TypeTable::new(),
            registry: SchemaRegistry::new(),
            values: Vec::new(),
            signature: Vec::new(),
            lines: 0,
            records: 0,
        }
    }

    /// Header of the run, once the first row has been pushed
    pub fn header(&self) -> Option<&Header> {
        match &self.state {
            State::Ready(header) => Some(header),
            _ => None,
        }
    }

    /// Number of distinct record types seen so far
    pub fn record_type_count(&self) -> usize {
        self.types.len()
    }

    /// Returns true once the run has finished or failed
    pub fn is_closed(&self) -> bool {
        matches!(self.state, State::Closed)
    }

    /// The output sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the converter and return its sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Push one input row.
    ///
    /// The first row becomes the header. Errors carry the row's line number
    /// and close the session.
    pub fn push_row<I, T>(&mut self, fields: I) -> Result<RowOutcome, ConvertError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        if self.is_closed() {
            return Err(ConvertError::Closed);
        }

        self.lines += 1;
        let line = self.lines;
        self.process_row(fields).map_err(|e| {
            self.abort();
            e.at_line(line)
        })
    }

    /// Convert every row of delimited `input`, then finish the run
    pub fn convert_reader<R: Read>(mut self, input: R) -> Result<ConversionStats, ConvertError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(input);

        let mut record = csv::StringRecord::new();
        loop {
            match reader.read_record(&mut record) {
                Ok(true) => {
                    self.push_row(record.iter())?;
                }
                Ok(false) => break,
                Err(e) => {
                    self.abort();
                    return Err(csv_error(e).at_line(self.lines + 1));
                }
            }
        }

        self.finish()
    }

    /// End the run and finalize the sink
    pub fn finish(&mut self) -> Result<ConversionStats, ConvertError> {
        if self.is_closed() {
            return Err(ConvertError::Closed);
        }
        self.state = State::Closed;

        let writer = self.sink.finish()?;
        Ok(ConversionStats {
            lines_read: self.lines,
            records_converted: self.records,
            record_types: self.types.len(),
            writer,
        })
    }

    fn process_row<I, T>(&mut self, fields: I) -> Result<RowOutcome, ConvertError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        if matches!(self.state, State::Uninitialized) {
            let header = Header::new(fields.into_iter().map(|f| f.as_ref().to_string()))?;
            debug!("Header with {} columns: {:?}", header.len(), header.names());
            self.values.reserve(header.len());
            self.signature.reserve(header.len());
            self.state = State::Ready(header);
            return Ok(RowOutcome::Header);
        }

        let header = match &self.state {
            State::Ready(header) => header.clone(),
            _ => return Err(ConvertError::Closed),
        };

        self.values.clear();
        for field in fields {
            self.values.push(parse_field(field.as_ref(), self.parse_mode));
        }
        if self.values.len() != header.len() {
            return Err(ConvertError::HeaderMismatch {
                expected: header.len(),
                found: self.values.len(),
            });
        }

        self.signature.clear();
        self.signature
            .extend(self.values.iter().map(ScalarValue::scalar_type));

        let type_id = self.types.lookup_or_insert(&self.signature)?;
        let new_type = !self.registry.contains(type_id);
        let record_type = self.registry.resolve(type_id, &header, &self.signature)?;

        if new_type {
            debug!("New record type {}: {:?}", type_id, self.signature);
            self.sink.write_descriptor(&record_type)?;
        }
        self.sink.write_record(&record_type, &self.values)?;
        self.records += 1;

        Ok(RowOutcome::Record { type_id, new_type })
    }

    // Close after a fatal error, keeping what was already written.
    fn abort(&mut self) {
        if self.is_closed() {
            return;
        }
        self.state = State::Closed;
        if let Err(e) = self.sink.finish() {
            warn!("Failed to flush output after error: {}", e);
        }
    }
}

// Undecodable field bytes are a parse failure of that column.
fn csv_error(e: csv::Error) -> ConvertError {
    if let csv::ErrorKind::Utf8 { err, .. } = e.kind() {
        return ConvertError::ParseFailure {
            column: err.field(),
            reason: err.to_string(),
        };
    }
    ConvertError::from(e)
}

/// Convert delimited `input` into `output` using the configured format
pub fn convert<R: Read, W: Write>(
    input: R,
    output: W,
    config: &ConversionConfig,
) -> Result<ConversionStats, ConvertError> {
    let writer_config = config.writer_config.clone();
    match writer_config.format {
        OutputFormat::Binary => {
            let sink = BinaryWriter::new(output, writer_config)?;
            Converter::new(sink, config).convert_reader(input)
        }
        OutputFormat::Json => {
            let sink = JsonLinesWriter::new(output, writer_config);
            Converter::new(sink, config).convert_reader(input)
        }
    }
}

//! # Record Stream Reader
//!
//! Single-pass decoder for the binary stream produced by
//! [`BinaryWriter`](crate::writer::BinaryWriter). Descriptor units register
//! record types; record units are decoded against the record type their unit
//! frame names.
//!
//! ## Example
//!
//! ```rust
//! use cz::convert::{convert, ConversionConfig};
//! use cz::reader::{StreamEvent, StreamReader};
//!
//! let mut stream = Vec::new();
//! convert("a,b\n1,x\n".as_bytes(), &mut stream, &ConversionConfig::default())?;
//!
//! let mut records = 0;
//! for event in StreamReader::new(stream.as_slice())? {
//!     if let StreamEvent::Record { values, .. } = event? {
//!         assert_eq!(values.len(), 2);
//!         records += 1;
//!     }
//! }
//! assert_eq!(records, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;


pub use error::ReaderError;

use std::collections::HashMap;
use std::io::{self, Read};
use std::sync::Arc;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::encoding::{decode_descriptor, decode_record};
use crate::infer::ScalarValue;
use crate::schema::{RecordType, TypeId};
use crate::writer::{STREAM_MAGIC, UNIT_DESCRIPTOR, UNIT_RECORD};

/// One decoded unit of a binary stream
#[derive(Debug, Clone)]
pub enum StreamEvent {
    /// A record type announced for the first time
    Descriptor(Arc<RecordType>),
    /// A record and the record type it was encoded with
    Record {
        /// Record type of the values
        record_type: Arc<RecordType>,
        /// Values in column order
        values: Vec<ScalarValue>,
    },
}

/// Reader for binary record streams
pub struct StreamReader<R: Read> {
    input: R,
    types: HashMap<TypeId, Arc<RecordType>>,
    payload: Vec<u8>,
    units_read: u64,
    done: bool,
}

impl<R: Read> StreamReader<R> {
    /// Open a stream, validating its preamble
    pub fn new(mut input: R) -> Result<Self, ReaderError> {
        let mut magic = [0u8; 4];
        input.read_exact(&mut magic).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => ReaderError::InvalidFormat("stream too short".to_string()),
            _ => ReaderError::IoError(e),
        })?;
        if magic != STREAM_MAGIC {
            return Err(ReaderError::InvalidFormat(format!(
                "bad magic bytes {:02x?}",
                magic
            )));
        }

        Ok(Self {
            input,
            types: HashMap::new(),
            payload: Vec::new(),
            units_read: 0,
            done: false,
        })
    }

    /// Record types declared so far
    pub fn record_type(&self, id: TypeId) -> Option<&Arc<RecordType>> {
        self.types.get(&id)
    }

    /// Number of distinct record types declared so far
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Read the next unit, or `None` at a clean end of stream
    pub fn next_event(&mut self) -> Result<Option<StreamEvent>, ReaderError> {
        if self.done {
            return Ok(None);
        }

        let kind = match self.input.read_u8() {
            Ok(kind) => kind,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                self.done = true;
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let unit = self.units_read;
        let id = TypeId(self.input.read_u32::<LittleEndian>().map_err(truncated(unit))?);
        let len = self.input.read_u32::<LittleEndian>().map_err(truncated(unit))? as u64;

        self.payload.clear();
        let read = (&mut self.input).take(len).read_to_end(&mut self.payload)?;
        if read as u64 != len {
            return Err(ReaderError::Truncated(unit));
        }
        self.units_read += 1;

        match kind {
            UNIT_DESCRIPTOR => {
                if self.types.contains_key(&id) {
                    return Err(ReaderError::DuplicateDescriptor(id));
                }
                let record_type = Arc::new(decode_descriptor(id, &self.payload)?);
                self.types.insert(id, Arc::clone(&record_type));
                Ok(Some(StreamEvent::Descriptor(record_type)))
            }
            UNIT_RECORD => {
                let record_type = self
                    .types
                    .get(&id)
                    .cloned()
                    .ok_or(ReaderError::UnknownType(id))?;
                let values = decode_record(&self.payload, &record_type)?;
                Ok(Some(StreamEvent::Record {
                    record_type,
                    values,
                }))
            }
            other => Err(ReaderError::InvalidUnitKind(other)),
        }
    }
}

impl<R: Read> Iterator for StreamReader<R> {
    type Item = Result<StreamEvent, ReaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_event() {
            Ok(Some(event)) => Some(Ok(event)),
            Ok(None) => None,
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

fn truncated(unit: u64) -> impl Fn(io::Error) -> ReaderError {
    move |e| match e.kind() {
        io::ErrorKind::UnexpectedEof => ReaderError::Truncated(unit),
        _ => ReaderError::IoError(e),
    }
}

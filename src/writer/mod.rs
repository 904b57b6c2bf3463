//! # Record Stream Writers
//!
//! Writers consume the typed output of a conversion run through the
//! [`RecordSink`] trait: one descriptor per record type, announced before the
//! first record of that type, and one call per record.
//!
//! ## Binary Stream Layout
//!
//! [`BinaryWriter`] frames everything as units after a fixed preamble:
//!
//! ```text
//! "CZB" 0x01                       magic + format version
//! repeated:
//!     u8  kind                     1 = descriptor, 2 = record
//!     u32 type_id                  little-endian
//!     u32 payload_len              little-endian
//!     payload_len bytes            see crate::encoding
//! ```
//!
//! The descriptor unit of a type id always precedes its first record unit, so
//! a reader can decode the stream in a single pass.
//!
//! ## JSON Lines
//!
//! [`JsonLinesWriter`] writes one JSON object per record and no descriptors.

mod binary;
mod config;
mod error;
mod json;
mod stats;

#[cfg(test)]
mod tests;

pub use binary::BinaryWriter;
pub use config::{OutputFormat, WriterConfig};
pub use error::WriterError;
pub use json::{record_to_json, to_json, JsonLinesWriter};
pub use stats::WriterStats;

use crate::infer::ScalarValue;
use crate::schema::RecordType;

/// Magic bytes opening every binary stream
pub const STREAM_MAGIC: [u8; 4] = *b"CZB\x01";

/// Unit kind of a descriptor unit
pub const UNIT_DESCRIPTOR: u8 = 1;

/// Unit kind of a record unit
pub const UNIT_RECORD: u8 = 2;

/// Destination of a conversion run
pub trait RecordSink {
    /// Announce a record type seen for the first time
    fn write_descriptor(&mut self, record_type: &RecordType) -> Result<(), WriterError>;

    /// Write one record whose values match `record_type`
    fn write_record(
        &mut self,
        record_type: &RecordType,
        values: &[ScalarValue],
    ) -> Result<(), WriterError>;

    /// Flush buffered output and report what was written
    fn finish(&mut self) -> Result<WriterStats, WriterError>;
}

impl<S: RecordSink + ?Sized> RecordSink for Box<S> {
    fn write_descriptor(&mut self, record_type: &RecordType) -> Result<(), WriterError> {
        (**self).write_descriptor(record_type)
    }

    fn write_record(
        &mut self,
        record_type: &RecordType,
        values: &[ScalarValue],
    ) -> Result<(), WriterError> {
        (**self).write_record(record_type, values)
    }

    fn finish(&mut self) -> Result<WriterStats, WriterError> {
        (**self).finish()
    }
}

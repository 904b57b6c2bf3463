//! # cz - Typed Binary Record Streams from Delimited Text
//!
//! `cz` converts delimited text (a header row followed by data rows) into a
//! compact, self-describing binary record stream. Each field's scalar type is
//! inferred on the fly, and rows with the same column-type shape share one
//! record type descriptor, written once per run.
//!
//! ## Key Features
//!
//! - **Total Type Inference**: Every field maps to exactly one of float64,
//!   bool, string or null, deterministically and independent of locale.
//!
//! - **Structural Deduplication**: Per-row type signatures are interned into
//!   small ids so each distinct shape pays for its descriptor only once.
//!
//! - **Compact Wire Form**: Fixed-width little-endian floats, single-byte
//!   bools, length-prefixed strings, and zero-byte nulls.
//!
//! - **Strings-Only Mode**: Keep every field verbatim as text while still
//!   producing a typed, self-describing stream.
//!
//! - **JSON Lines Output**: The same typed values can be written as one JSON
//!   object per row instead.
//!
//! ## Quick Start
//!
//! ```rust
//! use cz::convert::{convert, ConversionConfig};
//! use cz::reader::{StreamEvent, StreamReader};
//!
//! let input = "a,b,c\n1,2.5,hello\n3,4.5,world\n1,,x\n";
//! let mut stream = Vec::new();
//! let stats = convert(input.as_bytes(), &mut stream, &ConversionConfig::default())?;
//!
//! assert_eq!(stats.records_converted, 3);
//! assert_eq!(stats.record_types, 2);
//!
//! let descriptors = StreamReader::new(stream.as_slice())?
//!     .filter(|e| matches!(e, Ok(StreamEvent::Descriptor(_))))
//!     .count();
//! assert_eq!(descriptors, 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - [`infer`]: field parsing and the scalar value model
//! - [`schema`]: header, type interning and record type registry
//! - [`encoding`]: record and descriptor payload encoding
//! - [`writer`]: binary and JSON lines sinks
//! - [`reader`]: binary stream decoding
//! - [`convert`]: the per-run conversion session

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod encoding;
pub mod infer;
pub mod reader;
pub mod schema;
pub mod writer;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::convert::{convert, ConversionConfig, ConversionStats, Converter, ConvertError};
    pub use crate::infer::{parse_field, ParseMode, ScalarType, ScalarValue};
    pub use crate::reader::{StreamEvent, StreamReader};
    pub use crate::schema::{Header, RecordType, SchemaRegistry, TypeId, TypeTable};
    pub use crate::writer::{BinaryWriter, JsonLinesWriter, OutputFormat, RecordSink, WriterConfig};
}

//! # Binary Wire Encoding
//!
//! Encoding of record payloads and record type descriptors. All integers and
//! floats are written **little-endian**.
//!
//! ## Record Payload
//!
//! Fields are written in column order, each according to the column type
//! declared by its [`RecordType`](crate::schema::RecordType):
//!
//! | Type | Bytes |
//! |------|-------|
//! | float64 | 8 bytes, IEEE-754 double |
//! | bool | 1 byte, `0` or `1` |
//! | string | `u32` byte length, then UTF-8 bytes |
//! | null | nothing |
//!
//! A null column carries no bytes at all; the descriptor already says the
//! column is null. An empty string is a `string` column with length `0`, so the
//! two stay distinguishable.
//!
//! ## Descriptor Payload
//!
//! ```text
//! u32 column_count
//! repeated column_count times:
//!     u32 name_len, name bytes (UTF-8), u8 type code
//! ```
//!
//! Type codes: `0` null, `1` float64, `2` bool, `3` string.

mod builder;
mod decoder;
mod error;

#[cfg(test)]
mod tests;

pub use builder::RecordBuilder;
pub use decoder::{decode_descriptor, decode_record};
pub use error::EncodingError;

//! # Record Type Schema
//!
//! This module owns the structural side of a conversion run: the [`Header`]
//! read from the first row, the [`TypeTable`] that interns per-row type
//! signatures into small [`TypeId`]s, and the [`SchemaRegistry`] that resolves
//! each id into a shared, immutable [`RecordType`].
//!
//! ## Interning
//!
//! Records are described by their *signature*, the ordered list of the
//! [`ScalarType`](crate::infer::ScalarType) of every field. Two rows with the
//! same signature share one id, and therefore one descriptor on the wire:
//!
//! ```text
//! a,b,c
//! 1,2.5,hello   -> [float64, float64, string] -> TypeId(0)  (new)
//! 3,4.5,world   -> [float64, float64, string] -> TypeId(0)
//! 1,,x          -> [float64, null, string]    -> TypeId(1)  (new)
//! ```
//!
//! Ids are assigned from 0 in order of first appearance and are never reused.
//! Both tables only grow for the lifetime of a run.

mod error;
mod header;
mod registry;
mod table;

#[cfg(test)]
mod tests;

pub use error::SchemaError;
pub use header::Header;
pub use registry::{Column, RecordType, SchemaRegistry};
pub use table::{TypeId, TypeSignature, TypeTable};

// File: crates/api/src/traits/emit.rs

//! Trait for serializers of record sequences.

use crate::{Result, VectorRecord};

/// Serializes an ordered record sequence into generated source text.
///
/// Emission must be a pure function of `records`: the same sequence always
/// yields byte-identical output.
pub trait Emitter {
    fn emit(&self, records: &[VectorRecord]) -> Result<String>;
}

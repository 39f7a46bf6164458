//! Emitters for katgen record sets
//!
//! [`StaticDataEmitter`] turns an ordered record sequence into a C header
//! laid out by a [`Schema`]: fixed-size members first, then pointer/length
//! pairs backed by one auxiliary array per record and field, then the
//! record count.

pub mod header;
pub mod schema;

pub use header::StaticDataEmitter;
pub use schema::{Schema, SchemaField};

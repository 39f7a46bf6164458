//! Common codecs for the katgen workspace
//!
//! [`codec`] converts between hex text and bytes and renders bytes as C
//! array-literal text. [`literal`] reads the integer and array literals
//! found in C test sources.

pub mod codec;
pub mod literal;

pub use codec::{decode_hex, encode_literal};
pub use literal::{parse_array_body, parse_int_literal};

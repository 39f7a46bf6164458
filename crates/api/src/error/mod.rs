//! Error handling for the transcoding pipeline
//!
//! Three kinds of failure exist:
//!
//! - [`FormatError`]: the input text is structurally wrong (missing header,
//!   bad hex, malformed array body). Aborts the parse of that input.
//! - [`PartialFieldError`]: one field of a suite block could not be
//!   extracted. Never propagated; the block is skipped and reported.
//! - [`Error::Resource`]: an input could not be read.

pub mod types;

pub use types::{Error, FieldFailure, FormatError, PartialFieldError, Result};

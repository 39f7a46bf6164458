// File: crates/api/src/traits/source.rs

//! Trait for anything that turns raw input text into records.

use crate::{Extraction, Result};

/// A parser for one input dialect.
///
/// Implementations read the whole text in a single pass and return the
/// records in the order they were found. Structural problems are returned
/// as errors; recoverable per-record problems go into
/// [`Extraction::skipped`].
pub trait VectorSource {
    /// Short name of the dialect, used in diagnostics
    fn dialect(&self) -> &'static str;

    /// Extract every complete record from `text`
    fn extract(&self, text: &str) -> Result<Extraction>;
}

//! Public API types and traits for the katgen workspace
//!
//! This crate defines the uniform [`VectorRecord`] produced by every input
//! dialect, the error taxonomy shared by parsers and emitters, and the two
//! traits that connect them.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, FieldFailure, FormatError, PartialFieldError, Result};
pub use traits::{Emitter, VectorSource};
pub use types::*;

//! Constant values for the built-in katgen presets
//!
//! Declaration idioms recognised in suite corpora and the names used in the
//! generated headers.

pub mod presets;

pub use presets::{aes, chacha20};

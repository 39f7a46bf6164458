//! Input dialect parsers for katgen
//!
//! - [`line`]: fixed-preamble NIST text files (`key = ...` or
//!   `plaintext = ...` header followed by vector lines)
//! - [`suite`]: free-form C sources with `suite("...")` blocks
//!
//! Both implement [`katgen_api::VectorSource`].

pub mod line;
pub mod suite;

pub use line::{LineFormatParser, LineMode};
pub use suite::{FieldSpec, SuiteConfig, SuiteExtractor, SuiteFilter};

//! # katgen
//!
//! Transcodes known-answer test vectors into static C headers.
//!
//! ## Inputs
//!
//! - NIST line-format files with a `key = ...` header (variable plaintext)
//!   or a `plaintext = ...` header (variable key)
//! - C test-suite sources whose cipher vectors live in `suite("...")` blocks
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`katgen-api`]: records, error taxonomy and the source/emitter traits
//! - [`katgen-common`]: hex codec and C literal parsing
//! - [`katgen-params`]: preset constants for ChaCha20 and AES corpora
//! - [`katgen-parse`]: line-format parser and suite-block extractor
//! - [`katgen-emit`]: schema-driven static header emitter
//!
//! On top of those it adds [`config`] (TOML configuration), [`pipeline`]
//! (format detection and multi-input runs) and, with the `cli` feature,
//! [`logging`] for the `katgen` binary.
//!
//! ```no_run
//! use katgen::prelude::*;
//! use katgen::pipeline::{InputFormat, Pipeline};
//!
//! # fn main() -> katgen::api::Result<()> {
//! let pipeline = Pipeline::new(TranscodeConfig::default())?;
//! let report = pipeline.run(&["tests.c"], InputFormat::Auto)?;
//! let header = pipeline.render(&report)?;
//! # let _ = header;
//! # Ok(())
//! # }
//! ```

pub use katgen_api as api;
pub use katgen_common as common;
pub use katgen_emit as emit;
pub use katgen_params as params;
pub use katgen_parse as parse;

pub mod config;
pub mod pipeline;

#[cfg(feature = "cli")]
pub mod logging;

/// Common imports for katgen users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, FormatError, Result};

    // Re-export core traits
    pub use crate::api::{Emitter, VectorSource};

    // Re-export the record model
    pub use crate::api::{Extraction, Field, FieldKind, SkippedSuite, VectorRecord};

    pub use crate::config::TranscodeConfig;
    pub use crate::emit::{Schema, StaticDataEmitter};
    pub use crate::parse::{LineFormatParser, SuiteConfig, SuiteExtractor};
}

//! Trait definitions connecting parsers to emitters

pub mod emit;
pub mod source;

pub use emit::Emitter;
pub use source::VectorSource;

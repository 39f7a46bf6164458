//! Fixtures and shared helpers for the katgen integration tests and benchmarks
pub mod fixtures;

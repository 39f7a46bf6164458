//! Constants for each supported cipher family

pub mod aes;
pub mod chacha20;

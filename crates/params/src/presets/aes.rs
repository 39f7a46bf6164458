//! Constants for AES known-answer files

/// Size of an AES-256 key in bytes
pub const AES256_KEY_SIZE: usize = 32;

// Headers of the two line-oriented KAT layouts
pub const KEY_HEADER: &str = "key";
pub const PLAINTEXT_HEADER: &str = "plaintext";

// Generated header
pub const HEADER_TITLE: &str = "AES-256 known-answer vectors converted from NIST text files";
pub const INCLUDE_GUARD: &str = "AES256_TEST_VECTORS_H";
pub const STRUCT_NAME: &str = "Aes256TestVector";
pub const ARRAY_NAME: &str = "aes256_test_vectors";
pub const COUNT_NAME: &str = "num_aes256_test_vectors";

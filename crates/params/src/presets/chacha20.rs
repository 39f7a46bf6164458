//! Constants for ChaCha20 cipher test suites

/// Size of a ChaCha20 key in bytes
pub const CHACHA20_KEY_SIZE: usize = 32;

/// Size of a ChaCha20 (IETF) nonce in bytes
pub const CHACHA20_NONCE_SIZE: usize = 12;

/// Identifier of the call that opens a suite block: `suite("name")`
pub const SUITE_MARKER: &str = "suite";

/// Substring a suite name must contain to be extracted
pub const SUITE_INCLUDE: &str = "Cipher Test Vector";

/// Substring that excludes a suite (streaming variants)
pub const SUITE_EXCLUDE: &str = "Chunked";

// Declarations inside a suite block
pub const KEY_TYPE: &str = "key256_t";
pub const KEY_IDENT: &str = "key";
pub const NONCE_TYPE: &str = "nonce96_t";
pub const NONCE_IDENT: &str = "nonce";
pub const COUNTER_TYPE: &str = "uint32_t";
pub const COUNTER_IDENT: &str = "count";
pub const BYTE_TYPE: &str = "uint8_t";
pub const PLAINTEXT_IDENT: &str = "data";
pub const CIPHERTEXT_IDENT: &str = "ciphertext";

// Generated header
pub const HEADER_TITLE: &str = "ChaCha20 cipher test vectors extracted from tests.c";
pub const INCLUDE_GUARD: &str = "CHACHA20_TEST_VECTORS_H";
pub const STRUCT_NAME: &str = "ChaCha20TestVector";
pub const ARRAY_NAME: &str = "chacha20_test_vectors";
pub const COUNT_NAME: &str = "num_chacha20_test_vectors";

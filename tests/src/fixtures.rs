//! Sample corpora and record builders

use std::fs;
use std::path::{Path, PathBuf};

use katgen_api::VectorRecord;

/// ChaCha20 `tests.c` excerpt: four candidate blocks, one of them without a
/// nonce, plus a block-function suite and a chunked suite
pub const CHACHA20_CORPUS: &str = "chacha20_tests.c";

/// AES-256 file with a `key = ...` header
pub const AES256_VAR_PT: &str = "aes256_var_pt.txt";

/// AES-256 file with a `plaintext = ...` header and a dangling key line
pub const AES256_VAR_KEY: &str = "aes256_var_key.txt";

/// Directory holding the sample corpora
pub fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn data_path(name: &str) -> PathBuf {
    data_dir().join(name)
}

/// Read a sample corpus
///
/// Panics if the file is missing, which only happens in a broken checkout.
pub fn load(name: &str) -> String {
    let path = data_path(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {}: {e}", path.display()))
}

/// `0x.., 0x..` body of `n` copies of `fill`
pub fn byte_list(n: usize, fill: u8) -> String {
    vec![format!("0x{fill:02x}"); n].join(", ")
}

/// Declarations of a ChaCha20 suite block, keyed by identifier
fn suite_decls(counter: u32) -> [(&'static str, String); 5] {
    [
        ("key", format!("    key256_t key = {{ {} }};\n", byte_list(32, 0x01))),
        ("nonce", format!("    nonce96_t nonce = {{ {} }};\n", byte_list(12, 0x02))),
        ("count", format!("    uint32_t count = {counter};\n")),
        ("data", "    uint8_t data[] = { 0x41, 0x6e, 0x79 };\n".to_string()),
        ("ciphertext", "    uint8_t ciphertext[] = { 0xa3, 0xfb, 0xf0 };\n".to_string()),
    ]
}

/// A ChaCha20 suite block, optionally without one declaration
pub fn suite_block(name: &str, counter: u32, omit: Option<&str>) -> String {
    let mut out = format!("suite(\"{name}\") {{\n");
    for (ident, decl) in suite_decls(counter) {
        if Some(ident) != omit {
            out.push_str(&decl);
        }
    }
    out.push_str("    run_cipher_test(key, nonce, count, data, sizeof(data), ciphertext);\n}\n\n");
    out
}

/// A corpus of `n` complete candidate blocks
pub fn suite_corpus(n: usize) -> String {
    (0..n)
        .map(|i| suite_block(&format!("Cipher Test Vector #{}", i + 1), i as u32, None))
        .collect()
}

/// A record shaped like one from [`suite_block`]
pub fn chacha20_record(name: &str, counter: u32) -> VectorRecord {
    VectorRecord::suite(
        name,
        vec![0x01; 32],
        vec![0x02; 12],
        counter,
        vec![0x41, 0x6e, 0x79],
        vec![0xa3, 0xfb, 0xf0],
    )
    .expect("plaintext and ciphertext have equal length")
}

/// A line-format AES-256 record with a `len`-byte payload
pub fn aes256_record(len: usize) -> VectorRecord {
    VectorRecord::block(vec![0x00; 32], vec![0x80; len], vec![0x3a; len])
        .expect("plaintext and ciphertext have equal length")
}

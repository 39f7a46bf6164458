//! End-to-end extraction followed by header emission

use katgen_api::{Emitter, Error, FormatError, VectorSource};
use katgen_emit::{Schema, StaticDataEmitter};
use katgen_parse::{LineFormatParser, SuiteExtractor};
use katgen_tests::fixtures::{self, AES256_VAR_KEY, CHACHA20_CORPUS};

fn chacha20_header() -> String {
    let out = SuiteExtractor::default()
        .extract(&fixtures::load(CHACHA20_CORPUS))
        .unwrap();
    StaticDataEmitter::chacha20().emit(out.records()).unwrap()
}

#[test]
fn chacha20_header_structure() {
    let text = chacha20_header();

    assert!(text.starts_with("/* This file is automatically generated. Do not edit. */\n"));
    assert!(text.contains("#ifndef CHACHA20_TEST_VECTORS_H\n#define CHACHA20_TEST_VECTORS_H\n"));
    assert!(text.contains("    const uint8_t key[32];\n    const uint8_t nonce[12];\n"));
    assert!(text.contains("static const ChaCha20TestVector chacha20_test_vectors[] = {"));
    assert!(text.contains("static const size_t num_chacha20_test_vectors = 3;"));
    assert!(text.ends_with("#endif // CHACHA20_TEST_VECTORS_H\n"));
}

#[test]
fn chacha20_header_members_in_order() {
    let text = chacha20_header();
    let members = [
        "const char *suite_name;",
        "const uint8_t key[32];",
        "const uint8_t nonce[12];",
        "const uint32_t count;",
        "const uint8_t *plaintext;",
        "const size_t plaintext_len;",
        "const uint8_t *expected_ciphertext;",
        "const size_t ciphertext_len;",
    ];
    let positions: Vec<usize> = members.iter().map(|m| text.find(m).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn chacha20_header_aux_arrays_and_labels() {
    let text = chacha20_header();

    for i in 0..3 {
        assert!(text.contains(&format!("static const uint8_t plaintext_{i}[] = {{")));
        assert!(text.contains(&format!("static const uint8_t ciphertext_{i}[] = {{")));
        assert!(text.contains(&format!("plaintext_{i}, sizeof(plaintext_{i}),")));
    }
    assert!(!text.contains("plaintext_3"));
    assert!(text.contains("        \"Cipher Test Vector #2\",\n"));
    assert!(!text.contains("Cipher Test Vector #3"));
    assert!(text.contains("        4294967295,\n"));
    assert!(text.contains("static const uint8_t plaintext_1[] = {0x41, 0x6e, 0x79, 0x20,"));
}

#[test]
fn aes256_header_from_var_key_file() {
    let out = LineFormatParser::var_key()
        .extract(&fixtures::load(AES256_VAR_KEY))
        .unwrap();
    let text = StaticDataEmitter::aes256().emit(out.records()).unwrap();

    assert!(text.contains("} Aes256TestVector;"));
    assert!(text.contains("static const size_t num_aes256_test_vectors = 3;"));
    assert!(text.contains("{0xe0, 0x00,"));
}

#[test]
fn line_records_cannot_fill_chacha20_schema() {
    let records = vec![fixtures::aes256_record(16)];
    let err = StaticDataEmitter::chacha20().emit(&records).unwrap_err();
    assert!(matches!(
        err,
        Error::Format(FormatError::MissingRecordField { index: 0, .. })
    ));
}

#[test]
fn suite_records_fit_aes256_schema() {
    // Extra fields are ignored; only the schema's members are rendered
    let records = vec![fixtures::chacha20_record("Cipher Test Vector #1", 7)];
    let text = StaticDataEmitter::aes256().emit(&records).unwrap();
    assert!(!text.contains("Cipher Test Vector #1"));
    assert!(text.contains("num_aes256_test_vectors = 1;"));
}

#[test]
fn custom_schema_renames_everything() {
    let mut schema = Schema::chacha20();
    schema.struct_name = "Vector".into();
    schema.array_name = "vectors".into();
    schema.count_name = "vector_count".into();
    let emitter = StaticDataEmitter::new(schema).unwrap();

    let text = emitter.emit(&[]).unwrap();
    assert!(text.contains("} Vector;"));
    assert!(text.contains("static const Vector vectors[] = {\n};"));
    assert!(text.contains("static const size_t vector_count = 0;"));
}

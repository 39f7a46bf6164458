//! Line-format parsing against the AES-256 sample files

use katgen_api::{Error, FormatError, VectorSource};
use katgen_parse::{LineFormatParser, LineMode};
use katgen_tests::fixtures::{self, AES256_VAR_KEY, AES256_VAR_PT};

#[test]
fn var_pt_file_shares_one_key() {
    let out = LineFormatParser::var_plaintext()
        .extract(&fixtures::load(AES256_VAR_PT))
        .unwrap();

    assert_eq!(out.count(), 3);
    assert!(out.skipped().is_empty());
    for rec in out.records() {
        assert_eq!(rec.key(), &[0u8; 32]);
        assert_eq!(rec.plaintext().len(), 16);
        assert_eq!(rec.ciphertext().len(), 16);
        assert_eq!(rec.suite_name(), None);
    }
    assert_eq!(
        out.records()[0].ciphertext(),
        hex::decode("ddc6bf790c15760d8d9aeb6f9a75fd4e").unwrap().as_slice()
    );
    let firsts: Vec<u8> = out.records().iter().map(|r| r.plaintext()[0]).collect();
    assert_eq!(firsts, vec![0x80, 0xc0, 0xe0]);
}

#[test]
fn var_key_file_groups_three_lines() {
    let out = LineFormatParser::var_key()
        .extract(&fixtures::load(AES256_VAR_KEY))
        .unwrap();

    // The dangling tenth line is dropped
    assert_eq!(out.count(), 3);
    let rec = &out.records()[1];
    assert_eq!(rec.key().len(), 32);
    assert_eq!(rec.key()[0], 0xc0);
    assert!(rec.key()[1..].iter().all(|&b| b == 0));
    assert_eq!(rec.plaintext(), &[0u8; 16]);
    assert_eq!(
        rec.ciphertext(),
        hex::decode("b29169cdcf2d83e838125a12ee6aa400").unwrap().as_slice()
    );
}

#[test]
fn wrong_parser_for_file_reports_missing_header() {
    let err = LineFormatParser::var_key()
        .extract(&fixtures::load(AES256_VAR_PT))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Format(FormatError::MissingHeader("plaintext"))
    ));
    assert_eq!(err.to_string(), "missing plaintext header");
}

#[test]
fn parse_lines_accepts_any_line_source() {
    let lines = vec!["key = 00ff", "0a0b 1a1b", "0c0d 1c1d"];
    let out = LineFormatParser::new(LineMode::VarPlaintext)
        .parse_lines(lines)
        .unwrap();
    assert_eq!(out.count(), 2);
    assert_eq!(out.records()[1].plaintext(), &[0x0c, 0x0d]);
}

#[test]
fn bad_hex_names_the_line() {
    let err = LineFormatParser::var_plaintext()
        .extract("key = 00\n\n0011 22zz\n")
        .unwrap_err();
    match err {
        Error::Format(FormatError::MalformedLine { line, reason }) => {
            assert_eq!(line, 3);
            assert!(reason.starts_with("ciphertext"), "{reason}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn dialect_names() {
    assert_eq!(LineFormatParser::var_plaintext().dialect(), "nist-var-pt");
    assert_eq!(LineFormatParser::var_key().dialect(), "nist-var-key");
    assert_eq!(LineFormatParser::var_key().mode(), LineMode::VarKey);
    assert_eq!(LineMode::VarKey.header(), "plaintext");
}

//! Property-based tests for the codec, the line parsers and the emitter

use katgen_api::{Emitter, VectorSource};
use katgen_common::{decode_hex, encode_literal, parse_array_body};
use katgen_emit::StaticDataEmitter;
use katgen_parse::LineFormatParser;
use katgen_tests::fixtures;
use proptest::prelude::*;

/// A 16-byte block as lowercase hex
fn block_hex() -> impl Strategy<Value = String> {
    any::<[u8; 16]>().prop_map(hex::encode)
}

proptest! {
    #[test]
    fn hex_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(decode_hex(&hex::encode(&bytes)).unwrap(), bytes.clone());
        prop_assert_eq!(decode_hex(&hex::encode_upper(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn odd_length_hex_rejected(s in "[0-9a-f]{1,63}") {
        prop_assume!(s.len() % 2 == 1);
        prop_assert!(decode_hex(&s).is_err());
    }

    #[test]
    fn literal_reparses_to_same_bytes(bytes in prop::collection::vec(any::<u8>(), 1..64)) {
        let values = parse_array_body(&encode_literal(&bytes)).unwrap();
        let back: Vec<u8> = values.into_iter().map(|v| v as u8).collect();
        prop_assert_eq!(back, bytes);
    }

    #[test]
    fn var_key_yields_floor_of_groups(
        groups in prop::collection::vec((block_hex(), block_hex(), block_hex()), 0..8),
        tail in prop::collection::vec(block_hex(), 0..3),
    ) {
        let mut text = format!("plaintext = {}\n", "00".repeat(16));
        for (a, b, ct) in &groups {
            text.push_str(&format!("{a}\n{b}\n{ct}\n"));
        }
        for line in &tail {
            text.push_str(line);
            text.push('\n');
        }
        let lines = 3 * groups.len() + tail.len();

        let out = LineFormatParser::var_key().extract(&text).unwrap();
        prop_assert_eq!(out.count(), lines / 3);
        for (rec, (a, b, _)) in out.records().iter().zip(&groups) {
            prop_assert_eq!(hex::encode(rec.key()), format!("{a}{b}"));
        }
    }

    #[test]
    fn var_pt_yields_one_record_per_line(pairs in prop::collection::vec((block_hex(), block_hex()), 0..16)) {
        let mut text = format!("key = {}\n", "11".repeat(32));
        for (pt, ct) in &pairs {
            text.push_str(&format!("{pt} {ct}\n"));
        }
        let out = LineFormatParser::var_plaintext().extract(&text).unwrap();
        prop_assert_eq!(out.count(), pairs.len());
    }

    #[test]
    fn emission_is_deterministic(n in 0usize..6, counter in any::<u32>()) {
        let records: Vec<_> = (0..n)
            .map(|i| fixtures::chacha20_record(&format!("Cipher Test Vector #{i}"), counter))
            .collect();
        let emitter = StaticDataEmitter::chacha20();
        let first = emitter.emit(&records).unwrap();
        prop_assert_eq!(&first, &emitter.emit(&records).unwrap());
        let expected = format!("num_chacha20_test_vectors = {n};");
        prop_assert!(first.contains(&expected));
    }
}

//! Hex text <-> byte conversion

use core::fmt::Write;

use katgen_api::{FormatError, Result};

/// Decode a string of hex digit pairs.
///
/// The text must have an even number of characters, all hex digits. No
/// whitespace is skipped; callers trim their fields first.
pub fn decode_hex(text: &str) -> Result<Vec<u8>> {
    hex::decode(text).map_err(|e| FormatError::Hex(e).into())
}

/// Render bytes as `0x..` literals separated by `", "`.
///
/// Each byte is always two lowercase digits, so equal input gives equal
/// output.
pub fn encode_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 6);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing to a String cannot fail
        let _ = write!(out, "0x{b:02x}");
    }
    out
}

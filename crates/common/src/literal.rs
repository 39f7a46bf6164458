//! Integer and array literals as written in C sources

use katgen_api::FormatError;

/// Parse one integer literal: decimal, or hex with a `0x`/`0X` prefix.
///
/// Trailing `u`/`U`/`l`/`L` suffixes are accepted and ignored.
pub fn parse_int_literal(text: &str) -> Result<u64, FormatError> {
    let invalid = || FormatError::InvalidLiteral(text.to_string());

    let body = text.trim_end_matches(['u', 'U', 'l', 'L']);
    let (digits, radix) = match body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (body, 10),
    };

    // from_str_radix would accept a leading '+'
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }
    u64::from_str_radix(digits, radix).map_err(|_| invalid())
}

/// Parse the body of a brace-enclosed array literal (without the braces).
///
/// Whitespace and line breaks are stripped first; a single trailing comma is
/// allowed. An empty body yields an empty vector.
pub fn parse_array_body(body: &str) -> Result<Vec<u64>, FormatError> {
    let clean: String = body.chars().filter(|c| !c.is_whitespace()).collect();
    let clean = clean.strip_suffix(',').unwrap_or(&clean);
    if clean.is_empty() {
        return Ok(Vec::new());
    }

    clean
        .split(',')
        .enumerate()
        .map(|(i, element)| {
            if element.is_empty() {
                return Err(FormatError::MalformedArray(format!("empty element at position {i}")));
            }
            parse_int_literal(element)
        })
        .collect()
}

//! Line-oriented NIST known-answer files
//!
//! Two layouts share the same preamble handling: blank lines and lines
//! starting with `//` are dropped, and the first remaining line is a
//! `name = <hex>` header.
//!
//! ```text
//! key = 000102030405060708090a0b0c0d0e0f      <- LineMode::VarPlaintext
//! 00112233445566778899aabbccddeeff 69c4e0d8...
//!
//! plaintext = 00000000000000000000000000000000 <- LineMode::VarKey
//! 80000000000000000000000000000000             key, first half
//! 00000000000000000000000000000000             key, second half
//! ddc6bf790c15760d8d9aeb6f9a75fd4e             ciphertext
//! ```

use katgen_api::{Error, Extraction, FormatError, Result, VectorRecord, VectorSource};
use katgen_common::decode_hex;
use katgen_params::aes::{KEY_HEADER, PLAINTEXT_HEADER};
use tracing::{debug, info};

/// Lines that make up one record in [`LineMode::VarKey`] files
const VAR_KEY_GROUP: usize = 3;

/// Which value the header fixes for the whole file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    /// `key = ...` header; each line holds `plaintext ciphertext`
    VarPlaintext,
    /// `plaintext = ...` header; each record spans three lines
    VarKey,
}

impl LineMode {
    /// Name expected on the left of the header's `=`
    pub fn header(self) -> &'static str {
        match self {
            LineMode::VarPlaintext => KEY_HEADER,
            LineMode::VarKey => PLAINTEXT_HEADER,
        }
    }
}

/// Parser for one line-format file
#[derive(Debug, Clone, Copy)]
pub struct LineFormatParser {
    mode: LineMode,
}

impl LineFormatParser {
    pub const fn new(mode: LineMode) -> Self {
        Self { mode }
    }

    pub fn var_plaintext() -> Self {
        Self::new(LineMode::VarPlaintext)
    }

    pub fn var_key() -> Self {
        Self::new(LineMode::VarKey)
    }

    pub fn mode(&self) -> LineMode {
        self.mode
    }

    /// Parse an ordered sequence of raw lines
    pub fn parse_lines<'a, I>(&self, lines: I) -> Result<Extraction>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let lines = significant_lines(lines);
        let (header, body) = lines
            .split_first()
            .ok_or(FormatError::MissingHeader(self.mode.header()))?;
        let fixed = parse_header(header, self.mode.header())?;

        let out = match self.mode {
            LineMode::VarPlaintext => parse_var_plaintext(&fixed, body)?,
            LineMode::VarKey => parse_var_key(&fixed, body)?,
        };

        info!(mode = ?self.mode, records = out.count(), "parsed line-format vectors");
        Ok(out)
    }
}

impl VectorSource for LineFormatParser {
    fn dialect(&self) -> &'static str {
        match self.mode {
            LineMode::VarPlaintext => "nist-var-pt",
            LineMode::VarKey => "nist-var-key",
        }
    }

    fn extract(&self, text: &str) -> Result<Extraction> {
        self.parse_lines(text.lines())
    }
}

/// A trimmed line with its 1-based position in the input
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    number: usize,
    text: &'a str,
}

fn significant_lines<'a, I>(lines: I) -> Vec<Line<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(i, raw)| Line {
            number: i + 1,
            text: raw.trim(),
        })
        .filter(|line| !line.text.is_empty() && !line.text.starts_with("//"))
        .collect()
}

/// Decode the hex value of a `name = <hex>` header
fn parse_header(line: &Line<'_>, name: &'static str) -> Result<Vec<u8>> {
    let value = line
        .text
        .split_once('=')
        .filter(|(lhs, _)| lhs.trim().eq_ignore_ascii_case(name))
        .map(|(_, rhs)| rhs.trim())
        .ok_or(FormatError::MissingHeader(name))?;
    decode_hex(value).map_err(at_line(line.number, name))
}

fn parse_var_plaintext(key: &[u8], body: &[Line<'_>]) -> Result<Extraction> {
    let mut out = Extraction::new();
    for line in body {
        let fields: Vec<&str> = line.text.split_whitespace().collect();
        let [pt, ct] = fields.as_slice() else {
            return Err(FormatError::MalformedLine {
                line: line.number,
                reason: format!("expected plaintext and ciphertext, found {} fields", fields.len()),
            }
            .into());
        };

        let plaintext = decode_hex(pt).map_err(at_line(line.number, "plaintext"))?;
        let ciphertext = decode_hex(ct).map_err(at_line(line.number, "ciphertext"))?;
        let record = VectorRecord::block(key.to_vec(), plaintext, ciphertext)
            .map_err(at_line(line.number, "record"))?;
        out.push(record);
    }
    Ok(out)
}

fn parse_var_key(plaintext: &[u8], body: &[Line<'_>]) -> Result<Extraction> {
    let mut out = Extraction::new();
    for group in body.chunks(VAR_KEY_GROUP) {
        let [first, second, ct] = group else {
            // Short trailing group: dropped without a record or an error
            debug!(
                lines = group.len(),
                first_line = group[0].number,
                "dropping incomplete trailing key group"
            );
            break;
        };

        let key_hex = format!("{}{}", first.text, second.text);
        let key = decode_hex(&key_hex).map_err(at_line(first.number, "key"))?;
        let ciphertext = decode_hex(ct.text).map_err(at_line(ct.number, "ciphertext"))?;
        let record = VectorRecord::block(key, plaintext.to_vec(), ciphertext)
            .map_err(at_line(ct.number, "record"))?;
        out.push(record);
    }
    Ok(out)
}

/// Attach a line number to a decoding failure
fn at_line(line: usize, what: &'static str) -> impl FnOnce(Error) -> Error {
    move |e| {
        let reason = match e {
            Error::Format(inner) => format!("{what}: {inner}"),
            other => return other,
        };
        FormatError::MalformedLine { line, reason }.into()
    }
}

//! Recognising and classifying `type name[...] = init;` declarations

use katgen_api::{FieldFailure, FieldKind};
use katgen_common::{parse_array_body, parse_int_literal};

use super::lexer::{Token, TokenKind};
use super::FieldSpec;

/// Right-hand side of a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Initializer<'a> {
    /// Source text between the braces of `{ ... }`
    Array(&'a str),
    /// A single word followed by `;` or `,`
    Scalar(&'a str),
    /// Anything else (expressions, strings, calls)
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub type_name: &'a str,
    pub ident: &'a str,
    pub init: Initializer<'a>,
}

/// Value of a classified declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Bytes(Vec<u8>),
    UInt32(u32),
}

/// Every declaration with an initializer in `tokens`, in order.
///
/// Qualifiers before the type (`static const ...`) are ignored; pointer
/// declarations are not recognised.
pub fn declarations<'a>(src: &'a str, tokens: &[Token<'a>]) -> Vec<Declaration<'a>> {
    let mut out = Vec::new();

    for (eq, token) in tokens.iter().enumerate() {
        if !token.is_punct('=') || tokens.get(eq + 1).is_some_and(|t| t.is_punct('=')) {
            continue;
        }
        let Some(ident_at) = ident_before(tokens, eq) else {
            continue;
        };
        let (Some(ident), Some(type_name)) = (
            tokens[ident_at].word(),
            ident_at.checked_sub(1).and_then(|i| tokens[i].word()),
        ) else {
            continue;
        };

        out.push(Declaration {
            type_name,
            ident,
            init: initializer(src, &tokens[eq + 1..]),
        });
    }

    out
}

/// Index of the identifier left of the `=` at `eq`, skipping one `[...]`
fn ident_before(tokens: &[Token<'_>], eq: usize) -> Option<usize> {
    let mut i = eq.checked_sub(1)?;
    if tokens[i].is_punct(']') {
        i = tokens[..i].iter().rposition(|t| t.is_punct('['))?.checked_sub(1)?;
    }
    Some(i)
}

fn initializer<'a>(src: &'a str, rest: &[Token<'a>]) -> Initializer<'a> {
    match rest {
        [open, ..] if open.is_punct('{') => {
            let mut depth = 0usize;
            for t in rest {
                match t.kind {
                    TokenKind::Punct('{') => depth += 1,
                    TokenKind::Punct('}') => {
                        depth -= 1;
                        if depth == 0 {
                            return Initializer::Array(&src[open.end..t.start]);
                        }
                    }
                    _ => {}
                }
            }
            Initializer::Other
        }
        [value, end, ..] if end.is_punct(';') || end.is_punct(',') => match value.kind {
            TokenKind::Word(w) => Initializer::Scalar(w),
            _ => Initializer::Other,
        },
        _ => Initializer::Other,
    }
}

impl FieldSpec {
    /// Whether `decl` is this field's declaration
    pub fn matches(&self, decl: &Declaration<'_>) -> bool {
        decl.type_name == self.type_name && decl.ident == self.ident
    }

    /// Read `decl`'s initializer as this field's kind
    pub fn classify(&self, decl: &Declaration<'_>) -> Result<FieldValue, FieldFailure> {
        match (self.kind, decl.init) {
            (FieldKind::FixedBytes { width }, Initializer::Array(body)) => {
                let bytes = byte_array(body)?;
                if bytes.len() != width {
                    return Err(FieldFailure::WidthMismatch {
                        expected: width,
                        actual: bytes.len(),
                    });
                }
                Ok(FieldValue::Bytes(bytes))
            }
            (FieldKind::VarBytes, Initializer::Array(body)) => Ok(FieldValue::Bytes(byte_array(body)?)),
            (FieldKind::UInt32, Initializer::Scalar(lit)) => {
                let value = parse_int_literal(lit)?;
                u32::try_from(value)
                    .map(FieldValue::UInt32)
                    .map_err(|_| FieldFailure::OutOfRange(lit.to_string()))
            }
            (kind, _) => Err(FieldFailure::Malformed(format!(
                "initializer does not fit {kind}"
            ))),
        }
    }
}

fn byte_array(body: &str) -> Result<Vec<u8>, FieldFailure> {
    parse_array_body(body)?
        .into_iter()
        .map(|v| u8::try_from(v).map_err(|_| FieldFailure::OutOfRange(v.to_string())))
        .collect()
}

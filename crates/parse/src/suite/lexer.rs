//! A small C-like tokenizer.
//!
//! Only enough of C is understood to find `suite("...")` calls and
//! `type name[...] = init;` declarations: words (identifiers and numbers),
//! string literals and single punctuation characters. Whitespace, comments,
//! preprocessor directives and character literals produce no tokens. An
//! apostrophe that does not close on its line (`it's`) is punctuation.

use katgen_api::FormatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// A run of `[A-Za-z0-9_]`
    Word(&'a str),
    /// Contents of a string literal, escapes left as written
    Str(&'a str),
    Punct(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

impl<'a> Token<'a> {
    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }

    pub fn word(&self) -> Option<&'a str> {
        match self.kind {
            TokenKind::Word(w) => Some(w),
            _ => None,
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Tokenize `src`.
///
/// Fails only on an unterminated string literal or block comment.
pub fn tokenize(src: &str) -> Result<Vec<Token<'_>>, FormatError> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    // Only whitespace or comments seen since the last newline
    let mut line_start = true;

    while let Some(c) = src[pos..].chars().next() {
        let rest = &src[pos..];

        if c.is_whitespace() {
            line_start |= c == '\n';
            pos += c.len_utf8();
            continue;
        }
        if c == '#' && line_start {
            pos += directive_len(rest);
            continue;
        }
        line_start = false;

        if rest.starts_with("//") {
            pos += rest.find('\n').unwrap_or(rest.len());
        } else if rest.starts_with("/*") {
            let close = rest[2..]
                .find("*/")
                .ok_or(FormatError::UnterminatedLiteral { offset: pos })?;
            pos += close + 4;
        } else if c == '"' {
            let len = quoted_len(rest, c).ok_or(FormatError::UnterminatedLiteral { offset: pos })?;
            tokens.push(Token {
                kind: TokenKind::Str(&rest[1..len - 1]),
                start: pos,
                end: pos + len,
            });
            pos += len;
        } else if let Some(len) = (c == '\'').then(|| quoted_len(rest, c)).flatten() {
            pos += len;
        } else if is_word_char(c) {
            let len = rest.find(|ch: char| !is_word_char(ch)).unwrap_or(rest.len());
            tokens.push(Token {
                kind: TokenKind::Word(&rest[..len]),
                start: pos,
                end: pos + len,
            });
            pos += len;
        } else {
            tokens.push(Token {
                kind: TokenKind::Punct(c),
                start: pos,
                end: pos + c.len_utf8(),
            });
            pos += c.len_utf8();
        }
    }

    Ok(tokens)
}

/// Length in bytes of the directive at the start of `rest`, up to but not
/// including the newline that ends it. A backslash before a newline
/// continues the directive.
fn directive_len(rest: &str) -> usize {
    let mut end = 0;
    while let Some(nl) = rest[end..].find('\n') {
        let line_end = end + nl;
        if !rest[end..line_end].trim_end_matches('\r').ends_with('\\') {
            return line_end;
        }
        end = line_end + 1;
    }
    rest.len()
}

/// Length in bytes of the quoted literal at the start of `rest`, quotes
/// included. Literals may not span lines.
fn quoted_len(rest: &str, quote: char) -> Option<usize> {
    let mut chars = rest.char_indices().skip(1);
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '\n' => return None,
            c if c == quote => return Some(i + 1),
            _ => {}
        }
    }
    None
}

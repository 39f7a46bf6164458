//! Splitting a token stream into named suite blocks

use super::lexer::{Token, TokenKind};

/// The tokens belonging to one `suite("name")` call.
///
/// A block runs from its marker to the next marker, or to the end of the
/// input for the last one.
#[derive(Debug, Clone, Copy)]
pub struct SuiteBlock<'t, 'a> {
    pub name: &'a str,
    pub tokens: &'t [Token<'a>],
}

/// Name of the suite introduced at `tokens[i]`, if any
fn marker_at<'a>(tokens: &[Token<'a>], i: usize, marker: &str) -> Option<&'a str> {
    match tokens.get(i..i + 3)? {
        [call, open, name] if call.word() == Some(marker) && open.is_punct('(') => match name.kind {
            TokenKind::Str(s) => Some(s),
            _ => None,
        },
        _ => None,
    }
}

/// Find every block introduced by `marker("...")`, in source order
pub fn scan_blocks<'t, 'a>(tokens: &'t [Token<'a>], marker: &str) -> Vec<SuiteBlock<'t, 'a>> {
    let starts: Vec<(usize, &'a str)> = (0..tokens.len())
        .filter_map(|i| marker_at(tokens, i, marker).map(|name| (i, name)))
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(n, &(start, name))| {
            let end = starts.get(n + 1).map_or(tokens.len(), |&(next, _)| next);
            SuiteBlock {
                name,
                // Skip the marker itself
                tokens: &tokens[start + 3..end],
            }
        })
        .collect()
}

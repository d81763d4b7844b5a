//! Whitespace tokenizing and positional field extraction.

use smallvec::SmallVec;

use motio_core::FormatError;

use crate::lines::Line;

/// Tokens of one line. Every format has at most four meaningful fields.
pub(crate) type Tokens<'a> = SmallVec<[&'a str; 4]>;

pub(crate) fn tokenize(line: &Line) -> Tokens<'_> {
    line.text().split_whitespace().collect()
}

/// Token `index` of `line`, or [`FormatError::MissingToken`].
pub(crate) fn token<'a>(
    tokens: &Tokens<'a>,
    line: &Line,
    index: usize,
    expected: &'static str,
) -> Result<&'a str, FormatError> {
    tokens
        .get(index)
        .copied()
        .ok_or(FormatError::MissingToken {
            line: line.number(),
            index,
            expected,
        })
}

pub(crate) fn parse_f64(token: &str, line: &Line) -> Result<f64, FormatError> {
    token.parse().map_err(|_| FormatError::InvalidNumber {
        line: line.number(),
        token: token.to_string(),
    })
}

pub(crate) fn parse_count(token: &str, line: &Line) -> Result<usize, FormatError> {
    token.parse().map_err(|_| FormatError::InvalidCount {
        line: line.number(),
        token: token.to_string(),
    })
}

/// Parse the first `N` tokens as floats. The caller has checked the length.
pub(crate) fn parse_leading<const N: usize>(
    tokens: &Tokens<'_>,
    line: &Line,
) -> Result<[f64; N], FormatError> {
    let mut out = [0.0; N];
    for (slot, tok) in out.iter_mut().zip(tokens.iter()) {
        *slot = parse_f64(tok, line)?;
    }
    Ok(out)
}

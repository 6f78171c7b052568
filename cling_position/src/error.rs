// Copyright 2026 the Cling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors produced while parsing placement strings.

use alloc::string::String;

/// Error returned when a position, collision, or offset string does not match its grammar.
///
/// Malformed input is always rejected; the parser never substitutes a default.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The string contained no tokens.
    #[error("expected one or two tokens, found none")]
    Empty,
    /// The string contained more than two whitespace separated tokens.
    #[error("expected one or two tokens, found {found}")]
    TooManyTokens {
        /// Number of tokens found.
        found: usize,
    },
    /// A token did not have the shape `keyword|N%` with an optional `+N`/`-N` suffix.
    #[error("malformed position token `{0}`")]
    MalformedToken(String),
    /// A token used a keyword outside `left top right bottom center middle`.
    #[error("unknown position keyword `{0}`")]
    UnknownKeyword(String),
    /// A collision token other than `none` or `fit`.
    #[error("unknown collision mode `{0}`, expected `none` or `fit`")]
    UnknownCollision(String),
    /// An offset token that is not a signed integer.
    #[error("malformed pixel offset `{0}`")]
    MalformedOffset(String),
    /// A numeric part of a token does not fit the pixel range.
    #[error("number out of range in `{0}`")]
    NumberOutOfRange(String),
}

/// Splits a string into one or two whitespace separated tokens.
///
/// A single token is repeated for both axes.
pub(crate) fn split_axes(s: &str) -> Result<(&str, &str), ParseError> {
    let mut tokens = s.split_whitespace();
    let Some(x) = tokens.next() else {
        return Err(ParseError::Empty);
    };
    let y = tokens.next().unwrap_or(x);
    let rest = tokens.count();
    if rest > 0 {
        return Err(ParseError::TooManyTokens { found: rest + 2 });
    }
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_token_is_repeated() {
        assert_eq!(split_axes("  left "), Ok(("left", "left")));
    }

    #[test]
    fn two_tokens_split_on_any_whitespace() {
        assert_eq!(split_axes("left\t top"), Ok(("left", "top")));
    }

    #[test]
    fn empty_and_excess_tokens_are_rejected() {
        assert_eq!(split_axes("   "), Err(ParseError::Empty));
        assert_eq!(
            split_axes("left top center bottom"),
            Err(ParseError::TooManyTokens { found: 4 })
        );
    }
}

// Copyright 2026 the Cling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::ToString;
use core::str::FromStr;

use crate::error::ParseError;

/// A whole-pixel nudge per axis.
///
/// Parsed from an empty string (no nudge), one signed integer (horizontal only),
/// or two signed integers separated by whitespace (`"x y"`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelOffset {
    /// Horizontal nudge in pixels.
    pub x: i32,
    /// Vertical nudge in pixels.
    pub y: i32,
}

impl PixelOffset {
    /// No nudge.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates an offset from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Parses an offset string such as `""`, `"12"` or `"-4 8"`.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let mut tokens = s.split_whitespace();
        let x = tokens.next().map(parse_pixels).transpose()?.unwrap_or(0);
        let y = tokens.next().map(parse_pixels).transpose()?.unwrap_or(0);
        let rest = tokens.count();
        if rest > 0 {
            return Err(ParseError::TooManyTokens { found: rest + 2 });
        }
        Ok(Self { x, y })
    }
}

impl FromStr for PixelOffset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_pixels(token: &str) -> Result<i32, ParseError> {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::MalformedOffset(token.to_string()));
    }
    token
        .parse()
        .map_err(|_| ParseError::NumberOutOfRange(token.to_string()))
}

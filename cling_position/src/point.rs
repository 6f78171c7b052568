// Copyright 2026 the Cling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position tokens: a fraction along an axis plus a pixel offset.
//!
//! Grammar per axis token (no inner whitespace):
//!
//! ```text
//! token   = (keyword | digits "%") [("+" | "-") digits]
//! keyword = "left" | "top" | "right" | "bottom" | "center" | "middle"
//! ```
//!
//! Keywords only name a fraction. The axis is chosen by where the token sits in
//! a position string (first is horizontal, second is vertical), so `"top left"`
//! is the same point as `"left top"`.

use alloc::string::ToString;
use core::str::FromStr;

use crate::error::{ParseError, split_axes};
use crate::offset::PixelOffset;

/// A point along one axis of a box.
///
/// `fraction` locates the point relative to the box extent (`0.0` is the start
/// edge, `0.5` the center, `1.0` the end edge) and `offset` nudges it by whole
/// pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisPoint {
    /// Fraction of the box extent.
    pub fraction: f64,
    /// Pixel offset added after the fraction is resolved.
    pub offset: i32,
}

impl AxisPoint {
    /// The start edge (`left` / `top`).
    pub const START: Self = Self::new(0.0, 0);
    /// The midpoint (`center` / `middle`).
    pub const CENTER: Self = Self::new(0.5, 0);
    /// The end edge (`right` / `bottom`).
    pub const END: Self = Self::new(1.0, 0);

    /// Creates an axis point from a fraction and a pixel offset.
    #[must_use]
    pub const fn new(fraction: f64, offset: i32) -> Self {
        Self { fraction, offset }
    }

    /// Returns this point with `extra` pixels added to its offset.
    #[must_use]
    pub const fn nudged(self, extra: i32) -> Self {
        Self {
            fraction: self.fraction,
            offset: self.offset.saturating_add(extra),
        }
    }

    /// Parses a single axis token such as `"right"`, `"30%"` or `"center-12"`.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        let token = token.trim();
        let split = token.find(['+', '-']).unwrap_or(token.len());
        let (body, offset) = token.split_at(split);

        let fraction = if let Some(digits) = body.strip_suffix('%') {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::MalformedToken(token.to_string()));
            }
            let percent: u32 = digits
                .parse()
                .map_err(|_| ParseError::NumberOutOfRange(token.to_string()))?;
            f64::from(percent) / 100.0
        } else if !body.is_empty() && body.bytes().all(|b| b.is_ascii_lowercase()) {
            keyword_fraction(body).ok_or_else(|| ParseError::UnknownKeyword(body.to_string()))?
        } else {
            return Err(ParseError::MalformedToken(token.to_string()));
        };

        let offset = if offset.is_empty() {
            0
        } else {
            let digits = &offset[1..];
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::MalformedToken(token.to_string()));
            }
            offset
                .parse()
                .map_err(|_| ParseError::NumberOutOfRange(token.to_string()))?
        };

        Ok(Self { fraction, offset })
    }
}

impl FromStr for AxisPoint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn keyword_fraction(keyword: &str) -> Option<f64> {
    match keyword {
        "left" | "top" => Some(0.0),
        "right" | "bottom" => Some(1.0),
        "center" | "middle" => Some(0.5),
        _ => None,
    }
}

/// A point on a box: one [`AxisPoint`] per axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position {
    /// Horizontal component.
    pub x: AxisPoint,
    /// Vertical component.
    pub y: AxisPoint,
}

impl Position {
    /// The center of the box.
    pub const CENTER: Self = Self::new(AxisPoint::CENTER, AxisPoint::CENTER);

    /// Creates a position from its two axis points.
    #[must_use]
    pub const fn new(x: AxisPoint, y: AxisPoint) -> Self {
        Self { x, y }
    }

    /// Returns this position with a pixel offset folded into both axes.
    #[must_use]
    pub const fn nudged(self, offset: PixelOffset) -> Self {
        Self {
            x: self.x.nudged(offset.x),
            y: self.y.nudged(offset.y),
        }
    }

    /// Parses a position string such as `"left top"`, `"50% 10"` or `"right-20"`.
    ///
    /// Two tokens are `(x, y)`. A single token is used for both axes, so
    /// `"center"` is the same as `"center center"`.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let (x, y) = split_axes(s)?;
        Ok(Self {
            x: AxisPoint::parse(x)?,
            y: AxisPoint::parse(y)?,
        })
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

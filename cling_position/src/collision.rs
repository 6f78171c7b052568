// Copyright 2026 the Cling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::ToString;
use core::str::FromStr;

use crate::error::{ParseError, split_axes};

/// What to do when the placed box leaves its containment box on one axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Collision {
    /// Leave the computed position alone.
    #[default]
    None,
    /// Clamp the position so the box stays inside the containment box.
    Fit,
}

impl FromStr for Collision {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "none" => Ok(Self::None),
            "fit" => Ok(Self::Fit),
            other => Err(ParseError::UnknownCollision(other.to_string())),
        }
    }
}

/// Per-axis [`Collision`] modes, parsed from strings like `"fit none"` or `"fit"`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Collisions {
    /// Horizontal mode.
    pub x: Collision,
    /// Vertical mode.
    pub y: Collision,
}

impl Collisions {
    /// No clamping on either axis.
    pub const NONE: Self = Self::new(Collision::None, Collision::None);
    /// Clamping on both axes.
    pub const FIT: Self = Self::new(Collision::Fit, Collision::Fit);

    /// Creates per-axis modes.
    #[must_use]
    pub const fn new(x: Collision, y: Collision) -> Self {
        Self { x, y }
    }

    /// Parses one or two collision tokens; a single token applies to both axes.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let (x, y) = split_axes(s)?;
        Ok(Self {
            x: x.parse()?,
            y: y.parse()?,
        })
    }
}

impl FromStr for Collisions {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

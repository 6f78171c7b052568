// Copyright 2026 the Cling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cling_position --heading-base-level=0

//! Cling Position: the placement grammar and math behind `cling`.
//!
//! This crate answers one question: given the measured rectangle of an
//! *anchor* box and of a *reference* box, what `left`/`top` should the anchor
//! get so that a chosen point on it lands on a chosen point of the reference?
//!
//! It provides:
//! - [`AxisPoint`] / [`Position`]: points on a box, parsed from strings such as
//!   `"left top"`, `"50% 10%"` or `"right-20 bottom+4"`.
//! - [`Collisions`]: per-axis `none`/`fit` handling against a containment box.
//! - [`PixelOffset`]: a whole-pixel nudge, parsed from `"x y"`.
//! - [`Placement`] and [`compute_position`]: the placement math, with optional
//!   clamping and rounding to whole pixels.
//!
//! It does **not** measure anything or touch styles. Hosts measure rectangles
//! in viewport pixels, hand them over in a [`Frame`], and apply the resulting
//! [`PixelPosition`] however they like.
//!
//! ## Minimal example
//!
//! ```rust
//! use cling_position::{Frame, PixelPosition, Placement, Position};
//! use kurbo::Rect;
//!
//! let placement = Placement::new(
//!     Position::parse("center top").unwrap(),
//!     Position::parse("center bottom+8").unwrap(),
//! );
//!
//! // A 40x20 tooltip at the viewport origin, under a 100x30 button at (200, 50).
//! let frame = Frame::new(
//!     Rect::new(0.0, 0.0, 40.0, 20.0),
//!     Rect::new(200.0, 50.0, 300.0, 80.0),
//! );
//! let placed = placement.compute(&frame, PixelPosition::ZERO);
//! assert_eq!(placed, PixelPosition::new(230, 88));
//! ```
//!
//! ## Parsing
//!
//! Malformed strings are errors, never silently defaulted. A single token is
//! applied to both axes:
//!
//! ```rust
//! use cling_position::{AxisPoint, ParseError, Position};
//!
//! assert_eq!(Position::parse("right").unwrap().y, AxisPoint::END);
//! assert_eq!(
//!     Position::parse("left nowhere"),
//!     Err(ParseError::UnknownKeyword("nowhere".into())),
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod collision;
mod compute;
mod error;
mod offset;
mod point;

pub use collision::{Collision, Collisions};
pub use compute::{Containment, Frame, PixelPosition, Placement, compute_position};
pub use error::ParseError;
pub use offset::PixelOffset;
pub use point::{AxisPoint, Position};

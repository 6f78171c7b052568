// Copyright 2026 the Cling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cling --heading-base-level=0

//! Cling: keep one element stuck to another.
//!
//! A [`Cling`] binding positions an *anchor* element so that a chosen point on
//! it sits on a chosen point of a *reference* element (or the window), and
//! keeps it there as the page scrolls, resizes, or any scrollable ancestor of
//! the reference scrolls.
//!
//! The crate does not talk to a browser directly. Everything environmental
//! (measuring boxes, reading and writing inline styles, routing events,
//! scheduling timeouts and animation frames) goes through the [`Host`] trait,
//! and the host calls back into the binding:
//!
//! - [`Cling::handle_event`] for subscribed events,
//! - [`Cling::on_timeout`] for throttle deadlines,
//! - [`Cling::on_animation_frame`] for frame-aligned style writes.
//!
//! The placement grammar and math live in [`cling_position`] and are
//! re-exported here.
//!
//! ## Configuration
//!
//! [`Options`] carries the placement as strings:
//!
//! ```rust
//! use cling::Options;
//!
//! let options = Options::<u32>::default()
//!     .with_from("left top")
//!     .with_to("left bottom+4")
//!     .with_collision("fit none")
//!     .with_delay(50);
//! let placement = options.resolve().unwrap();
//! assert_eq!(placement.to.y.offset, 4);
//! ```
//!
//! Malformed strings are reported when the binding starts, before anything is
//! written to the host:
//!
//! ```rust
//! use cling::Options;
//!
//! let err = Options::<u32>::default().with_from("up").resolve().unwrap_err();
//! assert_eq!(err.option, "from");
//! ```
//!
//! ## Scheduling
//!
//! Triggers go through a leading/trailing [`Throttle`] of `delay`
//! milliseconds, then through a [`FrameGate`] so the anchor's styles are
//! written at most once per animation frame. The initial position is applied
//! synchronously by [`Cling::start`], and [`Cling::force_update`] bypasses
//! both stages. Unchanged positions are never written.
//!
//! ## Features
//!
//! - `serde`: derive `Deserialize`/`Serialize` for [`Options`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binding;
mod host;
mod options;
mod scroll;
mod throttle;

pub use binding::{Cling, Observer};
pub use host::{EventKind, Host, StyleProperty, Target};
pub use options::{Options, OptionsError};
pub use scroll::{ScrollAncestors, find_scroll_ancestors};
pub use throttle::{FrameGate, Throttle, Trigger};

pub use cling_position::{
    AxisPoint, Collision, Collisions, Containment, Frame, ParseError, PixelOffset, PixelPosition,
    Placement, Position, compute_position,
};

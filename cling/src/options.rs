// Copyright 2026 the Cling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use cling_position::{Collisions, ParseError, PixelOffset, Placement, Position};

use crate::host::Target;

/// Binding configuration.
///
/// The string fields use the grammar of [`cling_position`]; they are parsed
/// once, by [`Options::resolve`], when a binding starts.
///
/// | field       | default           |
/// |-------------|-------------------|
/// | `from`      | `"center center"` |
/// | `to`        | `"center center"` |
/// | `offset`    | `""`              |
/// | `collision` | `"none none"`     |
/// | `within`    | `None`            |
/// | `gpu`       | `true`            |
/// | `delay`     | `100`             |
/// | `listen`    | `true`            |
///
/// With the `serde` feature, every field except `within` can be loaded from a
/// config file; missing fields take their defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default, bound = ""))]
pub struct Options<E> {
    /// Point on the anchor element, e.g. `"right top"`.
    pub from: String,
    /// Point on the reference element, e.g. `"left top"`.
    pub to: String,
    /// Extra pixel nudge, `"x"` or `"x y"`, folded into `from`.
    pub offset: String,
    /// Per-axis `none`/`fit` against `within`.
    pub collision: String,
    /// Containment box for `fit` axes.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub within: Option<Target<E>>,
    /// Position with a `transform` translation instead of `left`/`top` when the host supports it.
    pub gpu: bool,
    /// Throttle interval for scroll/resize triggers, in milliseconds.
    pub delay: u64,
    /// Subscribe to window and scroll-ancestor events.
    pub listen: bool,
}

impl<E> Default for Options<E> {
    fn default() -> Self {
        Self {
            from: String::from("center center"),
            to: String::from("center center"),
            offset: String::new(),
            collision: String::from("none none"),
            within: None,
            gpu: true,
            delay: 100,
            listen: true,
        }
    }
}

impl<E> Options<E> {
    /// Sets the anchor point.
    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    /// Sets the reference point.
    #[must_use]
    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = to.into();
        self
    }

    /// Sets the pixel nudge.
    #[must_use]
    pub fn with_offset(mut self, offset: impl Into<String>) -> Self {
        self.offset = offset.into();
        self
    }

    /// Sets per-axis collision handling.
    #[must_use]
    pub fn with_collision(mut self, collision: impl Into<String>) -> Self {
        self.collision = collision.into();
        self
    }

    /// Sets the containment box.
    #[must_use]
    pub fn with_within(mut self, within: impl Into<Target<E>>) -> Self {
        self.within = Some(within.into());
        self
    }

    /// Enables or disables `transform` positioning.
    #[must_use]
    pub fn with_gpu(mut self, gpu: bool) -> Self {
        self.gpu = gpu;
        self
    }

    /// Sets the throttle interval in milliseconds.
    #[must_use]
    pub fn with_delay(mut self, delay: u64) -> Self {
        self.delay = delay;
        self
    }

    /// Enables or disables event subscriptions.
    #[must_use]
    pub fn with_listen(mut self, listen: bool) -> Self {
        self.listen = listen;
        self
    }

    /// Parses the string fields into a [`Placement`], folding `offset` into `from`.
    pub fn resolve(&self) -> Result<Placement, OptionsError> {
        let offset = PixelOffset::parse(&self.offset).map_err(OptionsError::at("offset"))?;
        let from = Position::parse(&self.from).map_err(OptionsError::at("from"))?;
        let to = Position::parse(&self.to).map_err(OptionsError::at("to"))?;
        let collision = Collisions::parse(&self.collision).map_err(OptionsError::at("collision"))?;
        Ok(Placement::new(from.nudged(offset), to).with_collision(collision))
    }
}

/// Error returned when an [`Options`] string field fails to parse.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid `{option}` option: {source}")]
pub struct OptionsError {
    /// Name of the offending field.
    pub option: &'static str,
    /// What was wrong with it.
    pub source: ParseError,
}

impl OptionsError {
    fn at(option: &'static str) -> impl FnOnce(ParseError) -> Self {
        move |source| Self { option, source }
    }
}

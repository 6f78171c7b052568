// Copyright 2026 the Cling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement math: put a point of the anchor box on a point of the reference box.
//!
//! All rectangles are in viewport pixels. The output is the `left`/`top` value
//! to write on the anchor, relative to whatever origin the anchor is positioned
//! against. That origin is never measured directly: the previously applied
//! value is added back, because the anchor's measured rectangle already
//! contains it.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

use crate::collision::{Collision, Collisions};
use crate::point::{AxisPoint, Position};

/// A position in whole pixels, as written to `left`/`top` or a translation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelPosition {
    /// Horizontal coordinate.
    pub left: i32,
    /// Vertical coordinate.
    pub top: i32,
}

impl PixelPosition {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a pixel position.
    #[must_use]
    pub const fn new(left: i32, top: i32) -> Self {
        Self { left, top }
    }
}

/// Containment box used by [`Collision::Fit`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Containment {
    /// Measured rectangle of the containment element.
    pub bounds: Rect,
    /// Viewport origin of the anchor's positioned ancestor, or [`Point::ZERO`]
    /// when the anchor is positioned against the viewport.
    pub origin: Point,
}

impl Containment {
    /// Containment against the viewport origin.
    #[must_use]
    pub const fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            origin: Point::ZERO,
        }
    }

    /// Sets the origin of the anchor's positioned ancestor.
    #[must_use]
    pub const fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }
}

/// The rectangles measured for one recomputation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    /// The box being positioned, as currently laid out.
    pub anchor: Rect,
    /// The box being positioned against.
    pub reference: Rect,
    /// Optional containment for [`Collision::Fit`] axes.
    pub containment: Option<Containment>,
}

impl Frame {
    /// Creates a frame without containment.
    #[must_use]
    pub const fn new(anchor: Rect, reference: Rect) -> Self {
        Self {
            anchor,
            reference,
            containment: None,
        }
    }

    /// Adds a containment box.
    #[must_use]
    pub const fn with_containment(mut self, containment: Containment) -> Self {
        self.containment = Some(containment);
        self
    }
}

/// A normalized placement: which anchor point goes on which reference point,
/// and how each axis reacts to leaving the containment box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Point on the anchor box.
    pub from: Position,
    /// Point on the reference box.
    pub to: Position,
    /// Per-axis collision handling.
    pub collision: Collisions,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            from: Position::CENTER,
            to: Position::CENTER,
            collision: Collisions::NONE,
        }
    }
}

impl Placement {
    /// Creates a placement without collision handling.
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            collision: Collisions::NONE,
        }
    }

    /// Sets per-axis collision handling.
    #[must_use]
    pub const fn with_collision(mut self, collision: Collisions) -> Self {
        self.collision = collision;
        self
    }

    /// Computes the rounded `left`/`top` for the anchor.
    ///
    /// `prior` is the value currently applied to the anchor. Feeding each
    /// result back in as the next `prior` (while the boxes stay put and the
    /// host re-lays out the anchor) yields the same result every time.
    #[must_use]
    pub fn compute(&self, frame: &Frame, prior: PixelPosition) -> PixelPosition {
        let left = self.axis(Axis::Horizontal, frame, prior.left);
        let top = self.axis(Axis::Vertical, frame, prior.top);
        PixelPosition::new(left, top)
    }

    fn axis(&self, axis: Axis, frame: &Frame, prior: i32) -> i32 {
        let from = axis.point(&self.from);
        let to = axis.point(&self.to);
        let anchor_start = axis.start(frame.anchor);
        let anchor_extent = axis.extent(frame.anchor);

        let mut value = axis.extent(frame.reference) * to.fraction
            - anchor_extent * from.fraction
            + (axis.start(frame.reference) - anchor_start)
            + f64::from(from.offset)
            + f64::from(to.offset)
            + f64::from(prior);

        if let Some(containment) = frame.containment
            && axis.collision(self.collision) == Collision::Fit
        {
            let min = axis.start(containment.bounds) - axis.coord(containment.origin);
            let max = min + axis.extent(containment.bounds) - anchor_extent;
            value = fit(value, min, max);
        }

        round_pixel(value)
    }
}

/// Computes the anchor position with no collision handling.
///
/// Per axis:
///
/// ```text
/// reference.extent * to.fraction
///   - anchor.extent * from.fraction
///   + (reference.start - anchor.start)
///   + from.offset + to.offset
///   + prior
/// ```
///
/// ```
/// use cling_position::{PixelPosition, Position, compute_position};
/// use kurbo::Rect;
///
/// // Anchor 50x20 at the viewport origin, reference 200x100 at (300, 300).
/// let anchor = Rect::new(0.0, 0.0, 50.0, 20.0);
/// let reference = Rect::new(300.0, 300.0, 500.0, 400.0);
/// let from: Position = "right top".parse().unwrap();
/// let to: Position = "left top".parse().unwrap();
///
/// let pos = compute_position(anchor, reference, from, to, PixelPosition::ZERO);
/// assert_eq!(pos, PixelPosition::new(250, 300));
/// ```
#[must_use]
pub fn compute_position(
    anchor: Rect,
    reference: Rect,
    from: Position,
    to: Position,
    prior: PixelPosition,
) -> PixelPosition {
    Placement::new(from, to).compute(&Frame::new(anchor, reference), prior)
}

#[derive(Copy, Clone, Debug)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn start(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.x0,
            Self::Vertical => rect.y0,
        }
    }

    fn extent(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.width(),
            Self::Vertical => rect.height(),
        }
    }

    fn coord(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    fn point(self, position: &Position) -> AxisPoint {
        match self {
            Self::Horizontal => position.x,
            Self::Vertical => position.y,
        }
    }

    fn collision(self, collisions: Collisions) -> Collision {
        match self {
            Self::Horizontal => collisions.x,
            Self::Vertical => collisions.y,
        }
    }
}

/// Clamps into `[min, max]`; when the box does not fit (`max < min`) the lower bound wins.
pub(crate) fn fit(value: f64, min: f64, max: f64) -> f64 {
    let value = if value <= max { value } else { max };
    if value >= min { value } else { min }
}

/// Rounds half toward positive infinity, so `-2.5` becomes `-2`.
pub(crate) fn round_pixel(value: f64) -> i32 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "viewport pixel coordinates are far inside i32; `as` saturates otherwise"
    )]
    {
        (value + 0.5).floor() as i32
    }
}

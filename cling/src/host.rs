// Copyright 2026 the Cling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capabilities a binding needs from its environment.
//!
//! A host is typically a thin wrapper around a browser DOM, but anything that
//! can measure boxes, read and write a handful of style properties and route
//! a few events will do. Bindings never keep callbacks: the host records what
//! was requested and later calls back into [`Cling`](crate::Cling) itself.

use alloc::string::String;

use kurbo::Rect;

/// Something a binding can measure or listen to: the window or an element.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target<E> {
    /// The window: measured by its scroll offset and viewport size.
    Window,
    /// A document element.
    Element(E),
}

impl<E> Target<E> {
    /// Returns the element, if this target is one.
    #[must_use]
    pub fn element(&self) -> Option<&E> {
        match self {
            Self::Window => None,
            Self::Element(el) => Some(el),
        }
    }
}

impl<E> From<E> for Target<E> {
    fn from(el: E) -> Self {
        Self::Element(el)
    }
}

/// Events a binding subscribes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The window finished loading.
    Load,
    /// The window or a scrollable element scrolled.
    Scroll,
    /// The window was resized.
    Resize,
    /// A touch moved on the window.
    TouchMove,
    /// The window is unloading.
    Unload,
}

impl EventKind {
    /// Window events that trigger a recomputation.
    pub const WINDOW_UPDATES: [Self; 4] = [Self::Load, Self::Scroll, Self::Resize, Self::TouchMove];
}

/// Inline style properties a binding writes on the anchor element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    /// `position`
    Position,
    /// `left`
    Left,
    /// `top`
    Top,
    /// `right`
    Right,
    /// `bottom`
    Bottom,
    /// `transform`
    Transform,
}

impl StyleProperty {
    /// Every property a binding may write, in the order they are saved and restored.
    pub const ALL: [Self; 6] = [
        Self::Position,
        Self::Left,
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::Transform,
    ];

    /// The CSS property name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Left => "left",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Transform => "transform",
        }
    }
}

/// Environment capabilities used by [`Cling`](crate::Cling) and
/// [`find_scroll_ancestors`](crate::find_scroll_ancestors).
///
/// Measurements are in viewport pixels. Detached elements are expected to
/// measure as zero-sized rectangles at the origin rather than fail.
pub trait Host {
    /// Element handle. Cheap to clone; equality means "same element".
    type Element: Clone + PartialEq;

    /// The window's scroll offset (as the origin) and viewport size.
    fn window_rect(&self) -> Rect;

    /// The element's bounding client rectangle.
    fn element_rect(&self, el: &Self::Element) -> Rect;

    /// The parent element, or `None` at the document root.
    fn parent_element(&self, el: &Self::Element) -> Option<Self::Element>;

    /// The nearest positioned ancestor the element is laid out against.
    fn offset_parent(&self, el: &Self::Element) -> Option<Self::Element>;

    /// A computed style value, e.g. `computed_style(el, "overflow-y")`.
    fn computed_style(&self, el: &Self::Element, property: &str) -> String;

    /// The element's inline value for `property`; empty when unset.
    fn inline_style(&self, el: &Self::Element, property: StyleProperty) -> String;

    /// Sets an inline style value; an empty value removes the declaration.
    fn set_inline_style(&mut self, el: &Self::Element, property: StyleProperty, value: &str);

    /// Whether a 2D translation `transform` is available for positioning.
    fn supports_transform(&self) -> bool;

    /// Starts routing `kind` events on `source` to the binding.
    fn add_listener(&mut self, source: &Target<Self::Element>, kind: EventKind);

    /// Stops routing `kind` events on `source` to the binding.
    fn remove_listener(&mut self, source: &Target<Self::Element>, kind: EventKind);

    /// Asks for [`Cling::on_timeout`](crate::Cling::on_timeout) at or after `deadline` (ms).
    ///
    /// A new request replaces any outstanding one.
    fn request_timeout(&mut self, deadline: u64);

    /// Drops an outstanding timeout request.
    fn cancel_timeout(&mut self);

    /// Asks for [`Cling::on_animation_frame`](crate::Cling::on_animation_frame)
    /// before the next paint.
    fn request_animation_frame(&mut self);

    /// Drops an outstanding animation frame request.
    fn cancel_animation_frame(&mut self);

    /// Measures a target.
    fn measure(&self, target: &Target<Self::Element>) -> Rect {
        match target {
            Target::Window => self.window_rect(),
            Target::Element(el) => self.element_rect(el),
        }
    }
}

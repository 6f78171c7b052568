// Copyright 2026 the Cling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The binding that keeps one element anchored to another.
//!
//! ## Lifecycle
//!
//! 1) [`Cling::start`] parses the options, finds the reference element's
//!    scroll ancestors, prepares the anchor's inline styles, positions it once
//!    and (when listening) subscribes to window and ancestor events.
//! 2) The host routes subscribed events to [`Cling::handle_event`], expired
//!    timeouts to [`Cling::on_timeout`] and animation frames to
//!    [`Cling::on_animation_frame`]. Styles are only written on frames, and
//!    only when the rounded position changed.
//! 3) [`Cling::destroy`] cancels pending work, restores the anchor's original
//!    inline styles and unsubscribes. It runs at most once; a window `unload`
//!    triggers it automatically.

use alloc::format;
use alloc::string::String;

use cling_position::{Containment, Frame, PixelPosition, Placement};
use kurbo::Point;

use crate::host::{EventKind, Host, StyleProperty, Target};
use crate::options::{Options, OptionsError};
use crate::scroll::{ScrollAncestors, find_scroll_ancestors};
use crate::throttle::{FrameGate, Throttle, Trigger};

/// Lifecycle hooks for a [`Cling`] binding.
///
/// Every method has an empty default, so implementors only override what they
/// need. `()` is the no-op observer.
pub trait Observer {
    /// Called before each recomputation, including ones that end up unchanged.
    fn before_position(&mut self) {}

    /// Called after a new position has been written to the anchor.
    fn positioned(&mut self, _position: PixelPosition) {}

    /// Called at the start of [`Cling::destroy`].
    fn before_destroy(&mut self) {}

    /// Called once [`Cling::destroy`] has released everything.
    fn destroyed(&mut self) {}
}

impl Observer for () {}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Active,
    Destroyed,
}

/// Keeps an anchor element positioned against a reference.
///
/// `E` is the host's element handle and `O` an optional [`Observer`].
/// A binding owns its subscriptions and its last applied position; it does
/// not release them on drop, so call [`Cling::destroy`] when done.
#[derive(Debug)]
pub struct Cling<E, O = ()> {
    anchor: E,
    reference: Target<E>,
    within: Option<Target<E>>,
    placement: Placement,
    use_transform: bool,
    listen: bool,
    scroll_ancestors: ScrollAncestors<E>,
    applied: PixelPosition,
    saved_styles: [String; 6],
    throttle: Throttle,
    frame: FrameGate,
    state: State,
    observer: O,
}

impl<E: Clone + PartialEq> Cling<E> {
    /// Binds `anchor` to `reference` and applies the initial position.
    ///
    /// Fails only if an option string is malformed, in which case nothing has
    /// been written to the host.
    pub fn start<H>(
        host: &mut H,
        anchor: E,
        reference: impl Into<Target<E>>,
        options: &Options<E>,
    ) -> Result<Self, OptionsError>
    where
        H: Host<Element = E> + ?Sized,
    {
        Self::start_with_observer(host, anchor, reference, options, ())
    }
}

impl<E: Clone + PartialEq, O: Observer> Cling<E, O> {
    /// Like [`Cling::start`], reporting lifecycle events to `observer`.
    pub fn start_with_observer<H>(
        host: &mut H,
        anchor: E,
        reference: impl Into<Target<E>>,
        options: &Options<E>,
        observer: O,
    ) -> Result<Self, OptionsError>
    where
        H: Host<Element = E> + ?Sized,
    {
        let placement = options.resolve()?;
        let reference = reference.into();
        let scroll_ancestors = match reference.element() {
            Some(el) => find_scroll_ancestors(&*host, el),
            None => ScrollAncestors::new(),
        };

        let saved_styles = StyleProperty::ALL.map(|property| host.inline_style(&anchor, property));
        if host.computed_style(&anchor, "position").trim() != "fixed" {
            host.set_inline_style(&anchor, StyleProperty::Position, "absolute");
        }
        host.set_inline_style(&anchor, StyleProperty::Left, "0px");
        host.set_inline_style(&anchor, StyleProperty::Top, "0px");
        host.set_inline_style(&anchor, StyleProperty::Right, "auto");
        host.set_inline_style(&anchor, StyleProperty::Bottom, "auto");
        host.set_inline_style(&anchor, StyleProperty::Transform, "");

        let use_transform = options.gpu && host.supports_transform();
        log::debug!(
            "cling: binding anchor ({} scroll ancestors, transform: {use_transform}, delay: {}ms)",
            scroll_ancestors.len(),
            options.delay,
        );

        let mut binding = Self {
            anchor,
            reference,
            within: options.within.clone(),
            placement,
            use_transform,
            listen: options.listen,
            scroll_ancestors,
            applied: PixelPosition::ZERO,
            saved_styles,
            throttle: Throttle::new(options.delay),
            frame: FrameGate::new(),
            state: State::Active,
            observer,
        };

        binding.position(host);
        if binding.listen {
            binding.subscribe(host);
        }
        Ok(binding)
    }

    /// Routes a subscribed event into the binding.
    ///
    /// `now` is a monotonic timestamp in milliseconds. `Unload` destroys the
    /// binding; every other kind goes through the throttle.
    pub fn handle_event<H>(&mut self, host: &mut H, kind: EventKind, now: u64)
    where
        H: Host<Element = E> + ?Sized,
    {
        if self.is_destroyed() {
            return;
        }
        if kind == EventKind::Unload {
            self.destroy(host);
            return;
        }
        match self.throttle.trigger(now) {
            Trigger::Run { superseded } => {
                if superseded {
                    host.cancel_timeout();
                }
                self.request_frame(host);
            }
            Trigger::Scheduled(deadline) => host.request_timeout(deadline),
            Trigger::Coalesced => log::trace!("cling: coalesced {kind:?} trigger"),
        }
    }

    /// Delivers a timeout requested through [`Host::request_timeout`].
    pub fn on_timeout<H>(&mut self, host: &mut H, now: u64)
    where
        H: Host<Element = E> + ?Sized,
    {
        if self.is_destroyed() {
            return;
        }
        if self.throttle.poll(now) {
            self.request_frame(host);
        } else if let Some(deadline) = self.throttle.pending() {
            // Fired early; ask again.
            host.request_timeout(deadline);
        }
    }

    /// Delivers an animation frame requested through [`Host::request_animation_frame`].
    pub fn on_animation_frame<H>(&mut self, host: &mut H)
    where
        H: Host<Element = E> + ?Sized,
    {
        if self.is_destroyed() {
            return;
        }
        if self.frame.take() {
            self.position(host);
        }
    }

    /// Recomputes and applies the position right away, bypassing both throttles.
    ///
    /// Does nothing once destroyed.
    pub fn force_update<H>(&mut self, host: &mut H)
    where
        H: Host<Element = E> + ?Sized,
    {
        if self.is_destroyed() {
            return;
        }
        self.position(host);
    }

    /// Releases the binding: cancels pending work, restores the anchor's
    /// original inline styles and unsubscribes from all events.
    ///
    /// Calling it again is a no-op.
    pub fn destroy<H>(&mut self, host: &mut H)
    where
        H: Host<Element = E> + ?Sized,
    {
        if self.is_destroyed() {
            return;
        }
        self.state = State::Destroyed;
        self.observer.before_destroy();

        if self.throttle.cancel() {
            host.cancel_timeout();
        }
        if self.frame.take() {
            host.cancel_animation_frame();
        }

        for (property, value) in StyleProperty::ALL.into_iter().zip(&self.saved_styles) {
            host.set_inline_style(&self.anchor, property, value);
        }

        if self.listen {
            self.unsubscribe(host);
        }

        log::debug!("cling: binding destroyed");
        self.observer.destroyed();
    }

    /// Returns `true` once [`Cling::destroy`] has run.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.state == State::Destroyed
    }

    /// The position last written to the anchor.
    #[must_use]
    pub fn applied(&self) -> PixelPosition {
        self.applied
    }

    /// The normalized placement this binding maintains.
    #[must_use]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Whether positions are written as a `transform` instead of `left`/`top`.
    #[must_use]
    pub fn uses_transform(&self) -> bool {
        self.use_transform
    }

    /// The reference element's scrollable ancestors, nearest first.
    #[must_use]
    pub fn scroll_ancestors(&self) -> &[E] {
        &self.scroll_ancestors
    }

    /// The anchor element.
    #[must_use]
    pub fn anchor(&self) -> &E {
        &self.anchor
    }

    /// The reference target.
    #[must_use]
    pub fn reference(&self) -> &Target<E> {
        &self.reference
    }

    /// The observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The observer, mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    fn request_frame<H>(&mut self, host: &mut H)
    where
        H: Host<Element = E> + ?Sized,
    {
        if self.frame.request() {
            host.request_animation_frame();
        }
    }

    /// Measures, computes and writes the position if it changed.
    fn position<H>(&mut self, host: &mut H)
    where
        H: Host<Element = E> + ?Sized,
    {
        self.observer.before_position();

        let mut frame = Frame::new(
            host.element_rect(&self.anchor),
            host.measure(&self.reference),
        );
        if let Some(within) = &self.within {
            let origin = host
                .offset_parent(&self.anchor)
                .map_or(Point::ZERO, |parent| host.element_rect(&parent).origin());
            frame = frame.with_containment(Containment::new(host.measure(within)).with_origin(origin));
        }

        let next = self.placement.compute(&frame, self.applied);
        if next == self.applied {
            log::trace!("cling: position unchanged at ({}, {})", next.left, next.top);
            return;
        }

        if self.use_transform {
            let transform = format!(
                "translateX({}px) translateY({}px) translateZ(0)",
                next.left, next.top
            );
            host.set_inline_style(&self.anchor, StyleProperty::Transform, &transform);
        } else {
            host.set_inline_style(&self.anchor, StyleProperty::Left, &format!("{}px", next.left));
            host.set_inline_style(&self.anchor, StyleProperty::Top, &format!("{}px", next.top));
        }
        log::trace!("cling: positioned at ({}, {})", next.left, next.top);

        self.applied = next;
        self.observer.positioned(next);
    }

    fn subscribe<H>(&self, host: &mut H)
    where
        H: Host<Element = E> + ?Sized,
    {
        for kind in EventKind::WINDOW_UPDATES {
            host.add_listener(&Target::Window, kind);
        }
        host.add_listener(&Target::Window, EventKind::Unload);
        for el in &self.scroll_ancestors {
            host.add_listener(&Target::Element(el.clone()), EventKind::Scroll);
        }
    }

    fn unsubscribe<H>(&self, host: &mut H)
    where
        H: Host<Element = E> + ?Sized,
    {
        for kind in EventKind::WINDOW_UPDATES {
            host.remove_listener(&Target::Window, kind);
        }
        host.remove_listener(&Target::Window, EventKind::Unload);
        for el in &self.scroll_ancestors {
            host.remove_listener(&Target::Element(el.clone()), EventKind::Scroll);
        }
    }
}

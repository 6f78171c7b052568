// Copyright 2026 the Cling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recording in-memory host for binding tests.
//!
//! Elements are indices into a node list. Each node has a `base` rectangle:
//! where it lays out with `left: 0; top: 0` and no transform. Measurements add
//! whatever inline `left`/`top`/`transform` has been written, so the anchor
//! moves when the binding positions it, just as in a browser.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]
#![allow(
    dead_code,
    reason = "Each test binary uses a different subset of the helpers."
)]

use std::collections::HashMap;

use cling::{Cling, EventKind, Host, Observer, PixelPosition, StyleProperty, Target};
use kurbo::{Rect, Vec2};

pub(crate) type NodeId = usize;

#[derive(Clone, Debug, Default)]
pub(crate) struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) offset_parent: Option<NodeId>,
    pub(crate) base: Rect,
    pub(crate) computed: HashMap<String, String>,
    pub(crate) inline: HashMap<StyleProperty, String>,
    pub(crate) detached: bool,
}

#[derive(Debug)]
pub(crate) struct MockHost {
    pub(crate) nodes: Vec<Node>,
    pub(crate) window: Rect,
    pub(crate) transform_supported: bool,
    pub(crate) listeners: Vec<(Target<NodeId>, EventKind)>,
    pub(crate) style_writes: usize,
    pub(crate) timeout: Option<u64>,
    pub(crate) frame_pending: bool,
    pub(crate) frame_requests: usize,
}

impl MockHost {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            window: Rect::new(0.0, 0.0, 1024.0, 768.0),
            transform_supported: true,
            listeners: Vec::new(),
            style_writes: 0,
            timeout: None,
            frame_pending: false,
            frame_requests: 0,
        }
    }

    /// Adds a node laid out at `base`.
    pub(crate) fn add(&mut self, parent: Option<NodeId>, base: Rect) -> NodeId {
        self.nodes.push(Node {
            parent,
            base,
            ..Node::default()
        });
        self.nodes.len() - 1
    }

    pub(crate) fn set_computed(&mut self, id: NodeId, property: &str, value: &str) {
        self.nodes[id]
            .computed
            .insert(property.to_owned(), value.to_owned());
    }

    pub(crate) fn set_inline(&mut self, id: NodeId, property: StyleProperty, value: &str) {
        self.nodes[id].inline.insert(property, value.to_owned());
    }

    pub(crate) fn inline(&self, id: NodeId, property: StyleProperty) -> &str {
        self.nodes[id]
            .inline
            .get(&property)
            .map_or("", String::as_str)
    }

    /// Shifts a node's layout box, e.g. to simulate scrolling.
    pub(crate) fn move_by(&mut self, id: NodeId, delta: Vec2) {
        self.nodes[id].base = self.nodes[id].base + delta;
    }

    pub(crate) fn has_listener(&self, source: &Target<NodeId>, kind: EventKind) -> bool {
        self.listeners
            .iter()
            .any(|(s, k)| s == source && *k == kind)
    }

    /// Delivers the pending animation frame, if any.
    pub(crate) fn run_frame<O: Observer>(&mut self, binding: &mut Cling<NodeId, O>) -> bool {
        if !self.frame_pending {
            return false;
        }
        self.frame_pending = false;
        binding.on_animation_frame(self);
        true
    }

    /// Delivers the pending timeout at `now`, if any.
    pub(crate) fn run_timeout<O: Observer>(&mut self, binding: &mut Cling<NodeId, O>, now: u64) -> bool {
        let Some(_deadline) = self.timeout.take() else {
            return false;
        };
        binding.on_timeout(self, now);
        true
    }
}

impl Host for MockHost {
    type Element = NodeId;

    fn window_rect(&self) -> Rect {
        self.window
    }

    fn element_rect(&self, el: &NodeId) -> Rect {
        let node = &self.nodes[*el];
        if node.detached {
            return Rect::ZERO;
        }
        let left = px(self.inline(*el, StyleProperty::Left));
        let top = px(self.inline(*el, StyleProperty::Top));
        node.base + Vec2::new(left, top) + translation(self.inline(*el, StyleProperty::Transform))
    }

    fn parent_element(&self, el: &NodeId) -> Option<NodeId> {
        self.nodes[*el].parent
    }

    fn offset_parent(&self, el: &NodeId) -> Option<NodeId> {
        self.nodes[*el].offset_parent
    }

    fn computed_style(&self, el: &NodeId, property: &str) -> String {
        self.nodes[*el]
            .computed
            .get(property)
            .cloned()
            .unwrap_or_default()
    }

    fn inline_style(&self, el: &NodeId, property: StyleProperty) -> String {
        self.inline(*el, property).to_owned()
    }

    fn set_inline_style(&mut self, el: &NodeId, property: StyleProperty, value: &str) {
        self.style_writes += 1;
        let inline = &mut self.nodes[*el].inline;
        if value.is_empty() {
            inline.remove(&property);
        } else {
            inline.insert(property, value.to_owned());
        }
    }

    fn supports_transform(&self) -> bool {
        self.transform_supported
    }

    fn add_listener(&mut self, source: &Target<NodeId>, kind: EventKind) {
        self.listeners.push((source.clone(), kind));
    }

    fn remove_listener(&mut self, source: &Target<NodeId>, kind: EventKind) {
        if let Some(i) = self
            .listeners
            .iter()
            .position(|(s, k)| s == source && *k == kind)
        {
            self.listeners.remove(i);
        }
    }

    fn request_timeout(&mut self, deadline: u64) {
        self.timeout = Some(deadline);
    }

    fn cancel_timeout(&mut self) {
        self.timeout = None;
    }

    fn request_animation_frame(&mut self) {
        self.frame_pending = true;
        self.frame_requests += 1;
    }

    fn cancel_animation_frame(&mut self) {
        self.frame_pending = false;
    }
}

fn px(value: &str) -> f64 {
    value
        .strip_suffix("px")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0.0)
}

fn translation(value: &str) -> Vec2 {
    let mut out = Vec2::ZERO;
    for part in value.split_whitespace() {
        if let Some(x) = part.strip_prefix("translateX(").and_then(|p| p.strip_suffix(')')) {
            out.x = px(x);
        } else if let Some(y) = part.strip_prefix("translateY(").and_then(|p| p.strip_suffix(')')) {
            out.y = px(y);
        }
    }
    out
}

/// Records every observer callback in order.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) log: Vec<Event>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    BeforePosition,
    Positioned(PixelPosition),
    BeforeDestroy,
    Destroyed,
}

impl Observer for Recorder {
    fn before_position(&mut self) {
        self.log.push(Event::BeforePosition);
    }

    fn positioned(&mut self, position: PixelPosition) {
        self.log.push(Event::Positioned(position));
    }

    fn before_destroy(&mut self) {
        self.log.push(Event::BeforeDestroy);
    }

    fn destroyed(&mut self) {
        self.log.push(Event::Destroyed);
    }
}

/// `x, y, width, height` shorthand.
pub(crate) fn rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(x, y, x + width, y + height)
}

// Copyright 2026 the Cling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::host::Host;

/// Ancestors found by [`find_scroll_ancestors`], nearest first.
pub type ScrollAncestors<E> = SmallVec<[E; 4]>;

const OVERFLOW_PROPERTIES: [&str; 3] = ["overflow", "overflow-x", "overflow-y"];

/// Walks up from `el` and collects every ancestor that can scroll.
///
/// An ancestor can scroll when any of its computed `overflow`, `overflow-x`
/// or `overflow-y` values contains `auto` or `scroll` (case-insensitive).
/// The walk stops at the document root; `el` itself is never included.
pub fn find_scroll_ancestors<H>(host: &H, el: &H::Element) -> ScrollAncestors<H::Element>
where
    H: Host + ?Sized,
{
    let mut found = ScrollAncestors::new();
    let mut current = host.parent_element(el);
    while let Some(ancestor) = current {
        current = host.parent_element(&ancestor);
        if can_scroll(host, &ancestor) {
            found.push(ancestor);
        }
    }
    found
}

fn can_scroll<H>(host: &H, el: &H::Element) -> bool
where
    H: Host + ?Sized,
{
    OVERFLOW_PROPERTIES.iter().any(|property| {
        let value = host.computed_style(el, property).to_ascii_lowercase();
        value.contains("auto") || value.contains("scroll")
    })
}

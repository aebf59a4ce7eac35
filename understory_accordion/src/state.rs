// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single piece of shared accordion state.

use alloc::string::{String, ToString};

/// The identifier of the expanded panel, or none.
///
/// The only mutation is [`toggle`](Self::toggle), so at most one item is ever
/// active. An empty identifier never becomes active.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ActiveItem {
    item: Option<String>,
}

impl ActiveItem {
    /// No active item.
    #[must_use]
    pub const fn new() -> Self {
        Self { item: None }
    }

    /// The active item, if any.
    #[must_use]
    pub fn get(&self) -> Option<&str> {
        self.item.as_deref()
    }

    /// Returns `true` if `item` is the active item.
    #[must_use]
    pub fn is(&self, item: &str) -> bool {
        self.get() == Some(item)
    }

    /// Returns `true` if nothing is active.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.item.is_none()
    }

    /// Clears the active item if it equals `item`, otherwise makes `item` active.
    ///
    /// An empty `item` clears. Returns `true` if the active item changed.
    pub fn toggle(&mut self, item: &str) -> bool {
        let next = if item.is_empty() || self.is(item) {
            None
        } else {
            Some(item.to_string())
        };
        if next == self.item {
            return false;
        }
        self.item = next;
        true
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The accordion subject: active-item state plus its observer registry.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use understory_dom::Document;

use crate::state::ActiveItem;

/// A unit of rendering logic reacting to active-item changes.
///
/// Observers are independent: each reads only the new state and the subtree
/// it was bound to, and none relies on another having run first.
pub trait Observer<D: Document> {
    /// Re-renders this observer's concern for `state`.
    fn update(&mut self, doc: &mut D, state: &ActiveItem);
}

/// A registered observer. Identity is the allocation, so the same `Rc`
/// subscribed twice is one subscription.
pub type SharedObserver<D> = Rc<RefCell<dyn Observer<D>>>;

/// Holds the active item and notifies subscribed observers on every toggle.
///
/// All methods take `&self`: the subject is shared (click listeners hold an
/// `Rc` to it) and no borrow of its state or registry is held while observers
/// run. An observer may therefore subscribe or unsubscribe observers from
/// inside [`Observer::update`]; the change applies from the next pass.
pub struct Accordion<D: Document> {
    state: RefCell<ActiveItem>,
    observers: RefCell<Vec<SharedObserver<D>>>,
}

impl<D: Document> fmt::Debug for Accordion<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accordion")
            .field("state", &self.state)
            .field("observers", &self.observer_count())
            .finish()
    }
}

impl<D: Document> Default for Accordion<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Document> Accordion<D> {
    /// Creates an accordion with nothing active and no observers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: RefCell::new(ActiveItem::new()),
            observers: RefCell::new(Vec::new()),
        }
    }

    /// A copy of the current state.
    #[must_use]
    pub fn state(&self) -> ActiveItem {
        self.state.borrow().clone()
    }

    /// The active item, if any.
    #[must_use]
    pub fn active_item(&self) -> Option<String> {
        self.state.borrow().get().map(String::from)
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Returns `true` if `observer` is registered.
    #[must_use]
    pub fn is_subscribed(&self, observer: &SharedObserver<D>) -> bool {
        self.position(observer).is_some()
    }

    /// Registers `observer` unless it is already registered.
    ///
    /// Returns `true` if it was newly added.
    pub fn subscribe(&self, observer: SharedObserver<D>) -> bool {
        if self.is_subscribed(&observer) {
            return false;
        }
        let mut observers = self.observers.borrow_mut();
        observers.push(observer);
        #[cfg(feature = "tracing")]
        tracing::debug!(observers = observers.len(), "accordion observer subscribed");
        true
    }

    /// Removes `observer` if registered; returns `true` if it was removed.
    pub fn unsubscribe(&self, observer: &SharedObserver<D>) -> bool {
        let Some(pos) = self.position(observer) else {
            return false;
        };
        let mut observers = self.observers.borrow_mut();
        observers.remove(pos);
        #[cfg(feature = "tracing")]
        tracing::debug!(observers = observers.len(), "accordion observer unsubscribed");
        true
    }

    /// Toggles `item` (see [`ActiveItem::toggle`]) and notifies every observer.
    ///
    /// Observers are notified even when the state did not change, so a
    /// toggle always re-renders.
    pub fn toggle(&self, doc: &mut D, item: &str) {
        self.state.borrow_mut().toggle(item);
        #[cfg(feature = "tracing")]
        tracing::debug!(item, active = ?self.state.borrow().get(), "accordion toggled");
        self.notify(doc);
    }

    /// Calls [`Observer::update`] on each registered observer in registration order.
    ///
    /// The registry and state are snapshotted first; observers subscribed or
    /// removed during the pass do not change who is called in it.
    pub fn notify(&self, doc: &mut D) {
        let snapshot = self.observers.borrow().clone();
        let state = self.state();
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("accordion_notify", observers = snapshot.len()).entered();
        for observer in snapshot {
            observer.borrow_mut().update(doc, &state);
        }
    }

    fn position(&self, observer: &SharedObserver<D>) -> Option<usize> {
        let target = Rc::as_ptr(observer).cast::<()>();
        self.observers
            .borrow()
            .iter()
            .position(|o| Rc::as_ptr(o).cast::<()>() == target)
    }
}

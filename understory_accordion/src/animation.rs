// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Height animation for opening and closing panels.
//!
//! The observer remembers which item was active on its previous update. On
//! each update it collapses that item's panel and expands the new one:
//!
//! - **Collapse**: the panel is un-hidden so its transition is visible, its
//!   height is forced to `0px` and its content-animation flag set to
//!   `"false"`. A one-shot `transitionend` listener hides it again and clears
//!   the height override once the transition finishes, unless the observer
//!   has expanded the same item again in the meantime.
//! - **Expand**: the panel's natural height is measured, its height forced to
//!   `0px`, and two animation frames later the height is set to the measured
//!   value with the flag set to `"true"`.
//!
//! The two frames matter: a host may batch a single deferred write with the
//! synchronous `0px` write, leaving nothing to transition from. The second
//! frame guarantees a frame with `0px` has been committed first.
//!
//! There is no cancellation. If a panel's transition never ends (for example
//! the panel was removed from the document), its listener never runs.

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;

use understory_dom::{Document, EventKind, Listener};

use crate::markers::{HIDDEN, Markers};
use crate::scope::Scope;
use crate::state::ActiveItem;
use crate::subject::Observer;

const HEIGHT: &str = "height";
const ZERO_HEIGHT: &str = "0px";

/// Animates panel height across consecutive updates.
#[derive(Debug)]
pub struct AnimationObserver<D: Document> {
    scope: Scope<D>,
    // Shared with pending collapse listeners.
    expanded: Rc<RefCell<Option<String>>>,
}

impl<D: Document> AnimationObserver<D> {
    /// Binds to the root matching `root_selector` and writes the animation flags.
    ///
    /// Controls are flagged as animating right away; panels only once they
    /// have been expanded.
    pub fn new(doc: &mut D, root_selector: &str, markers: Markers) -> Self {
        let observer = Self {
            scope: Scope::new(doc, root_selector, markers),
            expanded: Rc::new(RefCell::new(None)),
        };
        for control in observer.scope.controls(doc) {
            doc.set_attribute(&control, markers.control_animation, "true");
        }
        for content in observer.scope.contents(doc) {
            doc.set_attribute(&content, markers.content_animation, "false");
        }
        observer
    }

    /// The observer's scope.
    pub fn scope(&self) -> &Scope<D> {
        &self.scope
    }

    /// The item that was active after the previous update.
    pub fn previous(&self) -> Option<String> {
        self.expanded.borrow().clone()
    }

    fn collapse(&self, doc: &mut D, item: &str) {
        let Some(content) = self.scope.active_content(doc, Some(item)) else {
            return;
        };
        let flag = self.scope.markers().content_animation;
        doc.remove_attribute(&content, HIDDEN);
        doc.set_style(&content, HEIGHT, Some(ZERO_HEIGHT));
        doc.set_attribute(&content, flag, "false");
        let expanded = Rc::clone(&self.expanded);
        let item = String::from(item);
        doc.add_listener(
            &content,
            EventKind::TransitionEnd,
            Listener::once(move |doc: &mut D, content: &D::Element| {
                // Reopened before the collapse finished.
                if expanded.borrow().as_deref() == Some(item.as_str()) {
                    return;
                }
                doc.set_attribute(content, HIDDEN, "true");
                doc.set_style(content, HEIGHT, None);
            }),
        );
    }

    fn expand(&self, doc: &mut D, item: Option<&str>) {
        let Some(content) = self.scope.active_content(doc, item) else {
            return;
        };
        let flag = self.scope.markers().content_animation;
        // A collapse that never finished leaves a `0px` override behind.
        doc.set_style(&content, HEIGHT, None);
        let target = doc.offset_height(&content);
        doc.set_style(&content, HEIGHT, Some(ZERO_HEIGHT));
        doc.request_animation_frame(Box::new(move |doc: &mut D| {
            doc.request_animation_frame(Box::new(move |doc: &mut D| {
                doc.set_style(&content, HEIGHT, Some(&format!("{target}px")));
                doc.set_attribute(&content, flag, "true");
            }));
        }));
    }
}

impl<D: Document> Observer<D> for AnimationObserver<D> {
    fn update(&mut self, doc: &mut D, state: &ActiveItem) {
        let previous = self.expanded.replace(state.get().map(String::from));
        if let Some(previous) = previous {
            self.collapse(doc, &previous);
        }
        self.expand(doc, state.get());
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessibility attribute bookkeeping.

use understory_dom::Document;

use crate::markers::{ARIA_CONTROLS, ARIA_EXPANDED, Markers};
use crate::scope::Scope;
use crate::state::ActiveItem;
use crate::subject::Observer;

/// Keeps `aria-expanded` in sync and links controls to their panels.
///
/// On construction every control gets `aria-expanded="false"` and an
/// `aria-controls` naming its item, and every panel gets its item as `id`, so
/// assistive technology can associate the two.
#[derive(Debug)]
pub struct AriaObserver<D: Document> {
    scope: Scope<D>,
}

impl<D: Document> AriaObserver<D> {
    /// Binds to the root matching `root_selector` and writes the initial attributes.
    pub fn new(doc: &mut D, root_selector: &str, markers: Markers) -> Self {
        let observer = Self {
            scope: Scope::new(doc, root_selector, markers),
        };
        observer.link(doc);
        observer
    }

    /// The observer's scope.
    pub fn scope(&self) -> &Scope<D> {
        &self.scope
    }

    fn link(&self, doc: &mut D) {
        let Markers {
            control: control_marker,
            content: content_marker,
            ..
        } = *self.scope.markers();
        for control in self.scope.controls(doc) {
            doc.set_attribute(&control, ARIA_EXPANDED, "false");
            if let Some(item) = doc.attribute(&control, control_marker) {
                doc.set_attribute(&control, ARIA_CONTROLS, &item);
            }
        }
        for content in self.scope.contents(doc) {
            if let Some(item) = doc.attribute(&content, content_marker) {
                doc.set_attribute(&content, "id", &item);
            }
        }
    }
}

impl<D: Document> Observer<D> for AriaObserver<D> {
    fn update(&mut self, doc: &mut D, state: &ActiveItem) {
        let active = self.scope.active_control(doc, state.get());
        for control in self.scope.controls(doc) {
            doc.set_attribute(&control, ARIA_EXPANDED, "false");
        }
        if let Some(control) = active {
            doc.set_attribute(&control, ARIA_EXPANDED, "true");
        }
    }
}

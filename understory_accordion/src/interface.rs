// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panel visibility and expanded markers.

use understory_dom::Document;

use crate::markers::{HIDDEN, Markers};
use crate::scope::Scope;
use crate::state::ActiveItem;
use crate::subject::Observer;

/// Hides every panel except the active one and marks the active pair expanded.
#[derive(Debug)]
pub struct InterfaceObserver<D: Document> {
    scope: Scope<D>,
}

impl<D: Document> InterfaceObserver<D> {
    /// Binds to the root matching `root_selector`.
    pub fn new(doc: &D, root_selector: &str, markers: Markers) -> Self {
        Self {
            scope: Scope::new(doc, root_selector, markers),
        }
    }

    /// The observer's scope.
    pub fn scope(&self) -> &Scope<D> {
        &self.scope
    }

    fn reset(&self, doc: &mut D) {
        let expanded = self.scope.markers().expanded;
        for content in self.scope.contents(doc) {
            doc.set_attribute(&content, HIDDEN, "true");
            doc.set_attribute(&content, expanded, "false");
        }
        for control in self.scope.controls(doc) {
            doc.set_attribute(&control, expanded, "false");
        }
    }
}

impl<D: Document> Observer<D> for InterfaceObserver<D> {
    fn update(&mut self, doc: &mut D, state: &ActiveItem) {
        // Resolve the target pair before the reset touches anything.
        let content = self.scope.active_content(doc, state.get());
        let control = self.scope.active_control(doc, state.get());
        self.reset(doc);

        let Some(content) = content else {
            return;
        };
        let expanded = self.scope.markers().expanded;
        doc.remove_attribute(&content, HIDDEN);
        doc.set_attribute(&content, expanded, "true");
        if let Some(control) = control {
            doc.set_attribute(&control, expanded, "true");
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared queries every observer makes against its scoped root.

use alloc::vec::Vec;
use core::fmt;

use understory_dom::Document;

use crate::markers::Markers;

/// A scoped root element plus the markers used to find controls and panels.
///
/// The root is resolved once, at construction. Controls and panels are
/// re-queried on every call so markup edits between updates are picked up.
/// A root selector that matches nothing yields a scope whose queries are all
/// empty.
pub struct Scope<D: Document> {
    root: Option<D::Element>,
    markers: Markers,
}

impl<D: Document> fmt::Debug for Scope<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("root", &self.root)
            .field("markers", &self.markers)
            .finish()
    }
}

impl<D: Document> Clone for Scope<D> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            markers: self.markers,
        }
    }
}

impl<D: Document> Scope<D> {
    /// Resolves `root_selector` in `doc`.
    pub fn new(doc: &D, root_selector: &str, markers: Markers) -> Self {
        let root = doc.query_selector(root_selector);
        #[cfg(feature = "tracing")]
        if root.is_none() {
            tracing::warn!(root_selector, "accordion root not found; observer is inert");
        }
        Self { root, markers }
    }

    /// A scope over an already resolved root.
    pub fn from_root(root: Option<D::Element>, markers: Markers) -> Self {
        Self { root, markers }
    }

    /// The scoped root, if it was found.
    pub fn root(&self) -> Option<&D::Element> {
        self.root.as_ref()
    }

    /// The marker attribute names.
    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Every control under the root, in document order.
    pub fn controls(&self, doc: &D) -> Vec<D::Element> {
        self.tagged(doc, self.markers.control)
    }

    /// Every content panel under the root, in document order.
    pub fn contents(&self, doc: &D) -> Vec<D::Element> {
        self.tagged(doc, self.markers.content)
    }

    /// The control for `item`, if `item` is set and a control carries it.
    pub fn active_control(&self, doc: &D, item: Option<&str>) -> Option<D::Element> {
        self.lookup(doc, self.markers.control, item)
    }

    /// The content panel for `item`, if `item` is set and a panel carries it.
    pub fn active_content(&self, doc: &D, item: Option<&str>) -> Option<D::Element> {
        self.lookup(doc, self.markers.content, item)
    }

    fn tagged(&self, doc: &D, marker: &str) -> Vec<D::Element> {
        match &self.root {
            Some(root) => doc.descendants_with_attribute(root, marker),
            None => Vec::new(),
        }
    }

    fn lookup(&self, doc: &D, marker: &str, item: Option<&str>) -> Option<D::Element> {
        let item = item.filter(|item| !item.is_empty())?;
        doc.find_descendant(self.root.as_ref()?, marker, item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_dom::MemoryDocument;

    #[test]
    fn queries_are_scoped_to_the_root() {
        let mut doc = MemoryDocument::new();
        let outside = doc.element(doc.body(), "button", &[("data-accordion-control", "a")]);
        let root = doc.element(doc.body(), "div", &[("class", "accordion-js")]);
        let control = doc.element(root, "button", &[("data-accordion-control", "a")]);
        let content = doc.element(root, "div", &[("data-accordion-content", "a")]);

        let scope = Scope::new(&doc, ".accordion-js", Markers::default());
        assert_eq!(scope.controls(&doc), [control]);
        assert_eq!(scope.contents(&doc), [content]);
        assert_eq!(scope.active_control(&doc, Some("a")), Some(control));
        assert_ne!(scope.active_control(&doc, Some("a")), Some(outside));
        assert_eq!(scope.active_content(&doc, Some("b")), None);
        assert_eq!(scope.active_content(&doc, None), None);
        assert_eq!(scope.active_content(&doc, Some("")), None);
    }

    #[test]
    fn queries_are_recomputed() {
        let mut doc = MemoryDocument::new();
        let root = doc.element(doc.body(), "div", &[("class", "accordion-js")]);
        let scope = Scope::new(&doc, ".accordion-js", Markers::default());
        assert!(scope.contents(&doc).is_empty());

        let late = doc.element(root, "div", &[("data-accordion-content", "late")]);
        assert_eq!(scope.active_content(&doc, Some("late")), Some(late));
    }

    #[test]
    fn missing_root_is_inert() {
        let mut doc = MemoryDocument::new();
        doc.element(doc.body(), "button", &[("data-accordion-control", "a")]);
        let scope = Scope::new(&doc, ".nowhere", Markers::default());
        assert!(scope.root().is_none());
        assert!(scope.controls(&doc).is_empty());
        assert_eq!(scope.active_control(&doc, Some("a")), None);
    }
}

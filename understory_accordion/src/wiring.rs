// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click wiring from controls to the subject.

use alloc::rc::Rc;

use understory_dom::{Document, EventKind, Listener};

use crate::markers::Markers;
use crate::scope::Scope;
use crate::subject::Accordion;

/// Attaches a click listener to every control present under the root now.
///
/// Each listener reads its control's marker value and, when non-empty,
/// toggles `accordion`. Controls added later are not wired; there is no event
/// delegation. Returns the number of controls wired.
pub fn bind_controls<D: Document>(
    doc: &mut D,
    root_selector: &str,
    markers: Markers,
    accordion: &Rc<Accordion<D>>,
) -> usize {
    let scope = Scope::<D>::new(doc, root_selector, markers);
    let controls = scope.controls(doc);
    for control in &controls {
        let accordion = Rc::clone(accordion);
        let marker = markers.control;
        doc.add_listener(
            control,
            EventKind::Click,
            Listener::every(move |doc: &mut D, control: &D::Element| {
                let Some(item) = doc.attribute(control, marker) else {
                    return;
                };
                if item.is_empty() {
                    return;
                }
                accordion.toggle(doc, &item);
            }),
        );
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(root_selector, wired = controls.len(), "accordion controls wired");
    controls.len()
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding a [`StepProgress`] to a progress bar, two buttons and step markers.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use understory_dom::{Document, EventKind, Listener};

use crate::progress::{StepProgress, StepperError};

const DISABLED: &str = "disabled";
const WIDTH: &str = "width";

/// Selectors and class names a [`StepIndicator`] binds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepperConfig {
    /// The bar whose width tracks progress.
    pub progress: &'static str,
    /// The "previous" button.
    pub prev: &'static str,
    /// The "next" button.
    pub next: &'static str,
    /// Every step marker, in document order.
    pub steps: &'static str,
    /// Class added to reached steps.
    pub active_class: &'static str,
}

impl StepperConfig {
    /// `#progress`, `#btnPrev`, `#btnNext`, `.circle` and `active`.
    pub const DEFAULT: Self = Self {
        progress: "#progress",
        prev: "#btnPrev",
        next: "#btnNext",
        steps: ".circle",
        active_class: "active",
    };
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A mounted step indicator.
pub struct StepIndicator<D: Document> {
    progress: StepProgress,
    bar: D::Element,
    prev: D::Element,
    next: D::Element,
    steps: Vec<D::Element>,
    active_class: &'static str,
}

impl<D: Document> fmt::Debug for StepIndicator<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepIndicator")
            .field("progress", &self.progress)
            .field("bar", &self.bar)
            .field("prev", &self.prev)
            .field("next", &self.next)
            .field("steps", &self.steps)
            .field("active_class", &self.active_class)
            .finish()
    }
}

fn require<D: Document>(doc: &D, selector: &str) -> Result<D::Element, StepperError> {
    doc.query_selector(selector)
        .ok_or_else(|| StepperError::MissingElement(String::from(selector)))
}

impl<D: Document> StepIndicator<D> {
    /// Resolves the elements named by `config`, wires both buttons and renders
    /// step 1.
    ///
    /// The returned handle is shared with the button listeners.
    ///
    /// # Errors
    ///
    /// - [`StepperError::MissingElement`] if the bar or a button is missing.
    /// - [`StepperError::NoSteps`] if no step marker matches.
    pub fn mount(doc: &mut D, config: &StepperConfig) -> Result<Rc<RefCell<Self>>, StepperError> {
        let bar = require(doc, config.progress)?;
        let prev = require(doc, config.prev)?;
        let next = require(doc, config.next)?;
        let steps = doc.query_selector_all(config.steps);
        let progress = StepProgress::new(steps.len())?;

        let indicator = Rc::new(RefCell::new(Self {
            progress,
            bar,
            prev: prev.clone(),
            next: next.clone(),
            steps,
            active_class: config.active_class,
        }));

        let handle = Rc::clone(&indicator);
        doc.add_listener(
            &next,
            EventKind::Click,
            Listener::every(move |doc: &mut D, _: &D::Element| {
                handle.borrow_mut().next(doc);
            }),
        );
        let handle = Rc::clone(&indicator);
        doc.add_listener(
            &prev,
            EventKind::Click,
            Listener::every(move |doc: &mut D, _: &D::Element| {
                handle.borrow_mut().prev(doc);
            }),
        );

        indicator.borrow().render(doc);
        #[cfg(feature = "tracing")]
        tracing::debug!(steps = progress.total(), "step indicator mounted");
        Ok(indicator)
    }

    /// The step state.
    pub fn progress(&self) -> StepProgress {
        self.progress
    }

    /// Advances one step and re-renders.
    pub fn next(&mut self, doc: &mut D) {
        self.progress.next();
        #[cfg(feature = "tracing")]
        tracing::debug!(current = self.progress.current(), "step forward");
        self.render(doc);
    }

    /// Goes back one step and re-renders.
    pub fn prev(&mut self, doc: &mut D) {
        self.progress.prev();
        #[cfg(feature = "tracing")]
        tracing::debug!(current = self.progress.current(), "step back");
        self.render(doc);
    }

    /// Writes the current step to the document.
    ///
    /// Both buttons are recomputed on every render, so a button disabled at
    /// one end is re-enabled once the step moves away from it.
    pub fn render(&self, doc: &mut D) {
        for (index, step) in self.steps.iter().enumerate() {
            doc.set_class(step, self.active_class, self.progress.is_reached(index));
        }
        doc.set_style(&self.bar, WIDTH, Some(&percent_width(self.progress.progress_percent())));
        set_disabled(doc, &self.next, !self.progress.can_advance());
        set_disabled(doc, &self.prev, !self.progress.can_retreat());
    }
}

/// Formats `percent` as a CSS width with at most two decimals.
fn percent_width(percent: f64) -> String {
    let mut width = format!("{percent:.2}");
    if width.contains('.') {
        let kept = width.trim_end_matches('0').trim_end_matches('.').len();
        width.truncate(kept);
    }
    width.push('%');
    width
}

fn set_disabled<D: Document>(doc: &mut D, button: &D::Element, disabled: bool) {
    if disabled {
        doc.set_attribute(button, DISABLED, "");
    } else {
        doc.remove_attribute(button, DISABLED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_dom::MemoryDocument;

    #[test]
    fn widths_keep_two_decimals_at_most() {
        assert_eq!(percent_width(0.0), "0%");
        assert_eq!(percent_width(50.0), "50%");
        assert_eq!(percent_width(100.0), "100%");
        assert_eq!(percent_width(200.0 / 3.0), "66.67%");
        assert_eq!(percent_width(100.0 / 3.0), "33.33%");
        assert_eq!(percent_width(12.5), "12.5%");
    }

    #[test]
    fn missing_button_is_reported() {
        let mut doc = MemoryDocument::new();
        doc.element(doc.body(), "div", &[("id", "progress")]);
        doc.element(doc.body(), "button", &[("id", "btnPrev")]);
        let err = StepIndicator::mount(&mut doc, &StepperConfig::default()).unwrap_err();
        assert_eq!(err, StepperError::MissingElement(String::from("#btnNext")));
    }

    #[test]
    fn no_steps_is_reported() {
        let mut doc = MemoryDocument::new();
        doc.element(doc.body(), "div", &[("id", "progress")]);
        doc.element(doc.body(), "button", &[("id", "btnPrev")]);
        doc.element(doc.body(), "button", &[("id", "btnNext")]);
        let err = StepIndicator::mount(&mut doc, &StepperConfig::default()).unwrap_err();
        assert_eq!(err, StepperError::NoSteps);
    }
}

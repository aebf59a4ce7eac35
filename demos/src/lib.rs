// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared page builders for the demos.
//!
//! Each builder lays out the markup a widget expects inside a
//! [`MemoryDocument`] and hands back the elements a demo wants to poke at.

use tracing_subscriber::EnvFilter;
use understory_dom::{Document, ElementId, MemoryDocument};

/// Installs a `tracing` subscriber writing to stderr.
///
/// The filter comes from `RUST_LOG`, defaulting to `debug`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_writer(std::io::stderr)
        .init();
}

/// An FAQ section: one control and one panel per question.
#[derive(Debug)]
pub struct FaqPage {
    /// The `.accordion-js` root.
    pub root: ElementId,
    /// `(item, control, panel)` in document order.
    pub items: Vec<(String, ElementId, ElementId)>,
}

/// Builds an `.accordion-js` root with a control and panel for each
/// `(item, question, answer, height)`.
pub fn faq_page(doc: &mut MemoryDocument, questions: &[(&str, &str, &str, f64)]) -> FaqPage {
    let root = doc.element(doc.body(), "section", &[("class", "accordion-js")]);
    let items = questions
        .iter()
        .map(|&(item, question, answer, height)| {
            let control = doc.element(root, "button", &[("data-accordion-control", item)]);
            doc.set_text_content(&control, question);
            let panel = doc.element(root, "div", &[("data-accordion-content", item)]);
            doc.set_text_content(&panel, answer);
            doc.set_natural_height(panel, height);
            (String::from(item), control, panel)
        })
        .collect();
    FaqPage { root, items }
}

/// Renders one line per panel: its item, whether it is shown, and its height.
pub fn describe_faq(doc: &MemoryDocument, page: &FaqPage) -> String {
    page.items
        .iter()
        .map(|(item, control, panel)| {
            let shown = if doc.attr(*panel, "hidden").is_some() { "hidden" } else { "shown" };
            format!(
                "  {item:<10} {shown:<7} aria-expanded={:<6} height={}",
                doc.attr(*control, "aria-expanded").unwrap_or("-"),
                doc.style(*panel, "height").unwrap_or("auto"),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A wizard header: a progress bar, step circles and two buttons.
#[derive(Debug)]
pub struct StepperPage {
    /// `#progress`.
    pub bar: ElementId,
    /// `.circle` elements in order.
    pub steps: Vec<ElementId>,
    /// `#btnPrev`.
    pub prev: ElementId,
    /// `#btnNext`.
    pub next: ElementId,
}

/// Builds the default stepper markup with `count` steps.
pub fn stepper_page(doc: &mut MemoryDocument, count: usize) -> StepperPage {
    let body = doc.body();
    let container = doc.element(body, "div", &[("class", "progress-container")]);
    let bar = doc.element(container, "div", &[("id", "progress")]);
    let steps = (1..=count)
        .map(|n| {
            let circle = doc.element(container, "div", &[("class", "circle")]);
            doc.set_text_content(&circle, &n.to_string());
            circle
        })
        .collect();
    let prev = doc.element(body, "button", &[("id", "btnPrev")]);
    let next = doc.element(body, "button", &[("id", "btnNext")]);
    StepperPage {
        bar,
        steps,
        prev,
        next,
    }
}

/// Builds the beer loader: a `.counter` label reading `start` and a
/// `.beer-full` glass. Returns `(label, glass)`.
pub fn loader_page(doc: &mut MemoryDocument, start: &str) -> (ElementId, ElementId) {
    let body = doc.body();
    let loader = doc.element(body, "div", &[("class", "loader")]);
    let label = doc.element(loader, "p", &[("class", "counter")]);
    doc.set_text_content(&label, start);
    let glass = doc.element(loader, "div", &[("class", "beer-full")]);
    (label, glass)
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_accordion --heading-base-level=0

//! Understory Accordion: a headless accordion built from one piece of state and
//! independent observers.
//!
//! ## Overview
//!
//! The accordion keeps a single [`ActiveItem`]: the identifier of the expanded
//! panel, or none. The only mutation is a toggle: toggling the active item
//! collapses it, toggling anything else makes that item active. An
//! [`Accordion`] subject owns that state and notifies every subscribed
//! [`Observer`] after each toggle.
//!
//! Each observer renders one concern and knows nothing about the others:
//!
//! - [`InterfaceObserver`]: hides inactive panels and writes
//!   `data-accordion-expanded` on the active control and panel.
//! - [`AriaObserver`]: links controls to panels (`aria-controls`/`id`) and keeps
//!   `aria-expanded` current.
//! - [`AnimationObserver`]: animates panel height open and closed, deferring
//!   the final height by two animation frames.
//!
//! All three share a [`Scope`]: a root element plus the [`Markers`] that tag
//! controls and panels. Controls and panels are paired by marker value, looked
//! up again on every update rather than cached.
//!
//! ## Markup
//!
//! ```html
//! <div class="accordion-js">
//!   <button data-accordion-control="shipping">Shipping</button>
//!   <div data-accordion-content="shipping">…</div>
//!   <button data-accordion-control="returns">Returns</button>
//!   <div data-accordion-content="returns">…</div>
//! </div>
//! ```
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_accordion::{Config, mount};
//! use understory_dom::MemoryDocument;
//!
//! let mut doc = MemoryDocument::new();
//! let root = doc.element(doc.body(), "div", &[("class", "accordion-js")]);
//! let control = doc.element(root, "button", &[("data-accordion-control", "shipping")]);
//! let panel = doc.element(root, "div", &[("data-accordion-content", "shipping")]);
//!
//! let widget = mount(&mut doc, ".accordion-js", &Config::default());
//! assert_eq!(doc.attr(control, "aria-controls"), Some("shipping"));
//!
//! doc.click(control);
//! assert_eq!(widget.active_item().as_deref(), Some("shipping"));
//! assert_eq!(doc.attr(panel, "hidden"), None);
//! assert_eq!(doc.attr(control, "aria-expanded"), Some("true"));
//!
//! doc.click(control);
//! assert_eq!(widget.active_item(), None);
//! assert_eq!(doc.attr(control, "aria-expanded"), Some("false"));
//!
//! // The panel stays visible while its collapse transition runs.
//! doc.end_transition(panel);
//! assert_eq!(doc.attr(panel, "hidden"), Some("true"));
//! ```
//!
//! ## Composition
//!
//! [`mount`] is the usual entry point. It creates one subject, subscribes the
//! observers (interface, accessibility, then animation) and wires a click
//! listener to every control under the root with [`bind_controls`]. Nothing is
//! global: mount as many accordions as you have roots. To customise, build the
//! pieces yourself and subscribe your own [`Observer`] implementations
//! alongside the built-in ones.
//!
//! ## Errors
//!
//! There are none. A root selector that matches nothing produces inert
//! observers, and an item without a matching panel or control is a valid
//! "nothing to show" state.
//!
//! ## Features
//!
//! - `std` (default): forward `std` to dependencies.
//! - `tracing`: emit `tracing` events for toggles, subscriptions, wiring and
//!   roots that could not be found.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animation;
mod aria;
mod interface;
mod markers;
mod mount;
mod scope;
mod state;
mod subject;
mod wiring;

pub use animation::AnimationObserver;
pub use aria::AriaObserver;
pub use interface::InterfaceObserver;
pub use markers::{ARIA_CONTROLS, ARIA_EXPANDED, Config, HIDDEN, Markers};
pub use mount::{AccordionWidget, mount};
pub use scope::Scope;
pub use state::ActiveItem;
pub use subject::{Accordion, Observer, SharedObserver};
pub use wiring::bind_controls;

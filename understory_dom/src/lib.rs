// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_dom --heading-base-level=0

//! Understory DOM: the host document seam for Understory widgets.
//!
//! Widgets such as `understory_accordion` are written against the
//! [`Document`] trait rather than a concrete browser binding. The trait covers
//! exactly what small disclosure widgets need from a host:
//!
//! - Element lookup by single simple [`Selector`] and by marker attribute.
//! - Attribute, text content and inline style edits.
//! - A rendered height for measuring collapsible panels.
//! - Event listeners ([`EventKind`], [`Listener`]), animation frames and
//!   interval timers ([`TimerControl`]).
//!
//! Two hosts exist:
//!
//! - [`MemoryDocument`] (this crate): a deterministic element tree where the
//!   embedder drives events, frames and time explicitly. Use it for tests,
//!   headless demos and benchmarks.
//! - `understory_dom_web`: the browser DOM through `web_sys` (`wasm32` only).
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_dom::{Document, EventKind, Listener, MemoryDocument};
//!
//! let mut doc = MemoryDocument::new();
//! let button = doc.element(doc.body(), "button", &[("id", "go")]);
//!
//! doc.add_listener(
//!     &button,
//!     EventKind::Click,
//!     Listener::every(|doc: &mut MemoryDocument, el: &_| {
//!         doc.set_attribute(el, "data-clicked", "true");
//!     }),
//! );
//!
//! doc.click(button);
//! assert_eq!(doc.attr(button, "data-clicked"), Some("true"));
//! assert_eq!(doc.query_selector("#go"), Some(button));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forward `std` to optional dependencies.
//! - `tracing`: emit `tracing` events for rejected selectors and dispatch.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod document;
mod memory;
mod selector;

pub use document::{
    Document, EventKind, FrameCallback, IntervalCallback, Listener, TimerControl,
};
pub use memory::{ElementId, MemoryDocument};
pub use selector::{Selector, SelectorError};

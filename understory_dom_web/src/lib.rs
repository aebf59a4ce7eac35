// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_dom_web --heading-base-level=0

//! Browser host for Understory widgets.
//!
//! This crate provides `WebDocument`, an [`understory_dom::Document`]
//! implementation over `web_sys` when targeting `wasm32`. On other targets it
//! is empty; use `understory_dom::MemoryDocument` there.
//!
//! # Usage
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn start() -> Result<(), understory_dom_web::HostError> {
//!     use understory_accordion::{Config, mount};
//!
//!     let mut doc = understory_dom_web::WebDocument::new()?;
//!     let _widget = mount(&mut doc, ".accordion-js", &Config::default());
//!     Ok(())
//! }
//! ```
//!
//! Mapping:
//! - Elements are `web_sys::HtmlElement`; nodes that are not HTML elements
//!   (SVG, text) are skipped by queries.
//! - Events map to `click`, `transitionend` and `animationstart`. One-shot
//!   listeners are registered with `{ once: true }`; persistent ones live as
//!   long as the page.
//! - Frames map to `requestAnimationFrame`, intervals to `setInterval` and
//!   `clearInterval`.
//! - Every callback receives its own clone of the `WebDocument`, which is a
//!   pair of handles to the page's `window` and `document`.
//! - DOM calls that throw (for example a selector the browser rejects) are
//!   treated as "no match" or ignored.

#![no_std]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{HostError, WebDocument};

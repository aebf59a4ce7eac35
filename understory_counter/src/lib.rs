// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_counter --heading-base-level=0

//! Understory Counter: a percent label that counts up while a loader animates.
//!
//! [`PercentCounter`] is the count: a value parsed from a label like `"0%"`,
//! stepped by one toward a target. [`CounterWidget`] ties it to a document.
//! When the trigger element's CSS animation starts, the widget reads the
//! label, then rewrites it on a fixed interval until the target is reached.
//!
//! ```rust
//! use understory_counter::{CounterConfig, CounterWidget};
//! use understory_dom::{Document, MemoryDocument};
//!
//! let mut doc = MemoryDocument::new();
//! let label = doc.element(doc.body(), "span", &[("class", "counter")]);
//! let beer = doc.element(doc.body(), "div", &[("class", "beer-full")]);
//! doc.set_text_content(&label, "0%");
//!
//! let widget = CounterWidget::mount(&mut doc, &CounterConfig::default()).unwrap();
//! doc.start_animation(beer);
//! assert!(widget.is_running());
//!
//! doc.advance(500);
//! assert_eq!(doc.text_content(&label), "10%");
//! doc.advance(5_000);
//! assert_eq!(doc.text_content(&label), "100%");
//! assert!(!widget.is_running());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forward `std` to dependencies.
//! - `tracing`: emit `tracing` events when a count starts and finishes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod count;
mod widget;

pub use count::{CounterError, PercentCounter};
pub use widget::{CounterConfig, CounterWidget};

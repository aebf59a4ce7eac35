// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_stepper --heading-base-level=0

//! Understory Stepper: a step progress indicator.
//!
//! [`StepProgress`] is the pure state: a current step between 1 and the
//! number of steps, moved one at a time and clamped at both ends.
//! [`StepIndicator`] binds it to a document: a progress bar whose `width`
//! follows the percentage, a row of step markers that gain an `active` class
//! once reached, and previous/next buttons that are `disabled` at the ends.
//!
//! ```rust
//! use understory_dom::MemoryDocument;
//! use understory_stepper::{StepIndicator, StepperConfig};
//!
//! let mut doc = MemoryDocument::new();
//! let body = doc.body();
//! let bar = doc.element(body, "div", &[("id", "progress")]);
//! let steps: Vec<_> = (0..3)
//!     .map(|_| doc.element(body, "div", &[("class", "circle")]))
//!     .collect();
//! let prev = doc.element(body, "button", &[("id", "btnPrev")]);
//! let next = doc.element(body, "button", &[("id", "btnNext")]);
//!
//! let stepper = StepIndicator::mount(&mut doc, &StepperConfig::default()).unwrap();
//! assert_eq!(doc.style(bar, "width"), Some("0%"));
//! assert!(doc.attr(prev, "disabled").is_some());
//!
//! doc.click(next);
//! assert_eq!(stepper.borrow().progress().current(), 2);
//! assert_eq!(doc.style(bar, "width"), Some("50%"));
//! assert_eq!(doc.attr(steps[1], "class"), Some("circle active"));
//! assert!(doc.attr(prev, "disabled").is_none());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forward `std` to dependencies.
//! - `tracing`: emit `tracing` events when the indicator mounts and moves.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod indicator;
mod progress;

pub use indicator::{StepIndicator, StepperConfig};
pub use progress::{StepProgress, StepperError};

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The count itself, independent of any document.

use alloc::format;
use alloc::string::String;
use core::fmt;

/// Why a counter could not be mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CounterError {
    /// A required element was not found; carries the selector that missed.
    MissingElement(String),
}

impl fmt::Display for CounterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement(selector) => write!(f, "no element matches {selector:?}"),
        }
    }
}

impl core::error::Error for CounterError {}

/// A value counting up by one toward a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PercentCounter {
    value: u32,
    target: u32,
}

impl PercentCounter {
    /// Starts at `value`.
    pub const fn new(value: u32, target: u32) -> Self {
        Self { value, target }
    }

    /// Starts from a label such as `"0"`, `"42"` or `"42%"`.
    ///
    /// Surrounding whitespace is ignored. Anything else, including an empty
    /// label or a value too large for `u32`, starts at 0.
    pub fn from_text(text: &str, target: u32) -> Self {
        Self::new(parse_percent(text).unwrap_or(0), target)
    }

    /// The current value.
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// The value counting stops at.
    pub const fn target(&self) -> u32 {
        self.target
    }

    /// Whether the target has been reached.
    pub const fn is_done(&self) -> bool {
        self.value >= self.target
    }

    /// Counts one up and returns the new value, or `None` once done.
    pub fn tick(&mut self) -> Option<u32> {
        if self.is_done() {
            return None;
        }
        self.value += 1;
        Some(self.value)
    }

    /// The current value as a label, e.g. `"42%"`.
    pub fn label(&self) -> String {
        format!("{}%", self.value)
    }
}

fn parse_percent(text: &str) -> Option<u32> {
    let text = text.trim();
    let digits = text.strip_suffix('%').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clamped step state.

use alloc::string::String;
use core::fmt;

/// Why a step indicator could not be built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepperError {
    /// A required element was not found; carries the selector that missed.
    MissingElement(String),
    /// There are no steps to indicate.
    NoSteps,
}

impl fmt::Display for StepperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement(selector) => write!(f, "no element matches {selector:?}"),
            Self::NoSteps => f.write_str("a step indicator needs at least one step"),
        }
    }
}

impl core::error::Error for StepperError {}

/// The current step out of a fixed total.
///
/// Steps are numbered from 1. `current` always stays within `1..=total`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepProgress {
    current: usize,
    total: usize,
}

impl StepProgress {
    /// Starts at step 1 of `total`.
    ///
    /// # Errors
    ///
    /// [`StepperError::NoSteps`] when `total` is zero.
    pub const fn new(total: usize) -> Result<Self, StepperError> {
        if total == 0 {
            return Err(StepperError::NoSteps);
        }
        Ok(Self { current: 1, total })
    }

    /// The current step, between 1 and [`total`](Self::total).
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Number of steps.
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Moves one step forward. Returns `false` if already on the last step.
    pub fn next(&mut self) -> bool {
        if self.can_advance() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Moves one step back. Returns `false` if already on the first step.
    pub fn prev(&mut self) -> bool {
        if self.can_retreat() {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Whether the zero-based step `index` has been reached.
    pub const fn is_reached(&self, index: usize) -> bool {
        index < self.current
    }

    /// Whether [`next`](Self::next) would move.
    pub const fn can_advance(&self) -> bool {
        self.current < self.total
    }

    /// Whether [`prev`](Self::prev) would move.
    pub const fn can_retreat(&self) -> bool {
        self.current > 1
    }

    /// How far along the bar is, from 0 to 100.
    ///
    /// A single step is never "in progress" and reports 0.
    pub fn progress_percent(&self) -> f64 {
        if self.total <= 1 {
            return 0.0;
        }
        (self.current - 1) as f64 / (self.total - 1) as f64 * 100.0
    }
}

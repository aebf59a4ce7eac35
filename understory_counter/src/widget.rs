// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Running a [`PercentCounter`] off an animation-start event.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::Cell;
use core::fmt;

use understory_dom::{Document, EventKind, Listener, TimerControl};

use crate::count::{CounterError, PercentCounter};

/// Where a [`CounterWidget`] reads and writes, and how fast it counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterConfig {
    /// The element whose text is the percent label.
    pub counter: &'static str,
    /// The element whose animation start begins the count.
    pub trigger: &'static str,
    /// Milliseconds between ticks.
    pub period_ms: u32,
    /// The value counting stops at.
    pub target: u32,
}

impl CounterConfig {
    /// `.counter`, `.beer-full`, 50 ms and 100.
    pub const DEFAULT: Self = Self {
        counter: ".counter",
        trigger: ".beer-full",
        period_ms: 50,
        target: 100,
    };
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A mounted percent counter.
pub struct CounterWidget<D: Document> {
    counter: D::Element,
    trigger: D::Element,
    running: Rc<Cell<bool>>,
}

impl<D: Document> fmt::Debug for CounterWidget<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterWidget")
            .field("counter", &self.counter)
            .field("trigger", &self.trigger)
            .field("running", &self.running.get())
            .finish()
    }
}

impl<D: Document> CounterWidget<D> {
    /// Resolves both elements and listens for the trigger's animation start.
    ///
    /// Each start reads the label's current text and counts up from it, one
    /// per `period_ms`, writing `"{n}%"` until `target`. A start that arrives
    /// while a count is running is ignored.
    ///
    /// # Errors
    ///
    /// [`CounterError::MissingElement`] if either selector matches nothing.
    pub fn mount(doc: &mut D, config: &CounterConfig) -> Result<Self, CounterError> {
        let counter = doc
            .query_selector(config.counter)
            .ok_or_else(|| CounterError::MissingElement(String::from(config.counter)))?;
        let trigger = doc
            .query_selector(config.trigger)
            .ok_or_else(|| CounterError::MissingElement(String::from(config.trigger)))?;
        let running = Rc::new(Cell::new(false));

        let label = counter.clone();
        let guard = Rc::clone(&running);
        let CounterConfig {
            period_ms, target, ..
        } = *config;
        doc.add_listener(
            &trigger,
            EventKind::AnimationStart,
            Listener::every(move |doc: &mut D, _: &D::Element| {
                if guard.get() {
                    return;
                }
                start(doc, &label, &guard, period_ms, target);
            }),
        );

        Ok(Self {
            counter,
            trigger,
            running,
        })
    }

    /// The label element.
    pub fn counter(&self) -> &D::Element {
        &self.counter
    }

    /// The element whose animation starts the count.
    pub fn trigger(&self) -> &D::Element {
        &self.trigger
    }

    /// Whether a count is in progress.
    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

fn start<D: Document>(
    doc: &mut D,
    label: &D::Element,
    running: &Rc<Cell<bool>>,
    period_ms: u32,
    target: u32,
) {
    let mut count = PercentCounter::from_text(&doc.text_content(label), target);
    if count.is_done() {
        doc.set_text_content(label, &PercentCounter::new(target, target).label());
        return;
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(from = count.value(), to = target, "count started");

    running.set(true);
    let label = label.clone();
    let running = Rc::clone(running);
    doc.set_interval(
        period_ms,
        Box::new(move |doc: &mut D| {
            if count.tick().is_some() {
                doc.set_text_content(&label, &count.label());
            }
            if count.is_done() {
                running.set(false);
                #[cfg(feature = "tracing")]
                tracing::debug!(at = count.value(), "count finished");
                TimerControl::Stop
            } else {
                TimerControl::Continue
            }
        }),
    );
}

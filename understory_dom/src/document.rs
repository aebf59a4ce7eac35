// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Document`] trait and the callback types hosts accept.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Events a widget can listen for on an element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A pointer click (`click`).
    Click,
    /// A CSS transition finished (`transitionend`).
    TransitionEnd,
    /// A CSS animation started (`animationstart`).
    AnimationStart,
}

impl EventKind {
    /// The DOM event type name for this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::TransitionEnd => "transitionend",
            Self::AnimationStart => "animationstart",
        }
    }
}

/// Whether an interval keeps running after a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimerControl {
    /// Keep ticking.
    Continue,
    /// Cancel the interval; the callback is dropped.
    Stop,
}

/// Callback run at the next animation frame boundary.
pub type FrameCallback<D> = Box<dyn FnOnce(&mut D)>;

/// Callback run on every tick of an interval.
pub type IntervalCallback<D> = Box<dyn FnMut(&mut D) -> TimerControl>;

/// An event listener attached to an element.
///
/// Listeners are called with the document and the element they were attached
/// to (the DOM's `currentTarget`), not necessarily the element the event
/// originated from.
pub enum Listener<D: Document> {
    /// Called for the first matching event, then deregistered.
    Once(Box<dyn FnOnce(&mut D, &D::Element)>),
    /// Called for every matching event for the lifetime of the element.
    Every(Box<dyn FnMut(&mut D, &D::Element)>),
}

impl<D: Document> Listener<D> {
    /// Wraps a one-shot listener.
    pub fn once(f: impl FnOnce(&mut D, &D::Element) + 'static) -> Self {
        Self::Once(Box::new(f))
    }

    /// Wraps a persistent listener.
    pub fn every(f: impl FnMut(&mut D, &D::Element) + 'static) -> Self {
        Self::Every(Box::new(f))
    }

    /// Returns `true` for [`Listener::Once`].
    #[must_use]
    pub fn is_once(&self) -> bool {
        matches!(self, Self::Once(_))
    }
}

impl<D: Document> fmt::Debug for Listener<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Once(_) => f.write_str("Listener::Once(..)"),
            Self::Every(_) => f.write_str("Listener::Every(..)"),
        }
    }
}

/// The slice of a host document that Understory widgets operate on.
///
/// A `Document` is a handle to a tree of elements carrying attributes, text,
/// inline styles and a rendered height, plus the host's event, frame and timer
/// queues. Widgets never cache elements across calls; they re-query through
/// this trait so that markup changes between updates are tolerated.
///
/// Selectors are single simple selectors: `tag`, `.class`, `#id`, `[attr]`,
/// `[attr=value]` or `*`. Hosts may return no matches for anything else.
pub trait Document: Sized + 'static {
    /// Handle to an element of this document.
    type Element: Clone + PartialEq + fmt::Debug + 'static;

    /// Returns the first element in document order matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// Returns every element in document order matching `selector`.
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element>;

    /// Returns the descendants of `root` (excluding `root`) that carry the
    /// attribute `name`, in document order.
    fn descendants_with_attribute(&self, root: &Self::Element, name: &str) -> Vec<Self::Element>;

    /// Returns the first descendant of `root` whose attribute `name` equals `value`.
    fn find_descendant(&self, root: &Self::Element, name: &str, value: &str) -> Option<Self::Element> {
        self.descendants_with_attribute(root, name)
            .into_iter()
            .find(|element| self.attribute(element, name).as_deref() == Some(value))
    }

    /// Returns the value of attribute `name`, if present.
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Returns `true` if the element carries attribute `name`.
    fn has_attribute(&self, element: &Self::Element, name: &str) -> bool {
        self.attribute(element, name).is_some()
    }

    /// Sets attribute `name` to `value`, replacing any previous value.
    fn set_attribute(&mut self, element: &Self::Element, name: &str, value: &str);

    /// Removes attribute `name`; no-op if absent.
    fn remove_attribute(&mut self, element: &Self::Element, name: &str);

    /// Returns the element's text content.
    fn text_content(&self, element: &Self::Element) -> String;

    /// Replaces the element's text content.
    fn set_text_content(&mut self, element: &Self::Element, text: &str);

    /// Returns the rendered height in CSS pixels.
    ///
    /// Hidden and detached elements report `0.0`.
    fn offset_height(&self, element: &Self::Element) -> f64;

    /// Sets an inline style property, or clears it when `value` is `None`.
    fn set_style(&mut self, element: &Self::Element, property: &str, value: Option<&str>);

    /// Attaches `listener` for events of `kind` reaching `element`.
    fn add_listener(&mut self, element: &Self::Element, kind: EventKind, listener: Listener<Self>);

    /// Schedules `callback` for the next animation frame.
    ///
    /// Callbacks requested while a frame is running are deferred to the
    /// following frame, so nesting two requests guarantees one full frame has
    /// been committed in between.
    fn request_animation_frame(&mut self, callback: FrameCallback<Self>);

    /// Calls `callback` every `period_ms` milliseconds until it returns
    /// [`TimerControl::Stop`].
    fn set_interval(&mut self, period_ms: u32, callback: IntervalCallback<Self>);

    /// Returns `true` if the element's `class` attribute contains `class`.
    fn has_class(&self, element: &Self::Element, class: &str) -> bool {
        self.attribute(element, "class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
    }

    /// Adds `class` to the element's `class` attribute if missing.
    fn add_class(&mut self, element: &Self::Element, class: &str) {
        self.set_class(element, class, true);
    }

    /// Removes `class` from the element's `class` attribute if present.
    fn remove_class(&mut self, element: &Self::Element, class: &str) {
        self.set_class(element, class, false);
    }

    /// Adds or removes `class` depending on `on`.
    fn set_class(&mut self, element: &Self::Element, class: &str, on: bool) {
        if self.has_class(element, class) == on {
            return;
        }
        let current = self.attribute(element, "class").unwrap_or_default();
        let mut classes: Vec<&str> = current
            .split_ascii_whitespace()
            .filter(|c| *c != class)
            .collect();
        if on {
            classes.push(class);
        }
        self.set_attribute(element, "class", &classes.join(" "));
    }
}

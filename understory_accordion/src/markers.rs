// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker attribute names and mount configuration.

/// Attribute hiding a collapsed content panel.
pub const HIDDEN: &str = "hidden";

/// Accessibility attribute reflecting whether a control's panel is open.
pub const ARIA_EXPANDED: &str = "aria-expanded";

/// Accessibility attribute linking a control to its panel's `id`.
pub const ARIA_CONTROLS: &str = "aria-controls";

/// Attribute names the accordion reads and writes.
///
/// Controls and content panels are paired by carrying the same value in
/// [`control`](Self::control) and [`content`](Self::content) respectively.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Markers {
    /// Marks a control; the value names the item it toggles.
    pub control: &'static str,
    /// Marks a content panel; the value names the item it belongs to.
    pub content: &'static str,
    /// Written as `"true"`/`"false"` on the active control and panel.
    pub expanded: &'static str,
    /// Written as `"true"` on every control that may animate.
    pub control_animation: &'static str,
    /// Written as `"true"` on an expanding panel, `"false"` on a collapsing one.
    pub content_animation: &'static str,
}

impl Markers {
    /// The default `data-accordion-*` marker set.
    pub const DEFAULT: Self = Self {
        control: "data-accordion-control",
        content: "data-accordion-content",
        expanded: "data-accordion-expanded",
        control_animation: "data-accordion-control-animation",
        content_animation: "data-accordion-content-animation",
    };
}

impl Default for Markers {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Options for [`mount`](crate::mount).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Config {
    /// Marker attribute names.
    pub markers: Markers,
    /// Subscribe the [`AnimationObserver`](crate::AnimationObserver).
    ///
    /// Turn this off for hosts that should not animate (for example when the
    /// user prefers reduced motion); panels then open and close instantly.
    pub animate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            markers: Markers::DEFAULT,
            animate: true,
        }
    }
}

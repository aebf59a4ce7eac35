// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic, in-memory [`Document`] for tests, demos and benches.
//!
//! [`MemoryDocument`] models just enough of a browser document for widgets to
//! run headless:
//!
//! - An element tree rooted at a `body` element, with attributes, inline
//!   styles and text content.
//! - A simple layout input: every element has a *natural height* which
//!   [`Document::offset_height`] reports unless the element is hidden,
//!   detached, or carries an explicit `height` style in `px`.
//! - Event listeners with bubbling from target to ancestors.
//! - An animation frame queue driven by [`MemoryDocument::run_frame`].
//! - Interval timers on a virtual clock driven by [`MemoryDocument::advance`].
//!
//! Nothing happens on its own: the embedder decides when frames run, when
//! transitions end and how much time passes, which makes multi-step behavior
//! fully reproducible.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::mem;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::document::{Document, EventKind, FrameCallback, IntervalCallback, Listener, TimerControl};
use crate::selector::Selector;

/// Handle to an element of a [`MemoryDocument`].
///
/// Handles are plain indices and are only meaningful for the document that
/// created them. Handles from another document resolve to nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u32);

impl ElementId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Default)]
struct Node {
    tag: String,
    parent: Option<ElementId>,
    children: SmallVec<[ElementId; 4]>,
    attributes: HashMap<String, String>,
    styles: HashMap<String, String>,
    text: String,
    natural_height: f64,
}

struct Interval {
    id: u64,
    period: u32,
    due: u64,
    callback: IntervalCallback<MemoryDocument>,
}

/// An in-memory element tree with event, frame and timer queues.
pub struct MemoryDocument {
    nodes: Vec<Node>,
    body: ElementId,
    listeners: HashMap<(ElementId, EventKind), Vec<Listener<Self>>>,
    frames: Vec<FrameCallback<Self>>,
    frames_run: u64,
    intervals: Vec<Interval>,
    next_interval: u64,
    now_ms: u64,
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryDocument")
            .field("nodes", &self.nodes.len())
            .field("body", &self.body)
            .field(
                "listeners",
                &self.listeners.values().map(Vec::len).sum::<usize>(),
            )
            .field("frames", &self.frames.len())
            .field("frames_run", &self.frames_run)
            .field("intervals", &self.intervals.len())
            .field("next_interval", &self.next_interval)
            .field("now_ms", &self.now_ms)
            .finish()
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Creates a document containing only an empty `body` element.
    #[must_use]
    pub fn new() -> Self {
        let body = Node {
            tag: "body".to_string(),
            ..Node::default()
        };
        Self {
            nodes: alloc::vec![body],
            body: ElementId(0),
            listeners: HashMap::new(),
            frames: Vec::new(),
            frames_run: 0,
            intervals: Vec::new(),
            next_interval: 0,
            now_ms: 0,
        }
    }

    /// The root `body` element.
    #[must_use]
    pub fn body(&self) -> ElementId {
        self.body
    }

    /// Creates a detached element with the given tag.
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        let id = ElementId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(Node {
            tag: tag.to_ascii_lowercase(),
            ..Node::default()
        });
        id
    }

    /// Appends `child` as the last child of `parent`, detaching it first.
    ///
    /// Returns `false` (and changes nothing) if either handle is unknown or if
    /// the move would make an element its own ancestor.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> bool {
        if self.node(parent).is_none() || self.node(child).is_none() {
            return false;
        }
        if self.ancestors_inclusive(parent).contains(&child) {
            return false;
        }
        self.detach(child);
        self.nodes[child.idx()].parent = Some(parent);
        self.nodes[parent.idx()].children.push(child);
        true
    }

    /// Creates an element, sets `attributes` and appends it to `parent`.
    pub fn element(
        &mut self,
        parent: ElementId,
        tag: &str,
        attributes: &[(&str, &str)],
    ) -> ElementId {
        let id = self.create_element(tag);
        for (name, value) in attributes {
            self.set_attribute(&id, name, value);
        }
        self.append_child(parent, id);
        id
    }

    /// Removes `element` from its parent. Its subtree stays intact but is no
    /// longer reachable from `body`.
    pub fn detach(&mut self, element: ElementId) {
        let Some(parent) = self.node(element).and_then(|n| n.parent) else {
            return;
        };
        self.nodes[parent.idx()].children.retain(|c| *c != element);
        self.nodes[element.idx()].parent = None;
    }

    /// Returns the parent of `element`, if attached.
    #[must_use]
    pub fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.node(element).and_then(|n| n.parent)
    }

    /// Returns the children of `element` in order.
    #[must_use]
    pub fn children(&self, element: ElementId) -> &[ElementId] {
        self.node(element)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the lowercase tag name of `element`.
    #[must_use]
    pub fn tag(&self, element: ElementId) -> Option<&str> {
        self.node(element).map(|n| n.tag.as_str())
    }

    /// Borrowing variant of [`Document::attribute`].
    #[must_use]
    pub fn attr(&self, element: ElementId, name: &str) -> Option<&str> {
        self.node(element)
            .and_then(|n| n.attributes.get(name))
            .map(String::as_str)
    }

    /// Returns the inline style `property`, if set.
    #[must_use]
    pub fn style(&self, element: ElementId, property: &str) -> Option<&str> {
        self.node(element)
            .and_then(|n| n.styles.get(property))
            .map(String::as_str)
    }

    /// Sets the height the element lays out to when nothing overrides it.
    pub fn set_natural_height(&mut self, element: ElementId, height: f64) {
        if let Some(node) = self.node_mut(element) {
            node.natural_height = height;
        }
    }

    /// Returns `true` if `element` is reachable from `body`.
    #[must_use]
    pub fn is_connected(&self, element: ElementId) -> bool {
        self.ancestors_inclusive(element).last() == Some(&self.body)
    }

    /// Number of listeners of `kind` attached directly to `element`.
    #[must_use]
    pub fn listener_count(&self, element: ElementId, kind: EventKind) -> usize {
        self.listeners.get(&(element, kind)).map_or(0, Vec::len)
    }

    /// Number of callbacks waiting for the next frame.
    #[must_use]
    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Number of frames run so far.
    #[must_use]
    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    /// Runs every callback queued before this call; returns how many ran.
    ///
    /// Callbacks queued while the frame runs wait for the next call.
    pub fn run_frame(&mut self) -> usize {
        let frames = mem::take(&mut self.frames);
        self.frames_run += 1;
        let count = frames.len();
        for callback in frames {
            callback(self);
        }
        count
    }

    /// Runs `count` frames; returns the total number of callbacks run.
    pub fn run_frames(&mut self, count: usize) -> usize {
        (0..count).map(|_| self.run_frame()).sum()
    }

    /// Number of live intervals.
    #[must_use]
    pub fn active_intervals(&self) -> usize {
        self.intervals.len()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Advances the virtual clock by `ms`, firing due interval ticks in time
    /// order (ties broken by creation order). Returns the number of ticks.
    pub fn advance(&mut self, ms: u64) -> usize {
        let end = self.now_ms.saturating_add(ms);
        let mut ticks = 0;
        while let Some(pos) = self.next_due(end) {
            let mut interval = self.intervals.remove(pos);
            self.now_ms = interval.due;
            ticks += 1;
            if (interval.callback)(self) == TimerControl::Continue {
                interval.due += u64::from(interval.period);
                self.intervals.push(interval);
            }
        }
        self.now_ms = end;
        ticks
    }

    /// Dispatches an event of `kind` at `target`, bubbling to its ancestors.
    ///
    /// Returns the number of listeners called.
    pub fn dispatch(&mut self, target: ElementId, kind: EventKind) -> usize {
        #[cfg(feature = "tracing")]
        tracing::trace!(?target, event = kind.name(), "dispatch");
        self.ancestors_inclusive(target)
            .into_iter()
            .map(|element| self.dispatch_at(element, kind))
            .sum()
    }

    /// Dispatches [`EventKind::Click`] at `target`.
    pub fn click(&mut self, target: ElementId) -> usize {
        self.dispatch(target, EventKind::Click)
    }

    /// Dispatches [`EventKind::TransitionEnd`] at `target`.
    pub fn end_transition(&mut self, target: ElementId) -> usize {
        self.dispatch(target, EventKind::TransitionEnd)
    }

    /// Dispatches [`EventKind::AnimationStart`] at `target`.
    pub fn start_animation(&mut self, target: ElementId) -> usize {
        self.dispatch(target, EventKind::AnimationStart)
    }

    fn dispatch_at(&mut self, element: ElementId, kind: EventKind) -> usize {
        let Some(listeners) = self.listeners.remove(&(element, kind)) else {
            return 0;
        };
        let count = listeners.len();
        let mut kept = Vec::new();
        for listener in listeners {
            match listener {
                Listener::Once(f) => f(self, &element),
                Listener::Every(mut f) => {
                    f(self, &element);
                    kept.push(Listener::Every(f));
                }
            }
        }
        if !kept.is_empty() {
            // Listeners added during dispatch go after the surviving ones.
            let slot = self.listeners.entry((element, kind)).or_default();
            kept.append(slot);
            *slot = kept;
        }
        count
    }

    fn next_due(&self, end: u64) -> Option<usize> {
        self.intervals
            .iter()
            .enumerate()
            .filter(|(_, interval)| interval.due <= end)
            .min_by_key(|(_, interval)| (interval.due, interval.id))
            .map(|(pos, _)| pos)
    }

    fn node(&self, element: ElementId) -> Option<&Node> {
        self.nodes.get(element.idx())
    }

    fn node_mut(&mut self, element: ElementId) -> Option<&mut Node> {
        self.nodes.get_mut(element.idx())
    }

    /// `element` followed by its ancestors, nearest first.
    fn ancestors_inclusive(&self, element: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut current = self.node(element).map(|_| element);
        while let Some(id) = current {
            out.push(id);
            current = self.node(id).and_then(|n| n.parent);
        }
        out
    }

    /// Pre-order traversal of the subtree under `root`, excluding `root`.
    fn descendants(&self, root: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = self.children(root).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    fn matching(&self, selector: &str) -> Vec<ElementId> {
        let selector = match Selector::parse(selector) {
            Ok(selector) => selector,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, "selector matches nothing");
                return Vec::new();
            }
        };
        let mut candidates = alloc::vec![self.body];
        candidates.extend(self.descendants(self.body));
        candidates.retain(|id| {
            self.node(*id).is_some_and(|node| {
                selector.matches(&node.tag, |name| {
                    node.attributes.get(name).map(String::as_str)
                })
            })
        });
        candidates
    }

    fn is_hidden(&self, element: ElementId) -> bool {
        self.ancestors_inclusive(element)
            .into_iter()
            .any(|id| self.node(id).is_some_and(|n| n.attributes.contains_key("hidden")))
    }
}

impl Document for MemoryDocument {
    type Element = ElementId;

    fn query_selector(&self, selector: &str) -> Option<ElementId> {
        self.matching(selector).into_iter().next()
    }

    fn query_selector_all(&self, selector: &str) -> Vec<ElementId> {
        self.matching(selector)
    }

    fn descendants_with_attribute(&self, root: &ElementId, name: &str) -> Vec<ElementId> {
        let mut out = self.descendants(*root);
        out.retain(|id| self.node(*id).is_some_and(|n| n.attributes.contains_key(name)));
        out
    }

    fn attribute(&self, element: &ElementId, name: &str) -> Option<String> {
        self.attr(*element, name).map(ToString::to_string)
    }

    fn set_attribute(&mut self, element: &ElementId, name: &str, value: &str) {
        if let Some(node) = self.node_mut(*element) {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn remove_attribute(&mut self, element: &ElementId, name: &str) {
        if let Some(node) = self.node_mut(*element) {
            node.attributes.remove(name);
        }
    }

    fn text_content(&self, element: &ElementId) -> String {
        let Some(node) = self.node(*element) else {
            return String::new();
        };
        let mut text = node.text.clone();
        for id in self.descendants(*element) {
            if let Some(child) = self.node(id) {
                text.push_str(&child.text);
            }
        }
        text
    }

    fn set_text_content(&mut self, element: &ElementId, text: &str) {
        let children: SmallVec<[ElementId; 4]> = match self.node_mut(*element) {
            Some(node) => {
                node.text = text.to_string();
                node.children.clone()
            }
            None => return,
        };
        for child in children {
            self.detach(child);
        }
    }

    fn offset_height(&self, element: &ElementId) -> f64 {
        let Some(node) = self.node(*element) else {
            return 0.0;
        };
        if !self.is_connected(*element) || self.is_hidden(*element) {
            return 0.0;
        }
        node.styles
            .get("height")
            .and_then(|h| h.trim().strip_suffix("px"))
            .and_then(|h| h.trim().parse::<f64>().ok())
            .unwrap_or(node.natural_height)
    }

    fn set_style(&mut self, element: &ElementId, property: &str, value: Option<&str>) {
        let Some(node) = self.node_mut(*element) else {
            return;
        };
        match value {
            Some(value) if !value.is_empty() => {
                node.styles.insert(property.to_string(), value.to_string());
            }
            _ => {
                node.styles.remove(property);
            }
        }
    }

    fn add_listener(&mut self, element: &ElementId, kind: EventKind, listener: Listener<Self>) {
        if self.node(*element).is_none() {
            return;
        }
        self.listeners
            .entry((*element, kind))
            .or_default()
            .push(listener);
    }

    fn request_animation_frame(&mut self, callback: FrameCallback<Self>) {
        self.frames.push(callback);
    }

    fn set_interval(&mut self, period_ms: u32, callback: IntervalCallback<Self>) {
        // A zero period would never let the clock move forward.
        let period = period_ms.max(1);
        let id = self.next_interval;
        self.next_interval += 1;
        self.intervals.push(Interval {
            id,
            period,
            due: self.now_ms + u64::from(period),
            callback,
        });
    }
}

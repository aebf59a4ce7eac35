// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for a mounted accordion over `MemoryDocument`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use understory_accordion::{
    Accordion, AccordionWidget, ActiveItem, Config, Markers, Observer, SharedObserver, mount,
};
use understory_dom::{Document, ElementId, EventKind, MemoryDocument};

struct Fixture {
    doc: MemoryDocument,
    controls: Vec<ElementId>,
    contents: Vec<ElementId>,
}

fn fixture(items: &[(&str, f64)]) -> Fixture {
    let mut doc = MemoryDocument::new();
    let root = doc.element(doc.body(), "div", &[("class", "accordion-js")]);
    let mut controls = Vec::new();
    let mut contents = Vec::new();
    for &(item, height) in items {
        controls.push(doc.element(root, "button", &[("data-accordion-control", item)]));
        let content = doc.element(root, "div", &[("data-accordion-content", item)]);
        doc.set_natural_height(content, height);
        contents.push(content);
    }
    Fixture {
        doc,
        controls,
        contents,
    }
}

fn mounted(items: &[(&str, f64)]) -> (Fixture, AccordionWidget<MemoryDocument>) {
    let mut fx = fixture(items);
    let widget = mount(&mut fx.doc, ".accordion-js", &Config::default());
    (fx, widget)
}

fn expanded_panels(fx: &Fixture) -> usize {
    fx.contents
        .iter()
        .filter(|c| fx.doc.attr(**c, "data-accordion-expanded") == Some("true"))
        .count()
}

#[test]
fn mount_links_aria_and_flags() {
    let (fx, widget) = mounted(&[("a", 40.0), ("b", 60.0)]);
    assert_eq!(widget.wired(), 2);
    assert_eq!(widget.accordion().observer_count(), 3);

    for (control, content) in fx.controls.iter().zip(&fx.contents) {
        assert_eq!(fx.doc.attr(*control, "aria-expanded"), Some("false"));
        assert_eq!(
            fx.doc.attr(*control, "aria-controls"),
            fx.doc.attr(*content, "id")
        );
        assert_eq!(
            fx.doc.attr(*control, "data-accordion-control-animation"),
            Some("true")
        );
        assert_eq!(
            fx.doc.attr(*content, "data-accordion-content-animation"),
            Some("false")
        );
    }
}

#[test]
fn toggle_a_then_a_then_b() {
    let (mut fx, widget) = mounted(&[("a", 40.0), ("b", 60.0)]);
    let [ctl_a, ctl_b] = [fx.controls[0], fx.controls[1]];
    let [a, b] = [fx.contents[0], fx.contents[1]];

    fx.doc.click(ctl_a);
    assert_eq!(widget.active_item().as_deref(), Some("a"));
    assert_eq!(fx.doc.attr(a, "hidden"), None);
    assert_eq!(fx.doc.attr(b, "hidden"), Some("true"));
    assert_eq!(fx.doc.attr(ctl_a, "aria-expanded"), Some("true"));
    assert_eq!(fx.doc.attr(ctl_b, "aria-expanded"), Some("false"));
    assert_eq!(fx.doc.attr(ctl_a, "data-accordion-expanded"), Some("true"));
    assert_eq!(fx.doc.attr(ctl_b, "data-accordion-expanded"), Some("false"));
    assert_eq!(expanded_panels(&fx), 1);

    fx.doc.click(ctl_a);
    assert_eq!(widget.active_item(), None);
    assert_eq!(expanded_panels(&fx), 0);
    assert_eq!(fx.doc.attr(ctl_a, "aria-expanded"), Some("false"));
    fx.doc.end_transition(a);
    assert_eq!(fx.doc.attr(a, "hidden"), Some("true"));

    fx.doc.click(ctl_b);
    assert_eq!(widget.active_item().as_deref(), Some("b"));
    assert_eq!(fx.doc.attr(b, "hidden"), None);
    assert_eq!(fx.doc.attr(a, "hidden"), Some("true"));
    assert_eq!(expanded_panels(&fx), 1);
}

#[test]
fn switching_items_animates_both_panels() {
    let (mut fx, _widget) = mounted(&[("a", 40.0), ("b", 60.0)]);
    let [a, b] = [fx.contents[0], fx.contents[1]];

    fx.doc.click(fx.controls[0]);
    fx.doc.run_frames(2);
    assert_eq!(fx.doc.style(a, "height"), Some("40px"));

    fx.doc.click(fx.controls[1]);

    // Collapsing panel: visible, zero height, flagged off, one-shot armed.
    assert_eq!(fx.doc.attr(a, "hidden"), None);
    assert_eq!(fx.doc.style(a, "height"), Some("0px"));
    assert_eq!(
        fx.doc.attr(a, "data-accordion-content-animation"),
        Some("false")
    );
    assert_eq!(fx.doc.listener_count(a, EventKind::TransitionEnd), 1);

    // Expanding panel: zero height now, natural height two frames later.
    assert_eq!(fx.doc.style(b, "height"), Some("0px"));
    fx.doc.run_frame();
    assert_eq!(fx.doc.style(b, "height"), Some("0px"));
    fx.doc.run_frame();
    assert_eq!(fx.doc.style(b, "height"), Some("60px"));
    assert_eq!(
        fx.doc.attr(b, "data-accordion-content-animation"),
        Some("true")
    );

    assert_eq!(fx.doc.end_transition(a), 1);
    assert_eq!(fx.doc.attr(a, "hidden"), Some("true"));
    assert_eq!(fx.doc.style(a, "height"), None);
    assert_eq!(fx.doc.listener_count(a, EventKind::TransitionEnd), 0);
    assert_eq!(fx.doc.end_transition(a), 0);
}

#[test]
fn reopening_before_the_first_frame_keeps_the_panel_visible() {
    let (mut fx, widget) = mounted(&[("a", 40.0), ("b", 60.0)]);
    let a = fx.contents[0];

    fx.doc.click(fx.controls[0]);
    fx.doc.run_frames(2);
    fx.doc.click(fx.controls[0]);
    fx.doc.click(fx.controls[0]);
    assert_eq!(fx.doc.end_transition(a), 1);
    fx.doc.run_frames(2);

    assert_eq!(widget.active_item().as_deref(), Some("a"));
    assert_eq!(fx.doc.attr(a, "hidden"), None);
    assert_eq!(fx.doc.attr(a, "data-accordion-expanded"), Some("true"));
    assert_eq!(fx.doc.style(a, "height"), Some("40px"));
}

/// Detaches the accessibility observer and itself on its first update, and
/// subscribes `late` in their place.
struct Handover {
    accordion: Weak<Accordion<MemoryDocument>>,
    aria: SharedObserver<MemoryDocument>,
    me: Option<SharedObserver<MemoryDocument>>,
    late: SharedObserver<MemoryDocument>,
    calls: usize,
}

impl Observer<MemoryDocument> for Handover {
    fn update(&mut self, _: &mut MemoryDocument, _: &ActiveItem) {
        self.calls += 1;
        let Some(accordion) = self.accordion.upgrade() else {
            return;
        };
        accordion.unsubscribe(&self.aria);
        if let Some(me) = self.me.take() {
            accordion.unsubscribe(&me);
        }
        accordion.subscribe(Rc::clone(&self.late));
    }
}

#[derive(Default)]
struct Seen(Vec<Option<String>>);

impl Observer<MemoryDocument> for Seen {
    fn update(&mut self, _: &mut MemoryDocument, state: &ActiveItem) {
        self.0.push(state.get().map(String::from));
    }
}

#[test]
fn observers_can_rewire_the_accordion_from_a_click() {
    let (mut fx, widget) = mounted(&[("a", 40.0), ("b", 60.0)]);
    let [ctl_a, ctl_b] = [fx.controls[0], fx.controls[1]];
    let seen = Rc::new(RefCell::new(Seen::default()));
    let handover = Rc::new(RefCell::new(Handover {
        accordion: Rc::downgrade(widget.accordion()),
        aria: widget.aria().clone(),
        me: None,
        late: seen.clone(),
        calls: 0,
    }));
    let shared: SharedObserver<MemoryDocument> = handover.clone();
    handover.borrow_mut().me = Some(Rc::clone(&shared));
    assert!(widget.accordion().subscribe(shared));
    assert_eq!(widget.accordion().observer_count(), 4);

    // The accessibility observer ran earlier in this pass; `late` waits.
    fx.doc.click(ctl_a);
    assert_eq!(handover.borrow().calls, 1);
    assert_eq!(fx.doc.attr(ctl_a, "aria-expanded"), Some("true"));
    assert!(seen.borrow().0.is_empty());
    assert_eq!(widget.accordion().observer_count(), 3);

    fx.doc.click(ctl_b);
    assert_eq!(handover.borrow().calls, 1);
    assert_eq!(seen.borrow().0, [Some(String::from("b"))]);
    assert_eq!(fx.doc.attr(ctl_a, "aria-expanded"), Some("true"));
    assert_eq!(fx.doc.attr(ctl_b, "aria-expanded"), Some("false"));
    assert_eq!(fx.doc.attr(fx.contents[1], "hidden"), None);
}

#[test]
fn removed_panel_keeps_its_listener_armed() {
    let (mut fx, _widget) = mounted(&[("a", 40.0), ("b", 60.0)]);
    let a = fx.contents[0];

    fx.doc.click(fx.controls[0]);
    fx.doc.click(fx.controls[1]);
    fx.doc.detach(a);

    assert_eq!(fx.doc.listener_count(a, EventKind::TransitionEnd), 1);
    assert_eq!(fx.doc.style(a, "height"), Some("0px"));
}

#[test]
fn controls_added_after_mount_are_not_wired() {
    let (mut fx, widget) = mounted(&[("a", 40.0)]);
    let root = fx.doc.query_selector(".accordion-js").unwrap();
    let late = fx
        .doc
        .element(root, "button", &[("data-accordion-control", "late")]);
    fx.doc
        .element(root, "div", &[("data-accordion-content", "late")]);

    assert_eq!(fx.doc.click(late), 0);
    assert_eq!(widget.active_item(), None);

    // Programmatic toggles still see the late panel.
    widget.toggle(&mut fx.doc, "late");
    assert_eq!(fx.doc.attr(late, "aria-expanded"), Some("true"));
}

#[test]
fn clicks_on_nested_content_reach_the_control() {
    let (mut fx, widget) = mounted(&[("a", 40.0)]);
    let label = fx.doc.element(fx.controls[0], "span", &[]);
    assert_eq!(fx.doc.click(label), 1);
    assert_eq!(widget.active_item().as_deref(), Some("a"));
}

#[test]
fn empty_control_value_is_ignored() {
    let mut fx = fixture(&[("a", 40.0)]);
    let root = fx.doc.query_selector(".accordion-js").unwrap();
    let blank = fx
        .doc
        .element(root, "button", &[("data-accordion-control", "")]);
    let widget = mount(&mut fx.doc, ".accordion-js", &Config::default());

    fx.doc.click(fx.controls[0]);
    fx.doc.click(blank);
    assert_eq!(widget.active_item().as_deref(), Some("a"));
}

#[test]
fn missing_root_mounts_inert() {
    let mut fx = fixture(&[("a", 40.0)]);
    let widget = mount(&mut fx.doc, "#not-here", &Config::default());
    assert_eq!(widget.wired(), 0);

    widget.toggle(&mut fx.doc, "a");
    assert_eq!(widget.active_item().as_deref(), Some("a"));
    assert_eq!(fx.doc.attr(fx.contents[0], "hidden"), None);
    assert_eq!(fx.doc.attr(fx.controls[0], "aria-expanded"), None);
    assert_eq!(fx.doc.pending_frames(), 0);
}

#[test]
fn panel_without_control_still_opens() {
    let mut doc = MemoryDocument::new();
    let root = doc.element(doc.body(), "div", &[("class", "accordion-js")]);
    let panel = doc.element(root, "div", &[("data-accordion-content", "solo")]);
    let widget = mount(&mut doc, ".accordion-js", &Config::default());

    widget.toggle(&mut doc, "solo");
    assert_eq!(doc.attr(panel, "hidden"), None);
    assert_eq!(doc.attr(panel, "data-accordion-expanded"), Some("true"));
}

#[test]
fn without_animation_panels_snap() {
    let mut fx = fixture(&[("a", 40.0), ("b", 60.0)]);
    let config = Config {
        animate: false,
        ..Config::default()
    };
    let widget = mount(&mut fx.doc, ".accordion-js", &config);
    assert!(widget.animation().is_none());
    assert_eq!(widget.accordion().observer_count(), 2);

    fx.doc.click(fx.controls[0]);
    fx.doc.click(fx.controls[1]);
    assert_eq!(fx.doc.pending_frames(), 0);
    assert_eq!(fx.doc.attr(fx.contents[0], "hidden"), Some("true"));
    assert_eq!(fx.doc.style(fx.contents[1], "height"), None);
}

#[test]
fn custom_markers() {
    const MARKERS: Markers = Markers {
        control: "data-faq-question",
        content: "data-faq-answer",
        ..Markers::DEFAULT
    };
    let mut doc = MemoryDocument::new();
    let root = doc.element(doc.body(), "section", &[("id", "faq")]);
    let question = doc.element(root, "h3", &[("data-faq-question", "q1")]);
    let answer = doc.element(root, "p", &[("data-faq-answer", "q1")]);

    let widget = mount(
        &mut doc,
        "#faq",
        &Config {
            markers: MARKERS,
            animate: true,
        },
    );
    doc.click(question);
    assert_eq!(widget.active_item().as_deref(), Some("q1"));
    assert_eq!(doc.attr(answer, "id"), Some("q1"));
    assert_eq!(doc.attr(question, "aria-controls"), Some("q1"));
    assert_eq!(doc.attribute(&answer, "hidden"), None);
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Top-level composition of subject, observers and wiring.

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;
use core::fmt;

use understory_dom::Document;

use crate::animation::AnimationObserver;
use crate::aria::AriaObserver;
use crate::interface::InterfaceObserver;
use crate::markers::Config;
use crate::subject::{Accordion, SharedObserver};
use crate::wiring::bind_controls;

/// A mounted accordion: the subject, its observers and the wiring count.
///
/// Dropping the widget does not unwire the controls; their listeners keep the
/// subject alive for as long as the host keeps them.
pub struct AccordionWidget<D: Document> {
    accordion: Rc<Accordion<D>>,
    interface: Rc<RefCell<InterfaceObserver<D>>>,
    aria: Rc<RefCell<AriaObserver<D>>>,
    animation: Option<Rc<RefCell<AnimationObserver<D>>>>,
    wired: usize,
}

impl<D: Document> fmt::Debug for AccordionWidget<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccordionWidget")
            .field("accordion", &self.accordion)
            .field("animation", &self.animation.is_some())
            .field("wired", &self.wired)
            .finish_non_exhaustive()
    }
}

impl<D: Document> AccordionWidget<D> {
    /// The shared subject.
    pub fn accordion(&self) -> &Rc<Accordion<D>> {
        &self.accordion
    }

    /// The visibility observer.
    pub fn interface(&self) -> &Rc<RefCell<InterfaceObserver<D>>> {
        &self.interface
    }

    /// The accessibility observer.
    pub fn aria(&self) -> &Rc<RefCell<AriaObserver<D>>> {
        &self.aria
    }

    /// The animation observer, unless mounted with `animate: false`.
    pub fn animation(&self) -> Option<&Rc<RefCell<AnimationObserver<D>>>> {
        self.animation.as_ref()
    }

    /// Number of controls wired at mount time.
    pub fn wired(&self) -> usize {
        self.wired
    }

    /// Toggles `item` as if its control had been clicked.
    pub fn toggle(&self, doc: &mut D, item: &str) {
        self.accordion.toggle(doc, item);
    }

    /// The active item, if any.
    pub fn active_item(&self) -> Option<String> {
        self.accordion.active_item()
    }
}

/// Builds and wires an accordion over the root matching `root_selector`.
///
/// Observers are subscribed in the order interface, accessibility, animation,
/// so the animation observer measures panels the interface observer has
/// already revealed.
pub fn mount<D: Document>(doc: &mut D, root_selector: &str, config: &Config) -> AccordionWidget<D> {
    let markers = config.markers;
    let accordion = Rc::new(Accordion::new());

    let interface = Rc::new(RefCell::new(InterfaceObserver::new(doc, root_selector, markers)));
    let aria = Rc::new(RefCell::new(AriaObserver::new(doc, root_selector, markers)));
    let animation = config
        .animate
        .then(|| Rc::new(RefCell::new(AnimationObserver::new(doc, root_selector, markers))));

    let interface_shared: SharedObserver<D> = interface.clone();
    let aria_shared: SharedObserver<D> = aria.clone();
    accordion.subscribe(interface_shared);
    accordion.subscribe(aria_shared);
    if let Some(animation) = &animation {
        let animation_shared: SharedObserver<D> = animation.clone();
        accordion.subscribe(animation_shared);
    }

    let wired = bind_controls(doc, root_selector, markers, &accordion);
    AccordionWidget {
        accordion,
        interface,
        aria,
        animation,
        wired,
    }
}

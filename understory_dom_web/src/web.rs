// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;

use js_sys::Function;
use understory_dom::{Document, EventKind, FrameCallback, IntervalCallback, Listener, TimerControl};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, HtmlElement, NodeList, Window};

/// Why a [`WebDocument`] could not be created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostError {
    /// There is no global `window` (for example inside a worker).
    NoWindow,
    /// The window has no `document`.
    NoDocument,
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => f.write_str("no global window"),
            Self::NoDocument => f.write_str("window has no document"),
        }
    }
}

impl core::error::Error for HostError {}

/// The browser page as a [`Document`].
#[derive(Clone)]
pub struct WebDocument {
    window: Window,
    document: web_sys::Document,
}

impl fmt::Debug for WebDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebDocument")
            .field("window", &self.window)
            .field("document", &self.document)
            .finish()
    }
}

impl WebDocument {
    /// Binds to the global `window` and its `document`.
    ///
    /// # Errors
    ///
    /// [`HostError`] when either is unavailable.
    pub fn new() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        Self::from_window(window)
    }

    /// Binds to `window` and its `document`.
    ///
    /// # Errors
    ///
    /// [`HostError::NoDocument`] when the window has no document.
    pub fn from_window(window: Window) -> Result<Self, HostError> {
        let document = window.document().ok_or(HostError::NoDocument)?;
        Ok(Self { window, document })
    }

    /// The bound window.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The bound document.
    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }
}

fn html_elements(list: Result<NodeList, JsValue>, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = list else {
        rejected(selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

#[cfg_attr(not(feature = "tracing"), expect(unused_variables, reason = "only logged"))]
fn rejected(selector: &str) {
    #[cfg(feature = "tracing")]
    tracing::warn!(selector, "selector rejected by the browser");
}

#[cfg_attr(not(feature = "tracing"), expect(unused_variables, reason = "only logged"))]
fn failed(call: &str, err: &JsValue) {
    #[cfg(feature = "tracing")]
    tracing::debug!(call, ?err, "DOM call threw");
}

impl Document for WebDocument {
    type Element = HtmlElement;

    fn query_selector(&self, selector: &str) -> Option<HtmlElement> {
        match self.document.query_selector(selector) {
            Ok(found) => found.and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            Err(_) => {
                rejected(selector);
                None
            }
        }
    }

    fn query_selector_all(&self, selector: &str) -> Vec<HtmlElement> {
        html_elements(self.document.query_selector_all(selector), selector)
    }

    fn descendants_with_attribute(&self, root: &HtmlElement, name: &str) -> Vec<HtmlElement> {
        let selector = format!("[{name}]");
        html_elements(root.query_selector_all(&selector), &selector)
    }

    fn attribute(&self, element: &HtmlElement, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn has_attribute(&self, element: &HtmlElement, name: &str) -> bool {
        element.has_attribute(name)
    }

    fn set_attribute(&mut self, element: &HtmlElement, name: &str, value: &str) {
        if let Err(err) = element.set_attribute(name, value) {
            failed("setAttribute", &err);
        }
    }

    fn remove_attribute(&mut self, element: &HtmlElement, name: &str) {
        if let Err(err) = element.remove_attribute(name) {
            failed("removeAttribute", &err);
        }
    }

    fn text_content(&self, element: &HtmlElement) -> String {
        element.text_content().unwrap_or_default()
    }

    fn set_text_content(&mut self, element: &HtmlElement, text: &str) {
        element.set_text_content(Some(text));
    }

    fn offset_height(&self, element: &HtmlElement) -> f64 {
        f64::from(element.offset_height())
    }

    fn set_style(&mut self, element: &HtmlElement, property: &str, value: Option<&str>) {
        let style = element.style();
        let result = match value {
            Some(value) => style.set_property(property, value),
            None => style.remove_property(property).map(drop),
        };
        if let Err(err) = result {
            failed("style", &err);
        }
    }

    fn add_listener(&mut self, element: &HtmlElement, kind: EventKind, listener: Listener<Self>) {
        let mut host = self.clone();
        let target = element.clone();
        let result = match listener {
            Listener::Once(f) => {
                let callback =
                    Closure::once_into_js(move |_: web_sys::Event| f(&mut host, &target));
                let options = AddEventListenerOptions::new();
                options.set_once(true);
                element.add_event_listener_with_callback_and_add_event_listener_options(
                    kind.name(),
                    callback.unchecked_ref::<Function>(),
                    &options,
                )
            }
            Listener::Every(mut f) => {
                let callback = Closure::<dyn FnMut(web_sys::Event)>::new(
                    move |_: web_sys::Event| f(&mut host, &target),
                );
                let result = element
                    .add_event_listener_with_callback(kind.name(), callback.as_ref().unchecked_ref::<Function>());
                // Persistent listeners are never removed.
                callback.forget();
                result
            }
        };
        if let Err(err) = result {
            failed("addEventListener", &err);
        }
    }

    fn request_animation_frame(&mut self, callback: FrameCallback<Self>) {
        let mut host = self.clone();
        let frame = Closure::once_into_js(move |_: f64| callback(&mut host));
        if let Err(err) = self.window.request_animation_frame(frame.unchecked_ref::<Function>()) {
            failed("requestAnimationFrame", &err);
        }
    }

    fn set_interval(&mut self, period_ms: u32, mut callback: IntervalCallback<Self>) {
        let mut host = self.clone();
        let handle = Rc::new(Cell::new(None::<i32>));
        let own_handle = Rc::clone(&handle);
        let tick = Closure::<dyn FnMut()>::new(move || {
            if callback(&mut host) == TimerControl::Stop
                && let Some(id) = own_handle.take()
            {
                host.window.clear_interval_with_handle(id);
            }
        });
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref::<Function>(),
                timeout,
            ) {
            Ok(id) => handle.set(Some(id)),
            Err(err) => failed("setInterval", &err),
        }
        // The browser owns the callback until the interval is cleared.
        tick.forget();
    }
}

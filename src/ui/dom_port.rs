//! [`RenderPort`] over the browser DOM
//!
//! Elements are located by their `data-gate` attribute and cached after the
//! first successful lookup.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::core::geometry::Rect;
use crate::core::lifecycle::Teardown;
use crate::core::render::{ElementId, RenderPort, TimerTask};

/// Called when a scheduled timer fires
pub type TimerWake = Rc<dyn Fn(TimerTask)>;

pub struct DomTimer(Timeout);

impl Teardown for DomTimer {
    fn teardown(self) {
        let _ = self.0.cancel();
    }
}

pub struct DomPort {
    window: Window,
    document: Document,
    elements: RefCell<HashMap<ElementId, HtmlElement>>,
    wake: TimerWake,
}

impl DomPort {
    pub fn new(window: Window, document: Document, wake: TimerWake) -> Self {
        Self {
            window,
            document,
            elements: RefCell::new(HashMap::new()),
            wake,
        }
    }

    fn element(&self, id: ElementId) -> Option<HtmlElement> {
        if let Some(element) = self.elements.borrow().get(&id) {
            return Some(element.clone());
        }

        let element = self
            .document
            .query_selector(&id.selector())
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        self.elements.borrow_mut().insert(id, element.clone());
        Some(element)
    }
}

impl RenderPort for DomPort {
    type Timer = DomTimer;

    fn bounding_box(&self, id: ElementId) -> Option<Rect> {
        let rect = self.element(id)?.get_bounding_client_rect();
        Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn set_style(&mut self, id: ElementId, props: &[(&str, String)]) {
        let Some(element) = self.element(id) else {
            return;
        };
        let style = element.style();
        for (name, value) in props {
            let _ = style.set_property(name, value);
        }
    }

    fn set_class(&mut self, id: ElementId, class: &str, enabled: bool) {
        if let Some(element) = self.element(id) {
            let _ = element.class_list().toggle_with_force(class, enabled);
        }
    }

    fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(element) = self.element(id) {
            element.set_text_content(Some(text));
        }
    }

    fn scroll_to_end(&mut self, id: ElementId) {
        let Some(element) = self.element(id) else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(element.scroll_height() as f64);
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_to_with_scroll_to_options(&options);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let Some(body) = self.document.body() else {
            return;
        };
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }

    fn scroll_to(&mut self, offset: f64) {
        let options = ScrollToOptions::new();
        options.set_top(offset);
        options.set_behavior(ScrollBehavior::Instant);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn set_timeout(&mut self, task: TimerTask, delay_ms: u32) -> DomTimer {
        let wake = self.wake.clone();
        DomTimer(Timeout::new(delay_ms, move || wake(task)))
    }
}

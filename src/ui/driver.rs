//! Browser driver for the scroll components
//!
//! Listeners only record input and request an animation frame; all layout
//! reads and style writes happen once per frame in `Shared::run_frame`.
//! Every listener and the pending frame are tracked and removed by
//! [`ScrollDriver::stop`], which also runs on drop.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget, TouchEvent, WheelEvent, Window};

use crate::core::config::GateConfig;
use crate::core::gate::ScrollGate;
use crate::core::input::{InputQueue, WheelDeltaMode, normalize_wheel_delta};
use crate::core::lifecycle::{HandleSet, Teardown};
use crate::core::navbar::NavbarWidget;
use crate::core::render::{RenderPort, TimerTask};
use crate::core::tour::TourWidget;
use crate::core::transcript::TranscriptWidget;
use crate::ui::dom_port::DomPort;

/// A registered DOM event listener
pub struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Teardown for ListenerHandle {
    fn teardown(self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// What the landing page renders for the driver to attach to
pub struct PageLayout {
    pub tour_steps: usize,
    /// Text of each transcript line, in order
    pub transcript: Vec<String>,
}

struct Components {
    gate: ScrollGate<DomPort>,
    tour: Option<TourWidget>,
    navbar: Option<NavbarWidget>,
    transcript: Option<TranscriptWidget<DomPort>>,
}

impl Components {
    fn attach(port: &DomPort, config: GateConfig, layout: PageLayout) -> Self {
        let gate = ScrollGate::attach(port, config);
        if let Some(err) = gate.error() {
            leptos::logging::warn!("Scroll gate disabled: {}", err);
        }

        let tour = TourWidget::attach(port, layout.tour_steps)
            .map_err(|e| leptos::logging::warn!("Tour line disabled: {}", e))
            .ok();
        let navbar = NavbarWidget::attach(port)
            .map_err(|e| leptos::logging::warn!("Navbar tracking disabled: {}", e))
            .ok();
        let transcript = TranscriptWidget::attach(port, layout.transcript)
            .map_err(|e| leptos::logging::warn!("Transcript disabled: {}", e))
            .ok();

        Self {
            gate,
            tour,
            navbar,
            transcript,
        }
    }
}

struct Shared {
    window: Window,
    queue: RefCell<InputQueue>,
    port: RefCell<DomPort>,
    components: RefCell<Components>,
    frame: RefCell<Option<Closure<dyn FnMut()>>>,
    frame_id: Cell<Option<i32>>,
}

impl Shared {
    fn is_locked(&self) -> bool {
        self.components.borrow().gate.is_locked()
    }

    /// Schedule one animation frame unless one is already pending
    fn request_frame(&self) {
        if !self.queue.borrow_mut().request_frame() {
            return;
        }
        if let Some(callback) = self.frame.borrow().as_ref() {
            match self
                .window
                .request_animation_frame(callback.as_ref().unchecked_ref())
            {
                Ok(id) => self.frame_id.set(Some(id)),
                Err(_) => leptos::logging::warn!("requestAnimationFrame failed"),
            }
        }
    }

    fn run_frame(&self) {
        self.frame_id.set(None);
        let deltas = self.queue.borrow_mut().drain();

        let mut port = self.port.borrow_mut();
        let mut components = self.components.borrow_mut();
        let components = &mut *components;

        // The indicator stays hidden until the tour reaches its final step
        if let Some(tour) = components.tour.as_mut() {
            tour.tick(&mut *port);
            components.gate.set_indicator_hidden(!tour.final_box_reached());
        }
        components.gate.tick(&mut *port, &deltas);
        if let Some(navbar) = components.navbar.as_mut() {
            navbar.tick(&mut *port);
        }
        if let Some(transcript) = components.transcript.as_mut() {
            transcript.tick(&mut *port, &deltas);
        }
    }
}

fn first_touch_y(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(touch.client_y() as f64)
}

/// Running scroll components for the current page
pub struct ScrollDriver {
    shared: Rc<Shared>,
    listeners: HandleSet<&'static str, ListenerHandle>,
}

impl ScrollDriver {
    /// Attach the gate, the tour line, the navbar and the transcript, then
    /// start listening.
    ///
    /// Components whose elements are missing stay inert. Returns `None` only
    /// without a window or document.
    pub fn start(config: GateConfig, layout: PageLayout) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let shared = Rc::new_cyclic(|weak: &Weak<Shared>| {
            let wake_target = weak.clone();
            let port = DomPort::new(
                window.clone(),
                document,
                Rc::new(move |task: TimerTask| {
                    if let Some(shared) = wake_target.upgrade() {
                        shared.queue.borrow_mut().push_timer(task);
                        shared.request_frame();
                    }
                }),
            );
            let components = Components::attach(&port, config, layout);

            Shared {
                window: window.clone(),
                queue: RefCell::new(InputQueue::new()),
                port: RefCell::new(port),
                components: RefCell::new(components),
                frame: RefCell::new(None),
                frame_id: Cell::new(None),
            }
        });

        let frame_target = Rc::downgrade(&shared);
        *shared.frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(shared) = frame_target.upgrade() {
                shared.run_frame();
            }
        }) as Box<dyn FnMut()>));

        let mut driver = Self {
            shared,
            listeners: HandleSet::new(),
        };
        driver.register_listeners(&window);
        driver.shared.request_frame();

        Some(driver)
    }

    fn register_listeners(&mut self, window: &Window) {
        let target: &EventTarget = window.as_ref();

        for event in ["scroll", "resize"] {
            let shared = Rc::downgrade(&self.shared);
            self.listen(target, event, true, move |_| {
                if let Some(shared) = shared.upgrade() {
                    shared.request_frame();
                }
            });
        }

        let shared = Rc::downgrade(&self.shared);
        self.listen(target, "wheel", false, move |event| {
            let Some(shared) = shared.upgrade() else {
                return;
            };
            if !shared.is_locked() {
                return;
            }
            event.prevent_default();

            if let Some(wheel) = event.dyn_ref::<WheelEvent>() {
                let page_height = shared.port.borrow().viewport_height();
                let delta = normalize_wheel_delta(
                    wheel.delta_y(),
                    WheelDeltaMode::from_dom(wheel.delta_mode()),
                    page_height,
                );
                shared.queue.borrow_mut().push_wheel(delta);
            }
            shared.request_frame();
        });

        let shared = Rc::downgrade(&self.shared);
        self.listen(target, "touchstart", true, move |event| {
            if let (Some(shared), Some(y)) = (shared.upgrade(), first_touch_y(&event)) {
                shared.queue.borrow_mut().touch_start(y);
            }
        });

        let shared = Rc::downgrade(&self.shared);
        self.listen(target, "touchmove", false, move |event| {
            let (Some(shared), Some(y)) = (shared.upgrade(), first_touch_y(&event)) else {
                return;
            };
            shared.queue.borrow_mut().touch_move(y);
            if shared.is_locked() {
                event.prevent_default();
                shared.request_frame();
            }
        });

        for event in ["touchend", "touchcancel"] {
            let shared = Rc::downgrade(&self.shared);
            self.listen(target, event, true, move |_| {
                if let Some(shared) = shared.upgrade() {
                    shared.queue.borrow_mut().touch_end();
                }
            });
        }
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);

        match target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(()) => self.listeners.insert(
                event,
                ListenerHandle {
                    target: target.clone(),
                    event,
                    callback,
                },
            ),
            Err(_) => leptos::logging::warn!("Failed to register {} listener", event),
        }
    }

    /// Remove listeners, cancel the pending frame and timers, release the lock
    pub fn stop(&mut self) {
        self.listeners.teardown_all();

        if let Some(id) = self.shared.frame_id.take() {
            let _ = self.shared.window.cancel_animation_frame(id);
        }
        self.shared.queue.borrow_mut().drain();

        {
            let mut port = self.shared.port.borrow_mut();
            let mut components = self.shared.components.borrow_mut();
            components.gate.detach(&mut *port);
            if let Some(transcript) = components.transcript.as_mut() {
                transcript.detach();
            }
            components.tour = None;
            components.navbar = None;
            components.transcript = None;
        }

        self.shared.frame.borrow_mut().take();
    }
}

impl Drop for ScrollDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

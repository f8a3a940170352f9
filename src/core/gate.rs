//! Scroll gate component
//!
//! Binds a [`Coordinator`] to a [`RenderPort`]: measures layout each frame,
//! applies the coordinator's effects and writes the styles that changed.
//! A gate that fails to attach stays [`ScrollGate::Disabled`] and never
//! touches the page.

use crate::core::config::GateConfig;
use crate::core::coordinator::{Coordinator, Effect, ElementStyle, FrameInput, FrameOutput};
use crate::core::input::FrameDeltas;
use crate::core::lifecycle::HandleSet;
use crate::core::render::{ElementId, RenderPort, TimerTask, opacity, require_elements, translate_y};
use crate::core::state::MessageState;

pub use crate::core::render::GateError;

/// Class toggled on the action panel while it is shown
const ACTION_VISIBLE_CLASS: &str = "visible";

/// Elements the gate cannot run without
pub fn required_elements(message_count: usize) -> impl Iterator<Item = ElementId> {
    [
        ElementId::Line,
        ElementId::Indicator,
        ElementId::MessagePanel,
        ElementId::ActionPanel,
    ]
    .into_iter()
    .chain((0..message_count).map(ElementId::Message))
}

/// Attached gate state
pub struct ActiveGate<P: RenderPort> {
    coordinator: Coordinator,
    timers: HandleSet<TimerTask, P::Timer>,
    last: Option<FrameOutput>,
    scroll_locked: bool,
    indicator_hidden: bool,
}

pub enum ScrollGate<P: RenderPort> {
    Attached(ActiveGate<P>),
    Disabled(GateError),
    Detached,
}

impl<P: RenderPort> ScrollGate<P> {
    /// Validate `config` and the page, then start tracking
    pub fn attach(port: &P, config: GateConfig) -> Self {
        let checked = config
            .validate()
            .map_err(GateError::from)
            .and_then(|_| require_elements(port, required_elements(config.message_count())));

        match checked {
            Ok(()) => {
                tracing::debug!(messages = config.message_count(), "scroll gate attached");
                ScrollGate::Attached(ActiveGate {
                    coordinator: Coordinator::new(config),
                    timers: HandleSet::new(),
                    last: None,
                    scroll_locked: false,
                    indicator_hidden: false,
                })
            }
            Err(err) => {
                tracing::warn!("Scroll gate disabled: {}", err);
                ScrollGate::Disabled(err)
            }
        }
    }

    /// True while the gate holds the page
    pub fn is_locked(&self) -> bool {
        match self {
            ScrollGate::Attached(gate) => gate.coordinator.is_locked(),
            _ => false,
        }
    }

    pub fn error(&self) -> Option<&GateError> {
        match self {
            ScrollGate::Disabled(err) => Some(err),
            _ => None,
        }
    }

    pub fn coordinator(&self) -> Option<&Coordinator> {
        match self {
            ScrollGate::Attached(gate) => Some(&gate.coordinator),
            _ => None,
        }
    }

    /// Keep the indicator transparent until another component releases it
    pub fn set_indicator_hidden(&mut self, hidden: bool) {
        if let ScrollGate::Attached(gate) = self {
            gate.indicator_hidden = hidden;
        }
    }

    /// Run one frame
    pub fn tick(&mut self, port: &mut P, deltas: &FrameDeltas) {
        if let ScrollGate::Attached(gate) = self {
            gate.tick(port, deltas);
        }
    }

    /// Cancel timers, release a held lock and go inert
    pub fn detach(&mut self, port: &mut P) {
        if let ScrollGate::Attached(gate) = self {
            gate.timers.teardown_all();
            if gate.scroll_locked {
                port.set_scroll_locked(false);
            }
            tracing::debug!("scroll gate detached");
            *self = ScrollGate::Detached;
        }
    }
}

impl<P: RenderPort> ActiveGate<P> {
    fn tick(&mut self, port: &mut P, deltas: &FrameDeltas) {
        for task in &deltas.timers {
            self.on_timer(*task);
        }

        let Some(input) = measure(port, deltas.scroll_delta, self.indicator_hidden) else {
            tracing::trace!("scroll gate elements unmeasurable, frame skipped");
            return;
        };
        let Some(output) = self.coordinator.step(&input) else {
            return;
        };

        for effect in &output.effects {
            self.apply(port, *effect);
        }
        self.render(port, &output);
        self.last = Some(output);
    }

    fn on_timer(&mut self, task: TimerTask) {
        match task {
            TimerTask::RevealActionPanel => {
                // Fired timers are forgotten, not cancelled
                let _ = self.timers.take(&task);
                if self.coordinator.reveal_action_panel() {
                    tracing::debug!("action panel revealed");
                }
            }
            TimerTask::TranscriptStep => {}
        }
    }

    fn apply(&mut self, port: &mut P, effect: Effect) {
        match effect {
            Effect::LockScroll { .. } => {
                port.set_scroll_locked(true);
                self.scroll_locked = true;
            }
            Effect::UnlockScroll { restore_to, .. } => {
                port.set_scroll_locked(false);
                port.scroll_to(restore_to);
                self.scroll_locked = false;
            }
            Effect::ScheduleActionReveal { delay_ms } => {
                let timer = port.set_timeout(TimerTask::RevealActionPanel, delay_ms);
                self.timers.insert(TimerTask::RevealActionPanel, timer);
            }
            Effect::CancelActionReveal => {
                self.timers.cancel(&TimerTask::RevealActionPanel);
            }
        }
    }

    /// Write only what differs from the previous frame
    fn render(&self, port: &mut P, output: &FrameOutput) {
        let last = self.last.as_ref();

        let styles = [
            (ElementId::Indicator, output.indicator, last.map(|l| l.indicator)),
            (
                ElementId::MessagePanel,
                output.message_panel,
                last.map(|l| l.message_panel),
            ),
            (
                ElementId::ActionPanel,
                output.action_panel,
                last.map(|l| l.action_panel),
            ),
        ];
        for (id, style, previous) in styles {
            if previous != Some(style) {
                write_style(port, id, style);
            }
        }

        let action_visible = output.action_panel.opacity > 0.0;
        if last.map(|l| l.action_panel.opacity > 0.0) != Some(action_visible) {
            port.set_class(ElementId::ActionPanel, ACTION_VISIBLE_CLASS, action_visible);
        }

        for (index, state) in output.messages.iter().enumerate() {
            let previous = last.and_then(|l| l.messages.get(index));
            if previous != Some(state) {
                for class in MessageState::ALL {
                    port.set_class(ElementId::Message(index), class.class(), class == *state);
                }
            }
        }
    }
}

fn measure<P: RenderPort>(port: &P, scroll_delta: f64, indicator_hidden: bool) -> Option<FrameInput> {
    let line = port.bounding_box(ElementId::Line)?;
    let indicator = port.bounding_box(ElementId::Indicator)?;
    Some(FrameInput {
        line,
        indicator_height: indicator.height,
        viewport_height: port.viewport_height(),
        scroll_offset: port.scroll_offset(),
        scroll_delta,
        indicator_hidden,
    })
}

fn write_style<P: RenderPort>(port: &mut P, id: ElementId, style: ElementStyle) {
    port.set_style(
        id,
        &[
            ("opacity", opacity(style.opacity)),
            ("transform", translate_y(style.offset)),
        ],
    );
}

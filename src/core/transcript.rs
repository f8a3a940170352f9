//! Simulated meeting transcript
//!
//! Once the transcript box scrolls into view, its lines appear one at a
//! time and their text is typed out character by character. After the last
//! line the transcript pauses, clears and starts over. Every step is a
//! tracked timeout, so detaching stops the loop immediately.

use crate::core::geometry::visible_fraction;
use crate::core::input::FrameDeltas;
use crate::core::lifecycle::HandleSet;
use crate::core::render::{ElementId, GateError, RenderPort, TimerTask, require_elements};

/// Share of the transcript box that must be on screen to start
pub const START_VISIBLE_FRACTION: f64 = 0.3;
/// Scroll the transcript to its end every this many typed characters
const SCROLL_EVERY_CHARS: usize = 10;

const SHOWN_CLASS: &str = "shown";
const VISIBLE_CLASS: &str = "visible";
const TYPING_CLASS: &str = "typing";

/// Delays between transcript steps, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptTiming {
    /// From adding a line to sliding it in
    pub reveal_ms: u32,
    /// Per typed character
    pub typing_ms: u32,
    /// After a line is complete
    pub message_ms: u32,
    /// After the last line, before starting over
    pub loop_ms: u32,
}

impl Default for TranscriptTiming {
    fn default() -> Self {
        Self {
            reveal_ms: 100,
            typing_ms: 30,
            message_ms: 1500,
            loop_ms: 3000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Waiting to scroll into view
    Idle,
    /// Line added, about to slide in
    Appearing(usize),
    Typing { index: usize, typed: usize },
    /// Line complete, pausing before the next one
    Holding(usize),
    /// Every line shown, pausing before starting over
    Looping,
}

pub struct TranscriptWidget<P: RenderPort> {
    lines: Vec<String>,
    timing: TranscriptTiming,
    phase: Phase,
    timers: HandleSet<TimerTask, P::Timer>,
}

impl<P: RenderPort> TranscriptWidget<P> {
    /// Attach to the transcript box and its pre-rendered `lines`
    pub fn attach(port: &P, lines: Vec<String>) -> Result<Self, GateError> {
        let required = std::iter::once(ElementId::Transcript).chain(
            (0..lines.len())
                .flat_map(|index| [ElementId::TranscriptLine(index), ElementId::TranscriptText(index)]),
        );
        require_elements(port, required)?;

        Ok(Self {
            lines,
            timing: TranscriptTiming::default(),
            phase: Phase::Idle,
            timers: HandleSet::new(),
        })
    }

    pub fn tick(&mut self, port: &mut P, deltas: &FrameDeltas) {
        for task in &deltas.timers {
            // Only a step we still track may advance; a late one is dropped
            if *task == TimerTask::TranscriptStep && self.timers.take(task).is_some() {
                self.advance(port);
            }
        }

        if self.phase == Phase::Idle && !self.lines.is_empty() {
            let in_view = port
                .bounding_box(ElementId::Transcript)
                .map(|rect| visible_fraction(&rect, port.viewport_height()))
                .is_some_and(|fraction| fraction >= START_VISIBLE_FRACTION);
            if in_view {
                tracing::debug!(lines = self.lines.len(), "transcript started");
                self.start(port);
            }
        }
    }

    /// Cancel the pending step and stop
    pub fn detach(&mut self) {
        self.timers.teardown_all();
        self.phase = Phase::Idle;
    }

    fn start(&mut self, port: &mut P) {
        for index in 0..self.lines.len() {
            port.set_class(ElementId::TranscriptLine(index), SHOWN_CLASS, false);
            port.set_class(ElementId::TranscriptLine(index), VISIBLE_CLASS, false);
            port.set_text(ElementId::TranscriptText(index), "");
        }
        self.show(port, 0);
    }

    fn show(&mut self, port: &mut P, index: usize) {
        port.set_class(ElementId::TranscriptLine(index), SHOWN_CLASS, true);
        port.set_class(ElementId::TranscriptText(index), TYPING_CLASS, true);
        port.scroll_to_end(ElementId::Transcript);

        self.phase = Phase::Appearing(index);
        self.schedule(port, self.timing.reveal_ms);
    }

    fn advance(&mut self, port: &mut P) {
        match self.phase {
            Phase::Idle => {}
            Phase::Appearing(index) => {
                port.set_class(ElementId::TranscriptLine(index), VISIBLE_CLASS, true);
                self.type_next(port, index, 0);
            }
            Phase::Typing { index, typed } => self.type_next(port, index, typed),
            Phase::Holding(index) if index + 1 < self.lines.len() => self.show(port, index + 1),
            Phase::Holding(_) => {
                self.phase = Phase::Looping;
                self.schedule(port, self.timing.loop_ms);
            }
            Phase::Looping => self.start(port),
        }
    }

    fn type_next(&mut self, port: &mut P, index: usize, typed: usize) {
        let Some(text) = self.lines.get(index) else {
            return;
        };

        if typed < text.chars().count() {
            let typed = typed + 1;
            let shown: String = text.chars().take(typed).collect();
            port.set_text(ElementId::TranscriptText(index), &shown);
            if (typed - 1) % SCROLL_EVERY_CHARS == 0 {
                port.scroll_to_end(ElementId::Transcript);
            }

            self.phase = Phase::Typing { index, typed };
            self.schedule(port, self.timing.typing_ms);
        } else {
            port.set_class(ElementId::TranscriptText(index), TYPING_CLASS, false);
            port.scroll_to_end(ElementId::Transcript);

            self.phase = Phase::Holding(index);
            self.schedule(port, self.timing.message_ms);
        }
    }

    fn schedule(&mut self, port: &mut P, delay_ms: u32) {
        let timer = port.set_timeout(TimerTask::TranscriptStep, delay_ms);
        self.timers.insert(TimerTask::TranscriptStep, timer);
    }
}

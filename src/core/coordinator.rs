//! Scroll-progress coordinator
//!
//! Maps the position of a reference line to an indicator placement, and holds
//! the page at a pause point while the user scrolls through a list of
//! messages. The coordinator never touches the page itself: each call to
//! [`Coordinator::step`] takes one frame of measurements and returns the
//! styles to render plus the side effects to perform.
//!
//! # Usage Example
//!
//! ```rust
//! use scrollgate::core::config::GateConfig;
//! use scrollgate::core::coordinator::{Coordinator, FrameInput};
//! use scrollgate::core::geometry::Rect;
//!
//! let mut coordinator = Coordinator::new(GateConfig::default());
//! let frame = FrameInput {
//!     line: Rect::vertical(-200.0, 1000.0),
//!     indicator_height: 20.0,
//!     viewport_height: 800.0,
//!     scroll_offset: 1200.0,
//!     scroll_delta: 0.0,
//!     indicator_hidden: false,
//! };
//!
//! let output = coordinator.step(&frame).unwrap();
//! assert_eq!(output.progress, 0.6);
//! assert!(!coordinator.is_locked());
//! ```

use crate::core::config::GateConfig;
use crate::core::geometry::{Rect, clamp01, line_progress};
use crate::core::state::{Direction, GateState, MessageState, PauseState};

/// Measurements and input collected for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Reference line in viewport coordinates
    pub line: Rect,
    pub indicator_height: f64,
    pub viewport_height: f64,
    /// Current page scroll offset
    pub scroll_offset: f64,
    /// Wheel/touch pixels received since the previous frame
    pub scroll_delta: f64,
    /// Keep the indicator transparent regardless of progress
    pub indicator_hidden: bool,
}

/// Side effect requested by a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Suppress page scrolling at `offset`
    LockScroll { offset: f64 },
    /// Restore page scrolling and move to `restore_to`
    UnlockScroll {
        restore_to: f64,
        direction: Direction,
    },
    /// Start the action panel reveal timer
    ScheduleActionReveal { delay_ms: u32 },
    /// Drop an outstanding reveal timer
    CancelActionReveal,
}

/// Opacity and vertical offset of a rendered element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementStyle {
    pub opacity: f64,
    /// Pixels along the Y axis
    pub offset: f64,
}

impl ElementStyle {
    pub fn new(opacity: f64, offset: f64) -> Self {
        Self { opacity, offset }
    }
}

/// Everything a frame renders
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    /// Progress shown by the indicator
    pub progress: f64,
    pub indicator: ElementStyle,
    pub message_panel: ElementStyle,
    pub action_panel: ElementStyle,
    pub active_message: usize,
    pub messages: Vec<MessageState>,
    pub effects: Vec<Effect>,
}

impl FrameOutput {
    /// Same rendered styles, ignoring effects
    pub fn same_styles(&self, other: &FrameOutput) -> bool {
        self.progress == other.progress
            && self.indicator == other.indicator
            && self.message_panel == other.message_panel
            && self.action_panel == other.action_panel
            && self.messages == other.messages
    }
}

/// Indicator placement for a progress value.
///
/// Opacity fades in over the first `appear` pixels of travel and out over the
/// last `disappear` pixels.
pub fn indicator_style(
    progress: f64,
    line_height: f64,
    indicator_height: f64,
    appear: f64,
    disappear: f64,
) -> ElementStyle {
    let max_offset = (line_height - indicator_height).max(0.0);
    let offset = clamp01(progress) * max_offset;

    let fade = |distance: f64, limit: f64| {
        if limit <= 0.0 {
            1.0
        } else {
            (distance / limit).min(1.0)
        }
    };

    let opacity = fade(offset, appear).min(fade(max_offset - offset, disappear));
    ElementStyle::new(clamp01(opacity), offset)
}

/// Index of the active message for a secondary progress value
pub fn active_message_index(secondary: f64, threshold: f64, count: usize) -> usize {
    if count <= 1 || threshold <= 0.0 {
        return 0;
    }
    let last = count - 1;
    let index = (clamp01(secondary / threshold) * last as f64).floor() as usize;
    index.min(last)
}

/// Per-frame scroll gate state machine
#[derive(Debug, Clone)]
pub struct Coordinator {
    config: GateConfig,
    state: GateState,
}

impl Coordinator {
    pub fn new(config: GateConfig) -> Self {
        Self {
            config,
            state: GateState::default(),
        }
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state.pause.is_locked()
    }

    /// Advance one frame.
    ///
    /// Returns `None` and leaves the state untouched when the line has no
    /// height.
    pub fn step(&mut self, input: &FrameInput) -> Option<FrameOutput> {
        let raw = line_progress(&input.line, input.viewport_height)?;
        let mut effects = Vec::new();

        match self.state.pause {
            PauseState::Free => self.track(raw, input.scroll_offset, &mut effects),
            PauseState::Pausing => {
                self.state.pause = PauseState::Locked;
                self.absorb(input.scroll_delta, &mut effects);
            }
            PauseState::Locked => self.absorb(input.scroll_delta, &mut effects),
        }

        Some(self.render(input, effects))
    }

    /// Called when the reveal timer fires. Returns false if the reveal was
    /// cancelled in the meantime.
    pub fn reveal_action_panel(&mut self) -> bool {
        if !self.state.action_reveal_pending {
            return false;
        }
        self.state.action_reveal_pending = false;
        self.state.action_revealed = true;
        true
    }

    /// Free scrolling: follow the line and watch for the pause band
    fn track(&mut self, raw: f64, scroll_offset: f64, effects: &mut Vec<Effect>) {
        let pause_point = self.config.pause_point;

        let direction = if self.state.measured {
            Direction::from_delta(
                raw - self.state.previous_progress,
                self.config.direction_noise_floor,
            )
        } else {
            self.state.measured = true;
            self.state.previous_progress = raw;
            None
        };

        if let Some(direction) = direction {
            self.state.previous_progress = raw;
            self.state.direction = Some(direction);
        }
        self.state.progress = raw;

        let distance = (raw - pause_point).abs();
        if distance > self.config.reset_distance && self.state.pass.any() {
            tracing::debug!(progress = raw, "scroll gate re-armed");
            self.state.pass.reset();
        }

        if raw < pause_point - self.config.reset_distance {
            self.hide_action_panel(effects);
        }

        let in_band = distance <= self.config.pause_tolerance;
        if !in_band {
            self.state.disarmed = false;
        }

        if let Some(direction) = direction {
            if in_band && !self.state.disarmed && !self.state.pass.has_passed(direction) {
                self.acquire(direction, scroll_offset, effects);
            }
        }
    }

    fn acquire(&mut self, direction: Direction, scroll_offset: f64, effects: &mut Vec<Effect>) {
        let pause_point = self.config.pause_point;

        self.state.pause = PauseState::Pausing;
        self.state.entry = Some(direction);
        self.state.frozen_offset = scroll_offset;
        self.state.secondary_progress = match direction {
            Direction::Forward => 0.0,
            Direction::Backward => self.config.threshold(),
        };
        self.state.progress = pause_point;
        self.state.previous_progress = pause_point;

        tracing::debug!(
            direction = direction.as_str(),
            offset = scroll_offset,
            "scroll gate locked"
        );
        effects.push(Effect::LockScroll {
            offset: scroll_offset,
        });
    }

    /// Locked: feed intercepted deltas into secondary progress
    fn absorb(&mut self, delta: f64, effects: &mut Vec<Effect>) {
        let Some(travel) = Direction::from_delta(delta, 0.0) else {
            return;
        };
        if !delta.is_finite() {
            return;
        }

        let threshold = self.config.threshold();
        let next = self.state.secondary_progress + delta * self.config.wheel_sensitivity;
        self.state.secondary_progress = next.clamp(0.0, threshold);

        let at_bound = match travel {
            Direction::Forward => self.state.secondary_progress >= threshold,
            Direction::Backward => self.state.secondary_progress <= 0.0,
        };
        if at_bound {
            self.release(travel, effects);
        }
    }

    fn release(&mut self, direction: Direction, effects: &mut Vec<Effect>) {
        let pause_point = self.config.pause_point;

        self.state.pause = PauseState::Free;
        self.state.entry = None;
        self.state.pass.mark_passed(direction);
        self.state.disarmed = true;
        self.state.progress = pause_point;
        self.state.previous_progress = pause_point;
        self.state.direction = Some(direction);

        let restore_to =
            (self.state.frozen_offset + direction.sign() * self.config.unlock_nudge).max(0.0);

        tracing::debug!(
            direction = direction.as_str(),
            restore_to,
            "scroll gate released"
        );
        effects.push(Effect::UnlockScroll {
            restore_to,
            direction,
        });

        match direction {
            Direction::Forward => {
                if !self.state.action_revealed && !self.state.action_reveal_pending {
                    self.state.action_reveal_pending = true;
                    effects.push(Effect::ScheduleActionReveal {
                        delay_ms: self.config.action_reveal_delay_ms,
                    });
                }
            }
            Direction::Backward => self.hide_action_panel(effects),
        }
    }

    fn hide_action_panel(&mut self, effects: &mut Vec<Effect>) {
        if self.state.action_reveal_pending {
            self.state.action_reveal_pending = false;
            effects.push(Effect::CancelActionReveal);
        }
        self.state.action_revealed = false;
    }

    fn render(&self, input: &FrameInput, effects: Vec<Effect>) -> FrameOutput {
        let config = &self.config;
        let progress = if self.is_locked() {
            config.pause_point
        } else {
            self.state.progress
        };

        let mut indicator = indicator_style(
            progress,
            input.line.height,
            input.indicator_height,
            config.appear_distance,
            config.disappear_distance,
        );
        if input.indicator_hidden {
            indicator.opacity = 0.0;
        }

        let reveal = clamp01(1.0 - (progress - config.pause_point).abs() / config.reset_distance);
        let message_panel = ElementStyle::new(reveal, (1.0 - reveal) * config.panel_travel);

        let action_panel = if self.state.action_revealed {
            ElementStyle::new(1.0, 0.0)
        } else {
            ElementStyle::new(0.0, config.panel_travel)
        };

        let count = config.message_count();
        let active_message =
            active_message_index(self.state.secondary_progress, config.threshold(), count);
        let messages = (0..count)
            .map(|index| MessageState::for_index(index, active_message))
            .collect();

        FrameOutput {
            progress,
            indicator,
            message_panel,
            action_panel,
            active_message,
            messages,
            effects,
        }
    }
}

//! Explicit state of the scroll gate
//!
//! Everything the gate remembers between frames lives in [`GateState`], so the
//! per-frame update is a function of (state, layout, input) and nothing else.

/// Whether page scrolling is currently held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PauseState {
    /// Page scrolls normally
    #[default]
    Free,
    /// Lock acquired during this frame
    Pausing,
    /// Page scroll suppressed, deltas feed secondary progress
    Locked,
}

impl PauseState {
    /// Both `Pausing` and `Locked` intercept input
    pub fn is_locked(&self) -> bool {
        !matches!(self, PauseState::Free)
    }
}

/// Travel direction along the line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Scrolling down the page, progress increasing
    Forward,
    /// Scrolling up the page, progress decreasing
    Backward,
}

impl Direction {
    /// Direction of a change, or `None` when it is below `noise_floor`
    pub fn from_delta(delta: f64, noise_floor: f64) -> Option<Self> {
        if delta.is_nan() || delta.abs() < noise_floor || delta == 0.0 {
            None
        } else if delta > 0.0 {
            Some(Direction::Forward)
        } else {
            Some(Direction::Backward)
        }
    }

    pub fn sign(&self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

/// One-shot guards against re-locking in a direction already traversed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassFlags {
    pub forward: bool,
    pub backward: bool,
}

impl PassFlags {
    pub fn has_passed(&self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.forward,
            Direction::Backward => self.backward,
        }
    }

    pub fn mark_passed(&mut self, direction: Direction) {
        match direction {
            Direction::Forward => self.forward = true,
            Direction::Backward => self.backward = true,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        self.forward || self.backward
    }
}

/// Visual state of a single message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageState {
    Pending,
    Active,
    Completed,
}

impl MessageState {
    pub const ALL: [MessageState; 3] = [
        MessageState::Pending,
        MessageState::Active,
        MessageState::Completed,
    ];

    /// CSS class carried by a message in this state
    pub fn class(&self) -> &'static str {
        match self {
            MessageState::Pending => "pending",
            MessageState::Active => "active",
            MessageState::Completed => "completed",
        }
    }

    /// State of message `index` given the active one
    pub fn for_index(index: usize, active: usize) -> Self {
        use std::cmp::Ordering;
        match index.cmp(&active) {
            Ordering::Less => MessageState::Completed,
            Ordering::Equal => MessageState::Active,
            Ordering::Greater => MessageState::Pending,
        }
    }
}

/// Mutable state carried between frames
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GateState {
    /// Progress reported to the indicator (pinned while locked)
    pub progress: f64,
    /// Last progress at which a direction was registered
    pub previous_progress: f64,
    /// Most recently registered direction
    pub direction: Option<Direction>,
    /// Set once the first frame has seeded `previous_progress`
    pub measured: bool,
    pub pause: PauseState,
    /// Message-scroll progress in `[0, threshold]`
    pub secondary_progress: f64,
    /// Direction in which the current lock was entered
    pub entry: Option<Direction>,
    pub pass: PassFlags,
    /// Set on release; no lock in either direction until progress has left
    /// the tolerance band
    pub disarmed: bool,
    /// Page offset held while locked
    pub frozen_offset: f64,
    /// A reveal timer for the action panel is outstanding
    pub action_reveal_pending: bool,
    pub action_revealed: bool,
}

//! Input coalescing between animation frames
//!
//! Event listeners only record what happened; the frame callback drains the
//! queue once and feeds a single consistent update to every component.

use crate::core::render::TimerTask;

/// Pixels per line for `DOM_DELTA_LINE` wheel events
pub const WHEEL_LINE_HEIGHT: f64 = 16.0;

/// Unit of a wheel event delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WheelDeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

impl WheelDeltaMode {
    /// Map `WheelEvent.deltaMode`
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => WheelDeltaMode::Line,
            2 => WheelDeltaMode::Page,
            _ => WheelDeltaMode::Pixel,
        }
    }
}

/// Convert a wheel delta to pixels
pub fn normalize_wheel_delta(delta: f64, mode: WheelDeltaMode, page_height: f64) -> f64 {
    match mode {
        WheelDeltaMode::Pixel => delta,
        WheelDeltaMode::Line => delta * WHEEL_LINE_HEIGHT,
        WheelDeltaMode::Page => delta * page_height,
    }
}

/// Input accumulated for one frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameDeltas {
    /// Wheel and touch travel in pixels, positive scrolls down
    pub scroll_delta: f64,
    /// Timers that fired since the previous frame
    pub timers: Vec<TimerTask>,
}

/// Pending input between frames
#[derive(Debug, Default)]
pub struct InputQueue {
    scroll_delta: f64,
    touch_y: Option<f64>,
    timers: Vec<TimerTask>,
    frame_requested: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_wheel(&mut self, delta: f64) {
        if delta.is_finite() {
            self.scroll_delta += delta;
        }
    }

    pub fn touch_start(&mut self, y: f64) {
        self.touch_y = Some(y);
    }

    /// Record finger movement. Moving the finger up scrolls down, so the
    /// returned delta is `previous - current`.
    pub fn touch_move(&mut self, y: f64) -> f64 {
        let delta = match self.touch_y {
            Some(previous) => previous - y,
            None => 0.0,
        };
        self.touch_y = Some(y);
        self.push_wheel(delta);
        delta
    }

    pub fn touch_end(&mut self) {
        self.touch_y = None;
    }

    pub fn push_timer(&mut self, task: TimerTask) {
        self.timers.push(task);
    }

    /// Ask for a frame. Returns true only for the first request since the
    /// last drain, which is when a new animation frame must be scheduled.
    pub fn request_frame(&mut self) -> bool {
        !std::mem::replace(&mut self.frame_requested, true)
    }

    pub fn is_frame_requested(&self) -> bool {
        self.frame_requested
    }

    /// Take everything recorded since the previous frame
    pub fn drain(&mut self) -> FrameDeltas {
        self.frame_requested = false;
        FrameDeltas {
            scroll_delta: std::mem::take(&mut self.scroll_delta),
            timers: std::mem::take(&mut self.timers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_deltas_accumulate() {
        let mut queue = InputQueue::new();
        queue.push_wheel(40.0);
        queue.push_wheel(-10.0);
        queue.push_wheel(f64::NAN);

        assert_eq!(queue.drain().scroll_delta, 30.0);
        assert_eq!(queue.drain().scroll_delta, 0.0);
    }

    #[test]
    fn test_touch_move_direction() {
        let mut queue = InputQueue::new();
        assert_eq!(queue.touch_move(300.0), 0.0);

        queue.touch_start(500.0);
        // Finger travels up by 120px -> scroll down
        assert_eq!(queue.touch_move(380.0), 120.0);
        assert_eq!(queue.touch_move(400.0), -20.0);
        queue.touch_end();
        assert_eq!(queue.touch_move(100.0), 0.0);

        assert_eq!(queue.drain().scroll_delta, 100.0);
    }

    #[test]
    fn test_one_frame_request_per_frame() {
        let mut queue = InputQueue::new();
        assert!(queue.request_frame());
        assert!(!queue.request_frame());
        assert!(queue.is_frame_requested());

        queue.drain();
        assert!(!queue.is_frame_requested());
        assert!(queue.request_frame());
    }

    #[test]
    fn test_timers_drained_once() {
        let mut queue = InputQueue::new();
        queue.push_timer(TimerTask::RevealActionPanel);

        assert_eq!(queue.drain().timers, vec![TimerTask::RevealActionPanel]);
        assert!(queue.drain().timers.is_empty());
    }

    #[test]
    fn test_normalize_wheel_delta() {
        assert_eq!(
            normalize_wheel_delta(3.0, WheelDeltaMode::from_dom(1), 800.0),
            48.0
        );
        assert_eq!(
            normalize_wheel_delta(1.0, WheelDeltaMode::from_dom(2), 800.0),
            800.0
        );
        assert_eq!(
            normalize_wheel_delta(12.5, WheelDeltaMode::from_dom(0), 800.0),
            12.5
        );
    }
}

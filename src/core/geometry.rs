//! Layout geometry shared by the scroll-driven components
//!
//! All rectangles are in viewport coordinates, the same space that
//! `Element.getBoundingClientRect()` reports.

/// Axis-aligned rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle with only a vertical extent, enough for line measurements
    pub fn vertical(top: f64, height: f64) -> Self {
        Self::new(0.0, top, 0.0, height)
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Rectangle translated so that `origin` becomes the top edge
    pub fn relative_to(&self, origin: f64) -> Self {
        Self {
            top: self.top - origin,
            ..*self
        }
    }
}

/// Clamp to `[0, 1]`, mapping NaN to 0
pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Share of `rect`'s height that lies inside the viewport
pub fn visible_fraction(rect: &Rect, viewport_height: f64) -> f64 {
    if rect.height <= 0.0 || !rect.height.is_finite() {
        return 0.0;
    }
    let visible = rect.bottom().min(viewport_height) - rect.top.max(0.0);
    clamp01(visible / rect.height)
}

/// Progress of a reference line past the viewport centre.
///
/// Returns `None` for a line without height so callers can skip the frame
/// instead of dividing by zero.
pub fn line_progress(line: &Rect, viewport_height: f64) -> Option<f64> {
    if line.height <= 0.0 || !line.height.is_finite() {
        return None;
    }

    let center = viewport_height / 2.0;
    let progress = if line.top <= center && line.bottom() >= center {
        (center - line.top) / line.height
    } else if line.bottom() < center {
        1.0
    } else {
        0.0
    };

    Some(clamp01(progress))
}

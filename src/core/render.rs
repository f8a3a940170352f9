//! Render port: the only way components reach the page
//!
//! Components read layout and write styles through [`RenderPort`], so they can
//! run against the DOM in the browser and against a recording fake in tests.

use derive_more::Display;

use crate::core::config::ConfigError;
use crate::core::geometry::Rect;
use crate::core::lifecycle::Teardown;

/// Elements the scroll components drive.
///
/// The display form is the value of the element's `data-gate` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ElementId {
    #[display("line")]
    Line,
    #[display("indicator")]
    Indicator,
    #[display("message-panel")]
    MessagePanel,
    #[display("action-panel")]
    ActionPanel,
    #[display("message-{_0}")]
    Message(usize),
    #[display("tour-line")]
    TourLine,
    #[display("tour-segment")]
    TourSegment,
    #[display("tour-box-{_0}")]
    TourBox(usize),
    #[display("tour-icon")]
    TourIcon,
    #[display("transcript")]
    Transcript,
    #[display("transcript-line-{_0}")]
    TranscriptLine(usize),
    #[display("transcript-text-{_0}")]
    TranscriptText(usize),
    #[display("navbar")]
    Navbar,
}

impl ElementId {
    /// CSS selector matching the element
    pub fn selector(&self) -> String {
        format!("[data-gate=\"{}\"]", self)
    }
}

/// Deferred work a component can schedule through the port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TimerTask {
    #[display("reveal-action-panel")]
    RevealActionPanel,
    #[display("transcript-step")]
    TranscriptStep,
}

/// Failure to attach a component to the page
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GateError {
    #[error("Required element not found: {0}")]
    MissingElement(ElementId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Layout reads and style writes against the rendered page
pub trait RenderPort {
    /// Handle to a scheduled timeout; tearing it down cancels the timeout
    type Timer: Teardown;

    /// Bounding box in viewport coordinates, `None` if the element is absent
    fn bounding_box(&self, id: ElementId) -> Option<Rect>;

    fn viewport_height(&self) -> f64;

    /// Vertical page scroll offset in pixels
    fn scroll_offset(&self) -> f64;

    /// Set inline style properties
    fn set_style(&mut self, id: ElementId, props: &[(&str, String)]);

    /// Add (`enabled`) or remove a class
    fn set_class(&mut self, id: ElementId, class: &str, enabled: bool);

    /// Replace the element's text content
    fn set_text(&mut self, id: ElementId, text: &str);

    /// Scroll the element's own content to its end
    fn scroll_to_end(&mut self, id: ElementId);

    /// Suppress or restore native page scrolling
    fn set_scroll_locked(&mut self, locked: bool);

    fn scroll_to(&mut self, offset: f64);

    /// Schedule `task` to be delivered back to the component after `delay_ms`
    fn set_timeout(&mut self, task: TimerTask, delay_ms: u32) -> Self::Timer;
}

/// Check that every element in `ids` is present
pub fn require_elements<P: RenderPort>(
    port: &P,
    ids: impl IntoIterator<Item = ElementId>,
) -> Result<(), GateError> {
    for id in ids {
        if port.bounding_box(id).is_none() {
            return Err(GateError::MissingElement(id));
        }
    }
    Ok(())
}

/// `translateY` transform for a vertical offset
pub fn translate_y(offset: f64) -> String {
    format!("translateY({:.2}px)", offset)
}

pub fn translate_x(offset: f64) -> String {
    format!("translateX({:.2}px)", offset)
}

pub fn opacity(value: f64) -> String {
    format!("{:.3}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_id_attribute_names() {
        assert_eq!(ElementId::Line.to_string(), "line");
        assert_eq!(ElementId::MessagePanel.to_string(), "message-panel");
        assert_eq!(ElementId::Message(3).to_string(), "message-3");
        assert_eq!(ElementId::TourBox(0).to_string(), "tour-box-0");
        assert_eq!(ElementId::TranscriptText(2).to_string(), "transcript-text-2");
    }

    #[test]
    fn test_selector() {
        assert_eq!(
            ElementId::Message(1).selector(),
            "[data-gate=\"message-1\"]"
        );
    }

    #[test]
    fn test_style_formatting() {
        assert_eq!(translate_y(12.345), "translateY(12.35px)");
        assert_eq!(translate_x(-500.0), "translateX(-500.00px)");
        assert_eq!(opacity(0.5), "0.500");
    }

    #[test]
    fn test_gate_error_display() {
        let err = GateError::MissingElement(ElementId::Indicator);
        assert_eq!(err.to_string(), "Required element not found: indicator");

        let err: GateError = ConfigError::TooFewMessages(1).into();
        assert!(err.to_string().starts_with("Invalid configuration"));
    }
}

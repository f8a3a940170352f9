//! Product tour progress line
//!
//! A second reference line carries a short highlighted segment that follows
//! scroll progress; the step boxes beside the line light up while the
//! segment passes them. As the segment closes in on the final box an icon
//! slides in beside it.

use crate::core::geometry::{Rect, clamp01, line_progress};
use crate::core::render::{
    ElementId, GateError, RenderPort, opacity, require_elements, translate_x, translate_y,
};

const ACTIVE_CLASS: &str = "active";
const ICON_VISIBLE_CLASS: &str = "visible";

/// Segment distance from the final box over which the icon slides in
pub const ICON_APPROACH_PX: f64 = 50.0;
/// Icon x offset while hidden
pub const ICON_START_X: f64 = -500.0;
/// Icon x offset once the segment reaches the final box
pub const ICON_END_X: f64 = -50.0;

/// Rendered state of the tour line for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct TourFrame {
    pub progress: f64,
    /// Segment offset from the top of the line
    pub segment_offset: f64,
    /// Per box: is the segment centre inside it
    pub active: Vec<bool>,
    /// How far the icon has slid in, in `[0, 1]`
    pub icon_progress: f64,
}

impl TourFrame {
    /// The segment has reached (or passed) the top of the final box
    pub fn reached_final_box(&self) -> bool {
        self.icon_progress >= 1.0
    }

    pub fn icon_offset(&self) -> f64 {
        ICON_START_X + (ICON_END_X - ICON_START_X) * self.icon_progress
    }
}

/// Compute segment placement and box activation.
///
/// `boxes` are in the same (viewport) coordinates as `line`.
pub fn tour_frame(
    line: &Rect,
    viewport_height: f64,
    segment_height: f64,
    boxes: &[Rect],
) -> Option<TourFrame> {
    let progress = line_progress(line, viewport_height)?;
    let segment_offset = progress * (line.height - segment_height).max(0.0);
    let centre = segment_offset + segment_height / 2.0;

    let active = boxes
        .iter()
        .map(|b| {
            let relative = b.relative_to(line.top);
            centre >= relative.top && centre <= relative.bottom()
        })
        .collect();

    let icon_progress = boxes
        .last()
        .map(|b| clamp01(1.0 - (b.relative_to(line.top).top - centre) / ICON_APPROACH_PX))
        .unwrap_or(0.0);

    Some(TourFrame {
        progress,
        segment_offset,
        active,
        icon_progress,
    })
}

pub struct TourWidget {
    box_count: usize,
    last: Option<TourFrame>,
}

impl TourWidget {
    pub fn attach<P: RenderPort>(port: &P, box_count: usize) -> Result<Self, GateError> {
        let required = [ElementId::TourLine, ElementId::TourSegment, ElementId::TourIcon]
            .into_iter()
            .chain((0..box_count).map(ElementId::TourBox));
        require_elements(port, required)?;

        Ok(Self {
            box_count,
            last: None,
        })
    }

    pub fn tick<P: RenderPort>(&mut self, port: &mut P) {
        let Some(frame) = self.measure(port) else {
            return;
        };

        let last = self.last.as_ref();
        if last.map(|l| l.segment_offset) != Some(frame.segment_offset) {
            port.set_style(
                ElementId::TourSegment,
                &[("transform", translate_y(frame.segment_offset))],
            );
        }
        for (index, active) in frame.active.iter().enumerate() {
            if last.and_then(|l| l.active.get(index)) != Some(active) {
                port.set_class(ElementId::TourBox(index), ACTIVE_CLASS, *active);
            }
        }

        if last.map(|l| l.icon_progress) != Some(frame.icon_progress) {
            port.set_style(
                ElementId::TourIcon,
                &[
                    ("opacity", opacity(frame.icon_progress)),
                    ("transform", translate_x(frame.icon_offset())),
                ],
            );
        }
        let reached = frame.reached_final_box();
        if last.map(TourFrame::reached_final_box) != Some(reached) {
            port.set_class(ElementId::TourIcon, ICON_VISIBLE_CLASS, reached);
        }

        self.last = Some(frame);
    }

    /// Whether the last measured frame reached the final box
    pub fn final_box_reached(&self) -> bool {
        self.last.as_ref().is_some_and(TourFrame::reached_final_box)
    }

    fn measure<P: RenderPort>(&self, port: &P) -> Option<TourFrame> {
        let line = port.bounding_box(ElementId::TourLine)?;
        let segment = port.bounding_box(ElementId::TourSegment)?;
        let boxes = (0..self.box_count)
            .map(|index| port.bounding_box(ElementId::TourBox(index)))
            .collect::<Option<Vec<_>>>()?;

        tour_frame(&line, port.viewport_height(), segment.height, &boxes)
    }
}

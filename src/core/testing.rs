//! Recording render port for component tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::core::geometry::Rect;
use crate::core::lifecycle::Teardown;
use crate::core::render::{ElementId, RenderPort, TimerTask};

/// A write made through the port
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Style(ElementId, Vec<(String, String)>),
    Class(ElementId, String, bool),
    ScrollLocked(bool),
    ScrollTo(f64),
    Text(ElementId, String),
    ScrollToEnd(ElementId),
    Timeout(TimerTask, u32),
}

pub struct FakeTimer {
    task: TimerTask,
    cancelled: Rc<RefCell<Vec<TimerTask>>>,
}

impl Teardown for FakeTimer {
    fn teardown(self) {
        self.cancelled.borrow_mut().push(self.task);
    }
}

/// In-memory page: fixed element boxes, a recorded mutation log
pub struct FakePort {
    pub boxes: HashMap<ElementId, Rect>,
    pub viewport_height: f64,
    pub scroll_offset: f64,
    pub mutations: Vec<Mutation>,
    pub cancelled: Rc<RefCell<Vec<TimerTask>>>,
}

impl FakePort {
    pub fn new() -> Self {
        Self {
            boxes: HashMap::new(),
            viewport_height: 800.0,
            scroll_offset: 0.0,
            mutations: Vec::new(),
            cancelled: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Page with every gate element: a 1000px line with its top at `line_top`
    pub fn with_gate(line_top: f64, message_count: usize) -> Self {
        let mut port = Self::new();
        port.boxes.insert(ElementId::Line, Rect::vertical(line_top, 1000.0));
        port.boxes.insert(ElementId::Indicator, Rect::vertical(line_top, 20.0));
        port.boxes.insert(ElementId::MessagePanel, Rect::vertical(0.0, 240.0));
        port.boxes.insert(ElementId::ActionPanel, Rect::vertical(300.0, 80.0));
        for index in 0..message_count {
            port.boxes.insert(
                ElementId::Message(index),
                Rect::vertical(index as f64 * 60.0, 60.0),
            );
        }
        port.scroll_offset = 2000.0 - line_top;
        port
    }

    /// Move the page so the gate line's top sits at `top`
    pub fn scroll_line_to(&mut self, top: f64) {
        if let Some(line) = self.boxes.get_mut(&ElementId::Line) {
            line.top = top;
        }
        self.scroll_offset = 2000.0 - top;
    }

    pub fn clear(&mut self) {
        self.mutations.clear();
    }

    pub fn styles_for(&self, id: ElementId) -> Vec<&Vec<(String, String)>> {
        self.mutations
            .iter()
            .filter_map(|m| match m {
                Mutation::Style(target, props) if *target == id => Some(props),
                _ => None,
            })
            .collect()
    }

    /// Last text written to `id`
    pub fn text_of(&self, id: ElementId) -> Option<String> {
        self.mutations.iter().rev().find_map(|m| match m {
            Mutation::Text(target, text) if *target == id => Some(text.clone()),
            _ => None,
        })
    }

    /// Classes currently enabled on `id`, replayed from the log
    pub fn classes(&self, id: ElementId) -> Vec<String> {
        let mut classes: Vec<String> = Vec::new();
        for mutation in &self.mutations {
            if let Mutation::Class(target, class, enabled) = mutation {
                if *target != id {
                    continue;
                }
                classes.retain(|c| c != class);
                if *enabled {
                    classes.push(class.clone());
                }
            }
        }
        classes
    }
}

impl RenderPort for FakePort {
    type Timer = FakeTimer;

    fn bounding_box(&self, id: ElementId) -> Option<Rect> {
        self.boxes.get(&id).copied()
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn set_style(&mut self, id: ElementId, props: &[(&str, String)]) {
        let props = props
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();
        self.mutations.push(Mutation::Style(id, props));
    }

    fn set_class(&mut self, id: ElementId, class: &str, enabled: bool) {
        self.mutations
            .push(Mutation::Class(id, class.to_string(), enabled));
    }

    fn set_text(&mut self, id: ElementId, text: &str) {
        self.mutations.push(Mutation::Text(id, text.to_string()));
    }

    fn scroll_to_end(&mut self, id: ElementId) {
        self.mutations.push(Mutation::ScrollToEnd(id));
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.mutations.push(Mutation::ScrollLocked(locked));
    }

    fn scroll_to(&mut self, offset: f64) {
        self.scroll_line_to(2000.0 - offset);
        self.mutations.push(Mutation::ScrollTo(offset));
    }

    fn set_timeout(&mut self, task: TimerTask, delay_ms: u32) -> FakeTimer {
        self.mutations.push(Mutation::Timeout(task, delay_ms));
        FakeTimer {
            task,
            cancelled: self.cancelled.clone(),
        }
    }
}

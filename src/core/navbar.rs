//! Navbar scroll classes

use crate::core::render::{ElementId, GateError, RenderPort, require_elements};

/// Scroll changes smaller than this are ignored
pub const SCROLL_NOISE_PX: f64 = 10.0;
/// Offset after which the navbar counts as scrolled
pub const SCROLLED_AFTER_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarClasses {
    pub scrolled: bool,
    /// Slid out of view while scrolling down
    pub hidden: bool,
}

impl NavbarClasses {
    pub fn class_list(&self) -> [(&'static str, bool); 3] {
        [
            ("scrolled", self.scrolled),
            ("hide-up", self.hidden),
            ("show-down", !self.hidden),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavbarTracker {
    last_scroll_y: f64,
}

impl NavbarTracker {
    pub fn new(scroll_y: f64) -> Self {
        Self {
            last_scroll_y: scroll_y,
        }
    }

    /// Classes for a new scroll offset, `None` if the change is noise
    pub fn update(&mut self, scroll_y: f64) -> Option<NavbarClasses> {
        if (scroll_y - self.last_scroll_y).abs() < SCROLL_NOISE_PX {
            return None;
        }

        let scrolling_down = scroll_y > self.last_scroll_y;
        self.last_scroll_y = scroll_y;

        let scrolled = scroll_y > SCROLLED_AFTER_PX;
        Some(NavbarClasses {
            scrolled,
            hidden: scrolled && scrolling_down,
        })
    }
}

pub struct NavbarWidget {
    tracker: NavbarTracker,
    last: Option<NavbarClasses>,
}

impl NavbarWidget {
    pub fn attach<P: RenderPort>(port: &P) -> Result<Self, GateError> {
        require_elements(port, [ElementId::Navbar])?;
        Ok(Self {
            tracker: NavbarTracker::new(port.scroll_offset()),
            last: None,
        })
    }

    pub fn tick<P: RenderPort>(&mut self, port: &mut P) {
        let Some(classes) = self.tracker.update(port.scroll_offset()) else {
            return;
        };
        if self.last == Some(classes) {
            return;
        }

        for (class, enabled) in classes.class_list() {
            port.set_class(ElementId::Navbar, class, enabled);
        }
        self.last = Some(classes);
    }
}

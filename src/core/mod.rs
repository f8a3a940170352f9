//! Scroll-driven behaviour of the landing page, independent of the DOM

pub mod config;
pub mod coordinator;
pub mod gate;
pub mod geometry;
pub mod input;
pub mod lifecycle;
pub mod navbar;
pub mod render;
#[cfg(feature = "ssr")]
pub mod server_config;
pub mod state;
pub mod tour;
pub mod transcript;

#[cfg(test)]
mod testing;
#[cfg(test)]
mod tests;

pub use config::{ConfigError, GateConfig};
pub use coordinator::{Coordinator, Effect, FrameInput, FrameOutput};
pub use gate::ScrollGate;
pub use render::{ElementId, GateError, RenderPort, TimerTask};

#[cfg(feature = "hydrate")]
pub mod dom_port;
#[cfg(feature = "hydrate")]
pub mod driver;
pub mod icon;
pub mod pages;

pub use icon::{Icon, icons};
pub use pages::{LandingPage, NotFoundPage};

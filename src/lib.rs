//! Scrollgate - scroll-driven landing page
//!
//! A Leptos application whose landing page pauses scrolling at a configured
//! point along a progress line and plays through a list of messages before
//! letting the page move on. The scroll logic lives in `core` and is
//! independent of the DOM; `ui` renders the page and drives it in the
//! browser.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

/// Read the gate config the server embedded in the page
#[cfg(feature = "hydrate")]
fn embedded_gate_config() -> crate::core::config::GateConfig {
    use crate::core::config::GateConfig;

    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(app::GATE_CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());

    match json {
        Some(json) => GateConfig::from_json(&json).unwrap_or_else(|e| {
            leptos::logging::warn!("Using default gate config: {}", e);
            GateConfig::default()
        }),
        None => {
            leptos::logging::warn!("No embedded gate config, using defaults");
            GateConfig::default()
        }
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let config = embedded_gate_config();
    leptos::mount::hydrate_body(move || {
        provide_context(config);
        view! { <App/> }
    });
}

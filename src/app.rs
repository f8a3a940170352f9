use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::config::GateConfig;
use crate::ui::{LandingPage, NotFoundPage};

/// Id of the `<script>` element carrying the gate config to the client
pub const GATE_CONFIG_ELEMENT_ID: &str = "gate-config";

/// Gate config serialized for embedding in a `<script>` element
pub fn embedded_config_json(config: &GateConfig) -> String {
    // Keep message text from closing the script element
    config.to_json().replace('<', "\\u003c")
}

/// Gate config provided by the server (or read back by the client)
pub fn use_gate_config() -> GateConfig {
    use_context::<GateConfig>().unwrap_or_default()
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config_json = embedded_config_json(&use_gate_config());

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="application/json" id=GATE_CONFIG_ELEMENT_ID inner_html=config_json></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = use_gate_config();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/scrollgate.css"/>

        <Title text="Relay"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route
                        path=path!("/")
                        view=move || view! { <LandingPage config=config.clone()/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

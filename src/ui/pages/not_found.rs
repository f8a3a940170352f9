//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <Icon name=icons::DOCUMENT_TEXT class="not-found-icon" />
            <h1 class="not-found-code">"404"</h1>
            <p class="section-lead">"The page you're looking for doesn't exist or has been moved."</p>
            <A href="/" attr:class="btn-primary">"Go Home"</A>
        </div>
    }
}

//! Heading-only view for catalog, cart, order, and admin routes.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn SectionPage(title: &'static str) -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("id");

    view! {
        <section class="page">
            <h1>{title}</h1>
            <Show when=move || id().is_some()>
                <p class="page__subtitle">"#" {move || id().unwrap_or_default()}</p>
            </Show>
        </section>
    }
}

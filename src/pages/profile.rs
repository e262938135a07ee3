//! Profile page: the decoded identity and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::router::routes::LOGIN_PATH;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let navigate = use_navigate();

    let email = move || session.with(|s| s.identity().map(|i| i.email.clone()));
    let user_id = move || session.with(|s| s.identity().map(|i| i.id.clone()));
    let is_admin = move || session.with(AppSession::is_admin);

    let on_logout = move |_| {
        session.update(AppSession::clear_token);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <section class="page profile-page">
            <h1>"Profile"</h1>
            <Show
                when=move || email().is_some()
                fallback=|| view! { <p class="profile-page__warning">"Session details unavailable."</p> }
            >
                <dl class="profile-page__fields">
                    <dt>"Email"</dt>
                    <dd>{move || email().unwrap_or_default()}</dd>
                    <dt>"User ID"</dt>
                    <dd>{move || user_id().unwrap_or_default()}</dd>
                </dl>
                <Show when=is_admin>
                    <span class="profile-page__badge">"Administrator"</span>
                </Show>
            </Show>
            <button class="auth-button" on:click=on_logout>
                "Log out"
            </button>
        </section>
    }
}

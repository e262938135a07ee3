//! Registration page: creates an account and signs straight in with the
//! returned token.

use leptos::prelude::*;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let session = expect_context::<RwSignal<crate::app::AppSession>>();
    #[cfg(feature = "csr")]
    let api = crate::app::use_api();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if name_value.is_empty() || email_value.is_empty() || password_value.is_empty() {
            info.set("Name, email and password are all required.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&api, &name_value, &email_value, &password_value).await {
                    // On success the route gate moves the user off this page.
                    Ok(token) => {
                        let warning = session.try_update(|s| super::sign_in::accept_token(s, &token)).flatten();
                        info.set(warning.unwrap_or_default());
                    }
                    Err(e) => info.set(format!("Registration failed: {e}")),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

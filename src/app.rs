//! Root application component with routing, the route guard gate, and
//! context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::net::ApiClient;
use crate::pages::{login::LoginPage, profile::ProfilePage, register::RegisterPage, section::SectionPage};
use crate::router::routes::LANDING_PATH;
use crate::router::{NavigationDecision, check};
use crate::session::{BrowserStorage, SessionStore};

/// Session context shared with pages and the guard.
pub type AppSession = SessionStore<BrowserStorage>;

/// API client for the configured backend, reading the browser token slot.
pub fn use_api() -> ApiClient<BrowserStorage> {
    ApiClient::new(expect_context::<ApiConfig>(), BrowserStorage)
}

/// Root application component.
///
/// Restores the session once and provides it, with the API config, to every
/// route below.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::restore(BrowserStorage));
    provide_context(session);
    provide_context(ApiConfig::from_build_env());

    view! {
        <Title text="Shop"/>

        <Router>
            <main>
                <RouteGate>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=|| view! { <Redirect path=LANDING_PATH/> }/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("products") view=|| view! { <SectionPage title="Products"/> }/>
                        <Route
                            path=(StaticSegment("products"), ParamSegment("id"))
                            view=|| view! { <SectionPage title="Product details"/> }
                        />
                        <Route path=StaticSegment("cart") view=|| view! { <SectionPage title="Cart"/> }/>
                        <Route path=StaticSegment("orders") view=|| view! { <SectionPage title="All orders"/> }/>
                        <Route path=StaticSegment("my-orders") view=|| view! { <SectionPage title="My orders"/> }/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                        <Route path=StaticSegment("add-product") view=|| view! { <SectionPage title="Add product"/> }/>
                        <Route
                            path=(StaticSegment("edit-product"), ParamSegment("id"))
                            view=|| view! { <SectionPage title="Edit product"/> }
                        />
                    </Routes>
                </RouteGate>
            </main>
        </Router>
    }
}

/// Runs the route guard on every location change.
///
/// Children render only while the guard allows the current path; otherwise
/// the gate replaces the history entry with the redirect target.
#[component]
pub fn RouteGate(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        session.with(|s| check(&path, s.snapshot()))
    });

    Effect::new(move || {
        if let NavigationDecision::Redirect(to) = decision.get() {
            log::debug!("route guard redirect: {} -> {to}", location.pathname.get_untracked());
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show when=move || decision.get() == NavigationDecision::Proceed>
            {children()}
        </Show>
    }
}

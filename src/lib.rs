//! # shopfront
//!
//! Leptos + WASM front-end for the e-commerce store: registration, login,
//! product browsing, cart, order history, and admin product management.
//!
//! The non-trivial core is the client-side session (`session`), the
//! authenticated HTTP transport (`net`), and the route authorization guard
//! (`router`). `app` wires them together; `pages` hosts the thin route views.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod session;

/// Browser entrypoint: install panic/console hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}

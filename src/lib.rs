//! # loyalty-portal
//!
//! Leptos + WASM frontend for a points-loyalty dashboard. Customers view
//! balances, transaction history, rewards, and transfers; staff look up
//! customers and issue points. All business rules live behind the REST
//! API — this crate owns the session/auth state machine, the role-based
//! route guard, and the bearer-credential request discipline.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: wires up logging and mounts the app over the
/// server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

//! Application chrome: sidebar navigation, header user menu, footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sidebar renders only the links valid for the active route state;
//! the route guard still enforces the same sets, so a hand-typed URL and
//! a clicked link go through identical policy.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;

use crate::state::session::SessionStore;
use crate::util::route_guard::{RouteState, classify};

/// Sidebar entries (path, label) for the active route state.
fn nav_items(state: RouteState) -> &'static [(&'static str, &'static str)] {
    match state {
        RouteState::Unauthenticated => &[],
        RouteState::Customer => &[
            ("/dashboard", "Overview"),
            ("/history", "Transaction History"),
            ("/redeem", "Redeem Points"),
            ("/transfer", "Transfer Points"),
        ],
        RouteState::Employee => &[("/employee/dashboard", "Customer Desk")],
        RouteState::UnknownRole => &[("/account", "Account")],
    }
}

/// Shell shared by every authenticated page.
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let username = move || {
        session
            .session()
            .identity
            .map_or_else(String::new, |identity| identity.username)
    };

    let on_logout = move |_| {
        session.logout();
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            let _ = window
                .location()
                .set_href(crate::util::route_guard::LOGIN_PATH);
        }
    };

    view! {
        <div class="app-layout">
            <aside class="app-layout__sidebar">
                <div class="app-layout__brand">"Loyalty Portal"</div>
                <nav class="app-layout__nav">
                    {move || {
                        nav_items(classify(&session.session()))
                            .iter()
                            .map(|(path, label)| {
                                view! {
                                    <a class="app-layout__nav-link" href=*path>
                                        {*label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </nav>
            </aside>
            <div class="app-layout__main">
                <header class="app-layout__header">
                    <span class="app-layout__user">{username}</span>
                    <button class="app-layout__logout" on:click=on_logout>
                        "Sign Out"
                    </button>
                </header>
                <main class="app-layout__content">{children()}</main>
                <footer class="app-layout__footer">"Loyalty System"</footer>
            </div>
        </div>
    }
}

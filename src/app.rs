//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    account::AccountPage, dashboard::CustomerDashboardPage, employee::EmployeeDashboardPage,
    history::HistoryPage, login::LoginPage, redeem::RedeemPage, transfer::TransferPage,
};
use crate::state::session::SessionStore;
use crate::util::route_guard::install_route_guard;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Restores the session from durable storage once, provides it as the
/// single shared state context, and sets up client-side routing behind
/// the route guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::initialize();
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/loyalty-portal.css"/>
        <Title text="Loyalty Portal"/>

        <Router>
            <RouteGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=Landing/>
                <Route path=StaticSegment("dashboard") view=CustomerDashboardPage/>
                <Route path=StaticSegment("history") view=HistoryPage/>
                <Route path=StaticSegment("redeem") view=RedeemPage/>
                <Route path=StaticSegment("transfer") view=TransferPage/>
                <Route
                    path=(StaticSegment("employee"), StaticSegment("dashboard"))
                    view=EmployeeDashboardPage
                />
                <Route path=StaticSegment("account") view=AccountPage/>
            </Routes>
        </Router>
    }
}

/// Installs the navigation effect enforcing the route guard. Must render
/// inside the router so `use_location`/`use_navigate` resolve.
#[component]
fn RouteGuard() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = leptos_router::hooks::use_navigate();
    install_route_guard(session, navigate);
}

/// Blank root route; the guard immediately forwards to the state's
/// default path.
#[component]
fn Landing() -> impl IntoView {
    view! { <p class="landing">"Redirecting..."</p> }
}

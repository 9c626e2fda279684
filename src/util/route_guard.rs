//! Role-based route classification and redirect policy.
//!
//! ARCHITECTURE
//! ============
//! The guard owns the path-to-state mapping; pages never decide their own
//! access rules. `resolve` is total: every requested path yields either
//! `Allow` or a redirect to the active state's default path, so routing
//! never throws on an unknown or foreign-role path.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Session, SessionStore};
use crate::util::claims::Role;

pub const LOGIN_PATH: &str = "/login";
pub const CUSTOMER_HOME: &str = "/dashboard";
pub const EMPLOYEE_HOME: &str = "/employee/dashboard";
pub const ACCOUNT_HOME: &str = "/account";

const UNAUTHENTICATED_ROUTES: &[&str] = &[LOGIN_PATH];
const CUSTOMER_ROUTES: &[&str] = &[CUSTOMER_HOME, "/history", "/redeem", "/transfer"];
const EMPLOYEE_ROUTES: &[&str] = &[EMPLOYEE_HOME];
const UNKNOWN_ROLE_ROUTES: &[&str] = &[ACCOUNT_HOME];

/// Navigation state derived from the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteState {
    Unauthenticated,
    Customer,
    Employee,
    /// Logged in, but the role claim is absent or unrecognized; confined
    /// to a read-only landing page.
    UnknownRole,
}

/// Decision for a single requested path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(&'static str),
}

/// Map the session onto the closed navigation-state set.
pub fn classify(session: &Session) -> RouteState {
    if !session.logged_in {
        return RouteState::Unauthenticated;
    }
    match session.identity.as_ref().map(|identity| identity.role) {
        Some(Role::Customer) => RouteState::Customer,
        Some(Role::Employee) => RouteState::Employee,
        Some(Role::Unknown) | None => RouteState::UnknownRole,
    }
}

/// Paths navigable in `state`.
pub fn route_set(state: RouteState) -> &'static [&'static str] {
    match state {
        RouteState::Unauthenticated => UNAUTHENTICATED_ROUTES,
        RouteState::Customer => CUSTOMER_ROUTES,
        RouteState::Employee => EMPLOYEE_ROUTES,
        RouteState::UnknownRole => UNKNOWN_ROLE_ROUTES,
    }
}

/// Landing path for `state`; the target of every redirect out of it.
pub fn default_path(state: RouteState) -> &'static str {
    match state {
        RouteState::Unauthenticated => LOGIN_PATH,
        RouteState::Customer => CUSTOMER_HOME,
        RouteState::Employee => EMPLOYEE_HOME,
        RouteState::UnknownRole => ACCOUNT_HOME,
    }
}

/// Decide whether `path` may render under `state`.
pub fn resolve(state: RouteState, path: &str) -> RouteDecision {
    if route_set(state).contains(&path) {
        RouteDecision::Allow
    } else {
        RouteDecision::Redirect(default_path(state))
    }
}

/// Install the navigation effect enforcing [`resolve`] over every
/// location change and session transition.
pub fn install_route_guard<F>(session: SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = leptos_router::hooks::use_location();
    Effect::new(move || {
        let state = classify(&session.session());
        let path = location.pathname.get();
        if let RouteDecision::Redirect(target) = resolve(state, &path) {
            log::debug!("route guard: {path} -> {target}");
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });
}

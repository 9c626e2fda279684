use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::state::session::SessionCore;

const NOW: i64 = 1_700_000_000;

fn session_from(username: &str, role: &str) -> Session {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        format!(
            r#"{{"username":{username:?},"role":{role:?},"exp":{}}}"#,
            NOW + 3600
        )
        .as_bytes(),
    );
    let token = format!("{header}.{payload}.sig");
    let (core, _) = SessionCore::restore(Some(token), NOW);
    core.session().clone()
}

// =============================================================
// classify
// =============================================================

#[test]
fn classify_logged_out_session_as_unauthenticated() {
    assert_eq!(classify(&Session::default()), RouteState::Unauthenticated);
}

#[test]
fn classify_customer_session() {
    assert_eq!(
        classify(&session_from("CUST001", "customer")),
        RouteState::Customer
    );
}

#[test]
fn classify_employee_session() {
    assert_eq!(
        classify(&session_from("EMP001", "employee")),
        RouteState::Employee
    );
}

#[test]
fn classify_unrecognized_role_session() {
    assert_eq!(
        classify(&session_from("X1", "auditor")),
        RouteState::UnknownRole
    );
}

// =============================================================
// route sets
// =============================================================

#[test]
fn customer_routes_exclude_employee_paths() {
    for path in route_set(RouteState::Employee) {
        assert!(!route_set(RouteState::Customer).contains(path));
    }
}

#[test]
fn employee_routes_exclude_customer_paths() {
    for path in route_set(RouteState::Customer) {
        assert!(!route_set(RouteState::Employee).contains(path));
    }
}

#[test]
fn unauthenticated_permits_only_the_login_path() {
    assert_eq!(route_set(RouteState::Unauthenticated), [LOGIN_PATH]);
}

#[test]
fn default_paths_are_members_of_their_own_route_set() {
    for state in [
        RouteState::Unauthenticated,
        RouteState::Customer,
        RouteState::Employee,
        RouteState::UnknownRole,
    ] {
        assert!(route_set(state).contains(&default_path(state)));
    }
}

// =============================================================
// resolve
// =============================================================

#[test]
fn customer_requesting_employee_dashboard_redirects_home() {
    // Token claims {username:"CUST001", role:"customer", exp: now+3600}.
    let state = classify(&session_from("CUST001", "customer"));
    assert_eq!(state, RouteState::Customer);
    assert_eq!(
        resolve(state, "/employee/dashboard"),
        RouteDecision::Redirect("/dashboard")
    );
}

#[test]
fn employee_requesting_customer_pages_redirects_home() {
    let state = classify(&session_from("EMP001", "employee"));
    assert_eq!(
        resolve(state, "/redeem"),
        RouteDecision::Redirect("/employee/dashboard")
    );
}

#[test]
fn unauthenticated_requests_redirect_to_login() {
    for path in ["/", "/dashboard", "/employee/dashboard", "/nonsense"] {
        assert_eq!(
            resolve(RouteState::Unauthenticated, path),
            RouteDecision::Redirect(LOGIN_PATH)
        );
    }
}

#[test]
fn login_path_is_allowed_while_unauthenticated() {
    assert_eq!(
        resolve(RouteState::Unauthenticated, LOGIN_PATH),
        RouteDecision::Allow
    );
}

#[test]
fn customer_paths_are_allowed_for_customers() {
    for path in ["/dashboard", "/history", "/redeem", "/transfer"] {
        assert_eq!(resolve(RouteState::Customer, path), RouteDecision::Allow);
    }
}

#[test]
fn resolve_is_total_over_arbitrary_paths() {
    // Every state yields a decision for paths that belong to nobody.
    for state in [
        RouteState::Unauthenticated,
        RouteState::Customer,
        RouteState::Employee,
        RouteState::UnknownRole,
    ] {
        assert_eq!(
            resolve(state, "/no/such/path"),
            RouteDecision::Redirect(default_path(state))
        );
    }
}

#[test]
fn unknown_role_is_confined_to_the_account_page() {
    let state = classify(&session_from("X1", "auditor"));
    assert_eq!(resolve(state, ACCOUNT_HOME), RouteDecision::Allow);
    assert_eq!(
        resolve(state, "/dashboard"),
        RouteDecision::Redirect(ACCOUNT_HOME)
    );
}

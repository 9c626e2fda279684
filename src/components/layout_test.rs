use super::*;

#[test]
fn customer_nav_covers_every_customer_route() {
    let paths: Vec<&str> = nav_items(RouteState::Customer)
        .iter()
        .map(|(path, _)| *path)
        .collect();
    assert_eq!(paths, ["/dashboard", "/history", "/redeem", "/transfer"]);
}

#[test]
fn employee_nav_excludes_customer_paths() {
    for (path, _) in nav_items(RouteState::Employee) {
        assert!(!crate::util::route_guard::route_set(RouteState::Customer).contains(path));
    }
}

#[test]
fn nav_links_stay_inside_the_guarded_route_set() {
    for state in [
        RouteState::Customer,
        RouteState::Employee,
        RouteState::UnknownRole,
    ] {
        for (path, _) in nav_items(state) {
            assert!(crate::util::route_guard::route_set(state).contains(path));
        }
    }
}

#[test]
fn unauthenticated_has_no_nav() {
    assert!(nav_items(RouteState::Unauthenticated).is_empty());
}

use super::*;

// =============================================================
// mock lookup
// =============================================================

#[test]
fn lookup_returns_nothing_for_blank_query() {
    assert_eq!(mock_customer(""), None);
    assert_eq!(mock_customer("   "), None);
}

#[test]
fn lookup_returns_a_profile_for_any_query() {
    let found = mock_customer("CUST001").unwrap();
    assert_eq!(found.id, "CUST001");
    assert_eq!(found.balance, 1_500);
}

// =============================================================
// issue-points validation
// =============================================================

#[test]
fn issue_points_accepts_amount_with_reason() {
    assert_eq!(validate_issue_points(500, "Store promotion"), Ok(()));
}

#[test]
fn issue_points_rejects_non_positive_amounts() {
    assert!(validate_issue_points(0, "promo").is_err());
    assert!(validate_issue_points(-5, "promo").is_err());
}

#[test]
fn issue_points_rejects_amounts_above_the_desk_limit() {
    assert!(validate_issue_points(10_001, "promo").is_err());
    assert_eq!(validate_issue_points(10_000, "promo"), Ok(()));
}

#[test]
fn issue_points_requires_a_reason() {
    assert!(validate_issue_points(500, "   ").is_err());
}

// =============================================================
// create-account validation
// =============================================================

#[test]
fn new_account_accepts_name_and_email() {
    assert_eq!(validate_new_account("Binh Le", "binh@example.com"), Ok(()));
}

#[test]
fn new_account_requires_a_name() {
    assert!(validate_new_account("  ", "binh@example.com").is_err());
}

#[test]
fn new_account_requires_an_email_shape() {
    assert!(validate_new_account("Binh Le", "not-an-email").is_err());
}

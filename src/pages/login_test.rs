use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  CUST001  ", "secret"),
        Ok(("CUST001".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_username() {
    assert_eq!(
        validate_login_input("   ", "secret"),
        Err("Enter your username first.")
    );
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(
        validate_login_input("CUST001", ""),
        Err("Enter your password.")
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    // Passwords may legitimately start or end with spaces.
    assert_eq!(
        validate_login_input("CUST001", " p ass "),
        Ok(("CUST001".to_owned(), " p ass ".to_owned()))
    );
}

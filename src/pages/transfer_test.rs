use super::*;

const SENDER: &str = "CUST001";
const BALANCE: i64 = 1_500;

fn validate(recipient: &str, amount: i64, note: &str) -> Result<(), String> {
    validate_transfer(SENDER, recipient, amount, BALANCE, note)
}

#[test]
fn accepts_a_well_formed_transfer() {
    assert_eq!(validate("CUST002", 500, "Happy birthday!"), Ok(()));
}

#[test]
fn rejects_short_recipient_id() {
    assert!(validate("C2", 500, "Happy birthday!").is_err());
}

#[test]
fn rejects_transfer_to_self() {
    let err = validate(SENDER, 500, "Happy birthday!").unwrap_err();
    assert!(err.contains("yourself"));
}

#[test]
fn rejects_transfer_to_self_with_surrounding_spaces() {
    assert!(validate(" CUST001 ", 500, "Happy birthday!").is_err());
}

#[test]
fn rejects_zero_and_negative_amounts() {
    assert!(validate("CUST002", 0, "Happy birthday!").is_err());
    assert!(validate("CUST002", -10, "Happy birthday!").is_err());
}

#[test]
fn rejects_amount_above_balance() {
    let err = validate("CUST002", BALANCE + 1, "Happy birthday!").unwrap_err();
    assert!(err.contains("1,500"));
}

#[test]
fn accepts_amount_equal_to_balance() {
    assert_eq!(validate("CUST002", BALANCE, "Happy birthday!"), Ok(()));
}

#[test]
fn rejects_short_note() {
    assert!(validate("CUST002", 100, "hey").is_err());
}

#[test]
fn rejects_note_over_limit() {
    let long_note = "x".repeat(201);
    assert!(validate("CUST002", 100, &long_note).is_err());
}

#[test]
fn accepts_note_at_limit() {
    let note = "x".repeat(200);
    assert_eq!(validate("CUST002", 100, &note), Ok(()));
}

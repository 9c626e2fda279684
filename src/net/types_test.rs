use super::*;

use serde_json::json;

// =============================================================
// unwrap_data
// =============================================================

fn sample_account() -> serde_json::Value {
    json!({
        "id": "CUST001",
        "owner_name": "Alice Tran",
        "balance": 1500,
        "total_earned": 2500,
        "total_spent": 1000
    })
}

#[test]
fn unwrap_data_accepts_enveloped_payload() {
    let body = json!({ "data": sample_account() });
    let account: Account = unwrap_data(&body).unwrap();
    assert_eq!(account.id, "CUST001");
    assert_eq!(account.balance, 1500);
}

#[test]
fn unwrap_data_accepts_bare_payload() {
    let account: Account = unwrap_data(&sample_account()).unwrap();
    assert_eq!(account.owner_name, "Alice Tran");
}

#[test]
fn unwrap_data_rejects_unrelated_body() {
    let body = json!({ "data": { "wrong": true } });
    assert_eq!(
        unwrap_data::<Account>(&body).unwrap_err(),
        MalformedResponse
    );
}

#[test]
fn unwrap_data_falls_back_to_bare_when_data_key_mismatches() {
    // A record that itself carries a "data" field of the wrong shape must
    // still deserialize as the bare payload.
    let body = json!({ "data": 42, "id": "t1", "kind": "ISSUE",
        "amount": 10, "description": "d", "timestamp": "2025-01-01" });
    let record: TransactionRecord = unwrap_data(&body).unwrap();
    assert_eq!(record.id, "t1");
}

// =============================================================
// extract_token
// =============================================================

#[test]
fn extract_token_from_enveloped_login_response() {
    let body = json!({ "success": true, "data": { "token": "abc.def.ghi" } });
    assert_eq!(extract_token(&body).unwrap(), "abc.def.ghi");
}

#[test]
fn extract_token_from_bare_login_response() {
    let body = json!({ "token": "abc.def.ghi" });
    assert_eq!(extract_token(&body).unwrap(), "abc.def.ghi");
}

#[test]
fn extract_token_prefers_enveloped_shape() {
    let body = json!({ "token": "outer", "data": { "token": "inner" } });
    assert_eq!(extract_token(&body).unwrap(), "inner");
}

#[test]
fn extract_token_rejects_missing_token() {
    assert_eq!(
        extract_token(&json!({ "success": true })),
        Err(MalformedResponse)
    );
}

#[test]
fn extract_token_rejects_empty_token() {
    assert_eq!(extract_token(&json!({ "token": "" })), Err(MalformedResponse));
}

#[test]
fn extract_token_rejects_non_string_token() {
    assert_eq!(extract_token(&json!({ "token": 42 })), Err(MalformedResponse));
}

// =============================================================
// error_message
// =============================================================

#[test]
fn error_message_checks_capital_error_first() {
    let body = json!({ "Error": "first", "error": "second", "message": "third" });
    assert_eq!(error_message(&body), Some("first".to_owned()));
}

#[test]
fn error_message_falls_back_to_lowercase_error() {
    let body = json!({ "error": "second", "message": "third" });
    assert_eq!(error_message(&body), Some("second".to_owned()));
}

#[test]
fn error_message_falls_back_to_message() {
    let body = json!({ "message": "third" });
    assert_eq!(error_message(&body), Some("third".to_owned()));
}

#[test]
fn error_message_absent_when_no_known_key() {
    assert_eq!(error_message(&json!({ "status": 500 })), None);
}

// =============================================================
// transaction kinds
// =============================================================

#[test]
fn transaction_kind_uses_screaming_snake_case_on_the_wire() {
    let record: TransactionRecord = serde_json::from_value(json!({
        "id": "TXN003",
        "kind": "TRANSFER_IN",
        "amount": 300,
        "description": "Transfer received from CUST002",
        "timestamp": "2025-01-20 09:15:00"
    }))
    .unwrap();
    assert_eq!(record.kind, TransactionKind::TransferIn);
}

#[test]
fn credit_kinds_increase_the_balance() {
    assert!(TransactionKind::Issue.is_credit());
    assert!(TransactionKind::TransferIn.is_credit());
    assert!(!TransactionKind::Redeem.is_credit());
    assert!(!TransactionKind::TransferOut.is_credit());
}

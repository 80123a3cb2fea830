use super::*;

fn envelope(json: &str) -> Envelope {
    serde_json::from_str(json).unwrap()
}

// =============================================================
// Message normalization
// =============================================================

#[test]
fn message_as_string_becomes_single_entry() {
    let env = envelope(r#"{"status": false, "message": "name exists"}"#);
    assert_eq!(env.message, vec!["name exists".to_owned()]);
}

#[test]
fn message_as_array_keeps_every_entry() {
    let env = envelope(r#"{"status": false, "message": ["bad node", "missing .end"]}"#);
    assert_eq!(env.message, vec!["bad node".to_owned(), "missing .end".to_owned()]);
}

#[test]
fn message_null_or_missing_is_empty() {
    assert!(envelope(r#"{"status": true, "message": null}"#).message.is_empty());
    assert!(envelope(r#"{"status": true}"#).message.is_empty());
}

#[test]
fn non_string_array_entries_are_stringified() {
    let env = envelope(r#"{"status": false, "message": ["line 3", 42]}"#);
    assert_eq!(env.message, vec!["line 3".to_owned(), "42".to_owned()]);
}

// =============================================================
// Envelope acceptance
// =============================================================

#[test]
fn status_true_is_accepted_with_messages() {
    let result = envelope(r#"{"status": true, "message": "uploaded"}"#).into_result();
    assert_eq!(result.unwrap(), vec!["uploaded".to_owned()]);
}

#[test]
fn status_false_is_rejected() {
    let err = envelope(r#"{"status": false, "message": "duplicate"}"#)
        .into_result()
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected {
            status_code: None,
            messages: vec!["duplicate".to_owned()],
        }
    );
}

#[test]
fn status_code_400_is_rejected_with_code() {
    let err = envelope(r#"{"status_code": 400, "message": "name exists"}"#)
        .into_result()
        .unwrap_err();
    assert_eq!(err.status_code(), Some(400));
    assert_eq!(err.messages(), vec!["name exists".to_owned()]);
}

#[test]
fn status_code_below_400_is_accepted() {
    assert!(envelope(r#"{"status_code": 200}"#).into_result().is_ok());
}

#[test]
fn status_true_with_error_code_is_rejected() {
    let err = envelope(r#"{"status": true, "status_code": 500, "message": "boom"}"#)
        .into_result()
        .unwrap_err();
    assert_eq!(err.status_code(), Some(500));
}

#[test]
fn empty_envelope_is_accepted() {
    assert_eq!(envelope("{}").into_result().unwrap(), Vec::<String>::new());
}

#[test]
fn rejection_without_messages_gets_a_fallback_line() {
    let err = envelope(r#"{"status": false}"#).into_result().unwrap_err();
    assert_eq!(err.messages(), vec!["operation failed".to_owned()]);
}

// =============================================================
// ApiError accessors
// =============================================================

#[test]
fn transport_error_has_no_status_code() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.status_code(), None);
    assert_eq!(err.messages(), vec!["request failed: connection refused".to_owned()]);
}

#[test]
fn rejected_display_joins_messages() {
    let err = ApiError::Rejected {
        status_code: None,
        messages: vec!["a".to_owned(), "b".to_owned()],
    };
    assert_eq!(err.to_string(), "a; b");
}

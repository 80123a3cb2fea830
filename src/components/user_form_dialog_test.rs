use super::*;

fn snapshot() -> UserRecord {
    UserRecord {
        id: 9,
        name: "Alice Smith".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        is_admin: false,
        is_active: true,
        is_deleted: false,
        log_level: Some("INFO".to_owned()),
        can_edit: true,
        can_delete: true,
        can_disable: true,
    }
}

#[test]
fn unchanged_draft_produces_an_empty_patch() {
    let record = snapshot();
    let patch = diff_against(&record, &UserDraft::from_record(&record));
    assert!(patch.is_empty());
}

#[test]
fn changed_fields_appear_in_the_patch() {
    let record = snapshot();
    let mut draft = UserDraft::from_record(&record);
    draft.email = "alice@corp.example".to_owned();
    draft.is_admin = true;
    let patch = diff_against(&record, &draft);
    assert_eq!(patch.email.as_deref(), Some("alice@corp.example"));
    assert_eq!(patch.is_admin, Some(true));
    assert_eq!(patch.name, None);
    assert_eq!(patch.log_level, None);
}

#[test]
fn log_level_change_is_diffed() {
    let record = snapshot();
    let mut draft = UserDraft::from_record(&record);
    draft.log_level = Some("DEBUG".to_owned());
    let patch = diff_against(&record, &draft);
    assert_eq!(patch.log_level.as_deref(), Some("DEBUG"));
}

#[test]
fn diff_never_touches_flag_only_fields() {
    let record = snapshot();
    let mut draft = UserDraft::from_record(&record);
    draft.name = "Alice S.".to_owned();
    let patch = diff_against(&record, &draft);
    assert_eq!(patch.is_active, None);
    assert_eq!(patch.is_deleted, None);
    assert_eq!(patch.reset_password, None);
}

#[test]
fn draft_problems_require_name_username_email() {
    let problems = draft_problems(&UserDraft::default());
    assert_eq!(
        problems,
        vec![
            "Name is required.".to_owned(),
            "Username is required.".to_owned(),
            "Email is required.".to_owned(),
        ]
    );
}

#[test]
fn complete_draft_has_no_problems() {
    let draft = UserDraft {
        name: "Bob".to_owned(),
        username: "bob".to_owned(),
        email: "bob@example.com".to_owned(),
        is_admin: false,
        log_level: None,
    };
    assert!(draft_problems(&draft).is_empty());
}

#[test]
fn whitespace_only_fields_are_problems() {
    let draft = UserDraft {
        name: "  ".to_owned(),
        username: "bob".to_owned(),
        email: "bob@example.com".to_owned(),
        is_admin: false,
        log_level: None,
    };
    assert_eq!(draft_problems(&draft), vec!["Name is required.".to_owned()]);
}

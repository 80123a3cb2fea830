use super::*;

fn file(can_edit: bool, can_delete: bool) -> FileRecord {
    FileRecord {
        file_id: 1,
        file_name: "design1.sp".to_owned(),
        file_type: FileScope::User,
        username: Some("alice".to_owned()),
        time_stamp: None,
        can_edit,
        can_delete,
    }
}

#[test]
fn fully_capable_row_shows_every_action() {
    assert_eq!(
        file_row_actions(&file(true, true)),
        vec![FileAction::Edit, FileAction::Rename, FileAction::Clone, FileAction::Delete]
    );
}

#[test]
fn uneditable_row_hides_edit_and_rename() {
    assert_eq!(
        file_row_actions(&file(false, true)),
        vec![FileAction::Clone, FileAction::Delete]
    );
}

#[test]
fn undeletable_row_hides_delete() {
    assert_eq!(
        file_row_actions(&file(true, false)),
        vec![FileAction::Edit, FileAction::Rename, FileAction::Clone]
    );
}

#[test]
fn clone_is_always_offered() {
    assert_eq!(file_row_actions(&file(false, false)), vec![FileAction::Clone]);
}

use super::*;

// =============================================================
// File rows
// =============================================================

#[test]
fn file_record_parses_wire_field_names() {
    let row: FileRecord = serde_json::from_str(
        r#"{
            "FileId": 12,
            "FileName": "design1.sp",
            "FileType": "USER",
            "Username": "alice",
            "TimeStamp": "2026-07-30 12:01:55"
        }"#,
    )
    .unwrap();
    assert_eq!(row.file_id, 12);
    assert_eq!(row.file_name, "design1.sp");
    assert_eq!(row.file_type, FileScope::User);
    assert_eq!(row.username.as_deref(), Some("alice"));
    assert_eq!(row.time_stamp.as_deref(), Some("2026-07-30 12:01:55"));
}

#[test]
fn file_record_missing_capability_flags_default_to_allowed() {
    let row: FileRecord = serde_json::from_str(
        r#"{"FileId": 1, "FileName": "a.sp", "FileType": "GLOBAL"}"#,
    )
    .unwrap();
    assert!(row.can_edit);
    assert!(row.can_delete);
    assert_eq!(row.username, None);
}

#[test]
fn file_record_accepts_integral_float_ids() {
    let row: FileRecord = serde_json::from_str(
        r#"{"FileId": 7.0, "FileName": "a.sp", "FileType": "GLOBAL"}"#,
    )
    .unwrap();
    assert_eq!(row.file_id, 7);
}

#[test]
fn file_record_rejects_fractional_ids() {
    let result: Result<FileRecord, _> =
        serde_json::from_str(r#"{"FileId": 7.5, "FileName": "a.sp", "FileType": "GLOBAL"}"#);
    assert!(result.is_err());
}

#[test]
fn list_files_request_serializes_directory_and_cursor() {
    let body = serde_json::to_value(ListFilesRequest {
        directory: DirectoryKind::Netlist,
        page: 3,
        page_size: 25,
    })
    .unwrap();
    assert_eq!(body["DirectoryType"], "netlist");
    assert_eq!(body["page"], 3);
    assert_eq!(body["page_size"], 25);
}

#[test]
fn file_key_flattens_into_rename_body() {
    let record: FileRecord = serde_json::from_str(
        r#"{"FileId": 4, "FileName": "foo.spice", "FileType": "USER", "Username": "bob"}"#,
    )
    .unwrap();
    let body = serde_json::to_value(RenameFileRequest {
        key: FileKey::of(&record),
        new_file_name: "bar.spice".to_owned(),
    })
    .unwrap();
    assert_eq!(body["FileId"], 4);
    assert_eq!(body["FileName"], "foo.spice");
    assert_eq!(body["FileType"], "USER");
    assert_eq!(body["Username"], "bob");
    assert_eq!(body["NewFileName"], "bar.spice");
}

#[test]
fn file_key_omits_absent_owner() {
    let record: FileRecord =
        serde_json::from_str(r#"{"FileId": 4, "FileName": "t.tech", "FileType": "GLOBAL"}"#)
            .unwrap();
    let body = serde_json::to_value(FileKey::of(&record)).unwrap();
    assert!(body.get("Username").is_none());
}

// =============================================================
// User rows
// =============================================================

#[test]
fn user_record_parses_wire_field_names_with_defaults() {
    let row: UserRecord = serde_json::from_str(
        r#"{
            "Id": 9,
            "Name": "Alice Smith",
            "Username": "alice",
            "Email": "alice@example.com"
        }"#,
    )
    .unwrap();
    assert_eq!(row.id, 9);
    assert!(!row.is_admin);
    assert!(row.is_active);
    assert!(!row.is_deleted);
    assert_eq!(row.log_level, None);
    assert!(row.can_edit && row.can_delete && row.can_disable);
}

#[test]
fn user_record_reads_soft_delete_flag() {
    let row: UserRecord = serde_json::from_str(
        r#"{"Id": 1, "Name": "n", "Username": "u", "Email": "e", "IsDeleted": true}"#,
    )
    .unwrap();
    assert!(row.is_deleted);
}

// =============================================================
// User patches
// =============================================================

#[test]
fn empty_patch_serializes_to_no_fields() {
    let body = serde_json::to_value(UserPatch::default()).unwrap();
    assert_eq!(body, serde_json::json!({}));
    assert!(UserPatch::default().is_empty());
}

#[test]
fn action_patches_serialize_their_single_field() {
    assert_eq!(
        serde_json::to_value(UserPatch::set_active(false)).unwrap(),
        serde_json::json!({"IsActive": false})
    );
    assert_eq!(
        serde_json::to_value(UserPatch::set_deleted(true)).unwrap(),
        serde_json::json!({"IsDeleted": true})
    );
    assert_eq!(
        serde_json::to_value(UserPatch::password_reset()).unwrap(),
        serde_json::json!({"ResetPassword": true})
    );
}

#[test]
fn action_patches_are_not_empty() {
    assert!(!UserPatch::set_active(true).is_empty());
    assert!(!UserPatch::set_deleted(false).is_empty());
    assert!(!UserPatch::password_reset().is_empty());
}

// =============================================================
// Response bodies
// =============================================================

#[test]
fn list_files_response_carries_rows_and_total() {
    let body: ListFilesResponse = serde_json::from_str(
        r#"{
            "status": true,
            "total": 41,
            "data": [{"FileId": 1, "FileName": "a.sp", "FileType": "GLOBAL"}]
        }"#,
    )
    .unwrap();
    assert!(body.envelope.into_result().is_ok());
    assert_eq!(body.data.len(), 1);
    assert_eq!(body.total, 41);
}

#[test]
fn list_files_response_tolerates_missing_fields_on_failure() {
    let body: ListFilesResponse =
        serde_json::from_str(r#"{"status": false, "message": "denied"}"#).unwrap();
    assert!(body.data.is_empty());
    assert_eq!(body.total, 0);
    assert!(body.envelope.into_result().is_err());
}

#[test]
fn file_data_response_carries_optional_content() {
    let body: FileDataResponse =
        serde_json::from_str(r#"{"status": true, "data": "UjEgaW4gb3V0IDFr"}"#).unwrap();
    assert_eq!(body.data.as_deref(), Some("UjEgaW4gb3V0IDFr"));
}

#[test]
fn directory_kind_wire_values_are_lowercase() {
    assert_eq!(serde_json::to_value(DirectoryKind::Netlist).unwrap(), "netlist");
    assert_eq!(serde_json::to_value(DirectoryKind::Tech).unwrap(), "tech");
}

#[test]
fn file_scope_wire_values_are_uppercase() {
    assert_eq!(serde_json::to_value(FileScope::User).unwrap(), "USER");
    assert_eq!(serde_json::to_value(FileScope::Global).unwrap(), "GLOBAL");
}

#[test]
fn directory_kind_labels_name_the_grids() {
    assert_eq!(DirectoryKind::Netlist.label(), "Netlist Files");
    assert_eq!(DirectoryKind::Tech.label(), "Tech Files");
}

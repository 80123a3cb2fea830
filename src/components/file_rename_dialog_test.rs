use super::*;
use crate::net::types::FileScope;

fn file(name: &str) -> FileRecord {
    FileRecord {
        file_id: 4,
        file_name: name.to_owned(),
        file_type: FileScope::User,
        username: Some("alice".to_owned()),
        time_stamp: None,
        can_edit: true,
        can_delete: true,
    }
}

#[test]
fn can_save_requires_a_new_non_empty_stem() {
    assert!(can_save("foo.spice", "bar"));
    assert!(!can_save("foo.spice", ""));
    assert!(!can_save("foo.spice", "   "));
    assert!(!can_save("foo.spice", "foo"));
}

#[test]
fn can_save_trims_before_comparing() {
    assert!(!can_save("foo.spice", " foo "));
    assert!(can_save("foo.spice", " bar "));
}

#[test]
fn rename_request_reappends_the_original_extension() {
    let request = rename_request(&file("foo.spice"), "bar");
    assert_eq!(request.new_file_name, "bar.spice");
}

#[test]
fn rename_request_trims_the_entered_stem() {
    let request = rename_request(&file("foo.spice"), "  bar ");
    assert_eq!(request.new_file_name, "bar.spice");
}

#[test]
fn rename_request_copies_identifying_fields() {
    let source = file("foo.spice");
    let request = rename_request(&source, "bar");
    assert_eq!(request.key, FileKey::of(&source));
}

#[test]
fn rename_request_without_extension_sends_bare_stem() {
    let request = rename_request(&file("README"), "NOTES");
    assert_eq!(request.new_file_name, "NOTES");
}

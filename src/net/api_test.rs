use super::*;

#[test]
fn upload_endpoint_is_per_directory_kind() {
    assert_eq!(upload_endpoint(DirectoryKind::Netlist), "administrator/netlist/upload/");
    assert_eq!(upload_endpoint(DirectoryKind::Tech), "administrator/tech/upload/");
}

#[test]
fn modify_user_endpoint_formats_expected_path() {
    assert_eq!(modify_user_endpoint(7), "/profile/modify/7/");
}

#[test]
fn scope_wire_matches_server_values() {
    assert_eq!(scope_wire(FileScope::User), "USER");
    assert_eq!(scope_wire(FileScope::Global), "GLOBAL");
}

#[test]
fn http_failed_message_formats_status() {
    assert_eq!(http_failed_message(502), "server answered HTTP 502");
}

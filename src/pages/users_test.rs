use super::*;

#[test]
fn action_patch_maps_row_actions_to_fixed_shapes() {
    assert_eq!(action_patch(UserAction::Delete), Some(UserPatch::set_deleted(true)));
    assert_eq!(action_patch(UserAction::Restore), Some(UserPatch::set_deleted(false)));
    assert_eq!(action_patch(UserAction::Disable), Some(UserPatch::set_active(false)));
    assert_eq!(action_patch(UserAction::Enable), Some(UserPatch::set_active(true)));
    assert_eq!(action_patch(UserAction::ResetPassword), Some(UserPatch::password_reset()));
}

#[test]
fn edit_has_no_direct_patch() {
    assert_eq!(action_patch(UserAction::Edit), None);
}

#[test]
fn confirm_copy_names_the_target_user() {
    let (title, message, label) = confirm_copy(UserAction::Delete, "bob");
    assert_eq!(title, "Delete User");
    assert!(message.contains("bob"));
    assert_eq!(label, "Delete");
}

#[test]
fn confirm_copy_distinguishes_enable_and_disable() {
    let (_, disable_message, disable_label) = confirm_copy(UserAction::Disable, "bob");
    let (_, enable_message, enable_label) = confirm_copy(UserAction::Enable, "bob");
    assert_eq!(disable_label, "Disable");
    assert_eq!(enable_label, "Enable");
    assert_ne!(disable_message, enable_message);
}

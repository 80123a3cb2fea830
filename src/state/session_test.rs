use super::*;

fn signed_in(username: &str) -> SessionState {
    SessionState {
        user: Some(SessionUser {
            id: 1,
            name: "Admin".to_owned(),
            username: username.to_owned(),
            is_admin: true,
        }),
        loading: false,
    }
}

#[test]
fn is_self_matches_exact_username() {
    assert!(signed_in("alice").is_self("alice"));
}

#[test]
fn is_self_is_case_insensitive() {
    assert!(signed_in("alice").is_self("ALICE"));
    assert!(signed_in("Alice").is_self("alice"));
}

#[test]
fn is_self_rejects_other_usernames() {
    assert!(!signed_in("alice").is_self("bob"));
    assert!(!signed_in("alice").is_self("alice2"));
}

#[test]
fn is_self_is_false_without_a_session() {
    assert!(!SessionState::default().is_self("alice"));
}

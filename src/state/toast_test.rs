use super::*;

#[test]
fn push_helpers_tag_their_kind() {
    let mut state = ToastState::default();
    state.success("uploaded");
    state.error("failed");
    state.info("no changes");
    let kinds: Vec<ToastKind> = state.toasts.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![ToastKind::Success, ToastKind::Error, ToastKind::Info]);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let first = state.success("one");
    let second = state.success("two");
    state.dismiss(first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_of_unknown_id_is_a_noop() {
    let mut state = ToastState::default();
    state.success("kept");
    state.dismiss(Uuid::new_v4());
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn success_text_prefers_the_server_message() {
    let messages = vec!["File uploaded.".to_owned(), "extra".to_owned()];
    assert_eq!(success_text(&messages, "Done."), "File uploaded.");
}

#[test]
fn success_text_falls_back_when_server_sent_none() {
    assert_eq!(success_text(&[], "Done."), "Done.");
}

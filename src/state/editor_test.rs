use super::*;

#[test]
fn load_sets_buffer_and_snapshot() {
    let mut state = EditorState::default();
    state.load("R1 in out 1k".to_owned());
    assert_eq!(state.content, "R1 in out 1k");
    assert_eq!(state.original, "R1 in out 1k");
    assert!(!state.is_dirty());
}

#[test]
fn load_clears_stale_errors_and_saving_flag() {
    let mut state = EditorState {
        errors: vec!["old error".to_owned()],
        saving: true,
        ..EditorState::default()
    };
    state.load("fresh".to_owned());
    assert!(state.errors.is_empty());
    assert!(!state.saving);
}

#[test]
fn editing_marks_dirty_and_reset_restores_original() {
    let mut state = EditorState::default();
    state.load("original".to_owned());
    state.content = "edited".to_owned();
    assert!(state.is_dirty());
    state.reset();
    assert_eq!(state.content, "original");
    assert!(!state.is_dirty());
}

#[test]
fn reset_clears_validation_errors() {
    let mut state = EditorState::default();
    state.load("text".to_owned());
    state.errors = vec!["bad node".to_owned()];
    state.reset();
    assert!(state.errors.is_empty());
}

#[test]
fn clear_drops_everything() {
    let mut state = EditorState::default();
    state.load("text".to_owned());
    state.content = "edited".to_owned();
    state.errors = vec!["e".to_owned()];
    state.clear();
    assert_eq!(state.content, "");
    assert_eq!(state.original, "");
    assert!(state.errors.is_empty());
}

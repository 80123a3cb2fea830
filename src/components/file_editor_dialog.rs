//! File content editor modal with validation and reset-to-original.
//!
//! The page fetches and decodes the content before mounting this dialog;
//! the buffer lives in the shared editor store. Netlist saves run the
//! validation endpoint first and never send a modify while validation
//! fails.

use leptos::prelude::*;

use crate::components::modal::{DialogErrors, Modal};
use crate::net::types::{DirectoryKind, FileKey, FileRecord, ModifyFileRequest};
use crate::state::editor::EditorState;
use crate::state::toast::ToastState;

#[component]
pub fn FileEditorDialog(
    file: FileRecord,
    kind: DirectoryKind,
    #[prop(into)] on_cancel: Callback<()>,
    /// Invoked with the server messages after a successful save.
    #[prop(into)] on_saved: Callback<Vec<String>>,
) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let save_file = file.clone();
    let submit = Callback::new(move |()| {
        if editor.with_untracked(|state| state.saving) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use crate::net::error::ApiError;
            use crate::util::codec;

            let content = editor.with_untracked(|state| state.content.clone());
            let request = ModifyFileRequest {
                key: FileKey::of(&save_file),
                content: codec::encode_content(&content),
            };
            editor.update(|state| {
                state.saving = true;
                state.errors.clear();
            });
            leptos::task::spawn_local(async move {
                if kind == DirectoryKind::Netlist {
                    match crate::net::api::validate_netlist(&content).await {
                        Ok(()) => {}
                        Err(err @ ApiError::Rejected { .. }) => {
                            editor.update(|state| {
                                state.errors = err.messages();
                                state.saving = false;
                            });
                            return;
                        }
                        Err(err) => {
                            toasts.update(|state| {
                                state.error(err.to_string());
                            });
                            editor.update(|state| state.saving = false);
                            return;
                        }
                    }
                }
                match crate::net::api::modify_file(&request).await {
                    Ok(messages) => {
                        editor.update(|state| state.saving = false);
                        on_saved.run(messages);
                    }
                    Err(err @ ApiError::Rejected { .. }) => {
                        editor.update(|state| {
                            state.errors = err.messages();
                            state.saving = false;
                        });
                    }
                    Err(err) => {
                        toasts.update(|state| {
                            state.error(err.to_string());
                        });
                        editor.update(|state| state.saving = false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&save_file, &on_saved, &toasts, kind);
        }
    });

    let on_reset = move |_| editor.update(EditorState::reset);

    let title = format!("Edit {}", file.file_name);
    view! {
        <Modal
            visible=Signal::derive(|| true)
            title=title
            on_close=on_cancel
            body=move || {
                view! {
                    <label class="dialog__label">
                        "Content"
                        <textarea
                            class="dialog__textarea dialog__textarea--content"
                            prop:value=move || editor.with(|state| state.content.clone())
                            on:input=move |ev| {
                                editor.update(|state| state.content = event_target_value(&ev));
                            }
                        ></textarea>
                    </label>
                    <DialogErrors errors=Signal::derive(move || editor.with(|state| state.errors.clone()))/>
                }
            }
            footer=move || {
                view! {
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn"
                        disabled=move || !editor.with(|state| state.is_dirty())
                        on:click=on_reset
                    >
                        "Reset"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || editor.with(|state| state.saving)
                        on:click=move |_| submit.run(())
                    >
                        "Save"
                    </button>
                }
            }
        />
    }
}

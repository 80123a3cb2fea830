//! Rename dialog pre-filled with the current file stem.
//!
//! The user edits only the stem; the original extension is re-appended
//! before the request goes out. A `status_code: 400` rejection (duplicate
//! name) renders inline and keeps the dialog open; anything else surfaces
//! as a toast.

#[cfg(test)]
#[path = "file_rename_dialog_test.rs"]
mod file_rename_dialog_test;

use leptos::prelude::*;

use crate::components::modal::{DialogErrors, Modal};
use crate::net::types::{FileKey, FileRecord, RenameFileRequest};
use crate::state::toast::ToastState;
use crate::util::filename;

/// Whether Save is enabled: a new, non-empty stem must be entered.
pub fn can_save(current_name: &str, entered_stem: &str) -> bool {
    let entered = entered_stem.trim();
    !entered.is_empty() && entered != filename::stem(current_name)
}

/// Build the rename request from the entered stem.
pub fn rename_request(file: &FileRecord, entered_stem: &str) -> RenameFileRequest {
    RenameFileRequest {
        key: FileKey::of(file),
        new_file_name: filename::with_extension_of(&file.file_name, entered_stem.trim()),
    }
}

#[component]
pub fn FileRenameDialog(
    file: FileRecord,
    #[prop(into)] on_cancel: Callback<()>,
    /// Invoked with the server messages after a successful rename.
    #[prop(into)] on_renamed: Callback<Vec<String>>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let stem = RwSignal::new(filename::stem(&file.file_name).to_owned());
    let errors = RwSignal::new(Vec::<String>::new());
    let pending = RwSignal::new(false);

    let current_name = file.file_name.clone();
    let save_enabled = {
        let current_name = current_name.clone();
        move || !pending.get() && can_save(&current_name, &stem.get())
    };

    let submit_file = file.clone();
    let submit = Callback::new(move |()| {
        if pending.get_untracked() || !can_save(&submit_file.file_name, &stem.get_untracked()) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let request = rename_request(&submit_file, &stem.get_untracked());
            pending.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::rename_file(&request).await {
                    Ok(messages) => on_renamed.run(messages),
                    Err(err) if err.status_code() == Some(400) => errors.set(err.messages()),
                    Err(err) => {
                        toasts.update(|state| {
                            state.error(err.to_string());
                        });
                    }
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&on_renamed, &toasts);
        }
    });

    let title = format!("Rename {current_name}");
    view! {
        <Modal
            visible=Signal::derive(|| true)
            title=title
            on_close=on_cancel
            body=move || {
                view! {
                    <label class="dialog__label">
                        "New Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || stem.get()
                            on:input=move |ev| {
                                stem.set(event_target_value(&ev));
                                errors.set(Vec::new());
                            }
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    submit.run(());
                                }
                            }
                        />
                    </label>
                    <DialogErrors errors=errors/>
                }
            }
            footer=move || {
                let save_enabled = save_enabled.clone();
                view! {
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !save_enabled()
                        on:click=move |_| submit.run(())
                    >
                        "Save"
                    </button>
                }
            }
        />
    }
}

//! Upload dialog for netlist/tech files.
//!
//! Builds a multipart form from the picked file plus scope fields. Server
//! rejections render inline; a successful upload clears the error list and
//! hands the server messages back to the page for the toast.

use leptos::prelude::*;

use crate::components::modal::{DialogErrors, Modal};
use crate::net::types::{DirectoryKind, FileScope};

#[component]
pub fn FileUploadDialog(
    kind: DirectoryKind,
    #[prop(into)] on_cancel: Callback<()>,
    /// Invoked with the server messages after a successful upload.
    #[prop(into)] on_uploaded: Callback<Vec<String>>,
) -> impl IntoView {
    let scope = RwSignal::new(FileScope::Global);
    let owner = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let pending = RwSignal::new(false);
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let submit = Callback::new(move |()| {
        if pending.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_input.get_untracked() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                errors.set(vec!["Choose a file to upload.".to_owned()]);
                return;
            };
            let selected_scope = scope.get_untracked();
            let owner_name = owner.with_untracked(|name| {
                let name = name.trim();
                (!name.is_empty()).then(|| name.to_owned())
            });
            if selected_scope == FileScope::User && owner_name.is_none() {
                errors.set(vec!["Enter the owning username for a USER file.".to_owned()]);
                return;
            }
            let owner_name = (selected_scope == FileScope::User)
                .then_some(owner_name)
                .flatten();
            pending.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_file(kind, selected_scope, owner_name.as_deref(), &file)
                    .await
                {
                    Ok(messages) => {
                        errors.set(Vec::new());
                        on_uploaded.run(messages);
                    }
                    Err(err) => errors.set(err.messages()),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &on_uploaded;
        }
    });

    let on_scope_change = move |ev| {
        let next = if event_target_value(&ev) == "USER" {
            FileScope::User
        } else {
            FileScope::Global
        };
        scope.set(next);
    };

    let title = match kind {
        DirectoryKind::Netlist => "Upload Netlist File",
        DirectoryKind::Tech => "Upload Tech File",
    };
    view! {
        <Modal
            visible=Signal::derive(|| true)
            title=title.to_owned()
            on_close=on_cancel
            body=move || {
                view! {
                    <label class="dialog__label">
                        "File"
                        <input class="dialog__input" type="file" node_ref=file_input/>
                    </label>
                    <label class="dialog__label">
                        "Scope"
                        <select class="dialog__input" on:change=on_scope_change>
                            <option value="GLOBAL" selected=move || scope.get() == FileScope::Global>
                                "GLOBAL"
                            </option>
                            <option value="USER" selected=move || scope.get() == FileScope::User>
                                "USER"
                            </option>
                        </select>
                    </label>
                    <Show when=move || scope.get() == FileScope::User>
                        <label class="dialog__label">
                            "Username"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || owner.get()
                                on:input=move |ev| owner.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <DialogErrors errors=errors/>
                }
            }
            footer=move || {
                view! {
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || pending.get()
                        on:click=move |_| submit.run(())
                    >
                        "Upload"
                    </button>
                }
            }
        />
    }
}

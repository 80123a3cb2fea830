//! List-and-detail page for one files directory.
//!
//! SYSTEM CONTEXT
//! ==============
//! The netlist and tech views are this one component pointed at different
//! directory kinds. The page owns the fetch loop: pagination inputs and the
//! store's refresh counter are the only tracked signals, so every mutation
//! invalidates instead of refetching by hand, and stale completions are
//! dropped by the grid token.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::file_editor_dialog::FileEditorDialog;
use crate::components::file_rename_dialog::FileRenameDialog;
use crate::components::file_table::{FileAction, FileTable};
use crate::components::file_upload_dialog::FileUploadDialog;
use crate::components::pagination::Pager;
use crate::net::types::{DirectoryKind, FileRecord, ListFilesRequest};
use crate::state::editor::EditorState;
use crate::state::files::FilesStore;
use crate::state::toast::{ToastState, success_text};

/// Paginated grid plus modal-driven mutations for one directory kind.
#[component]
pub fn FilesPage(kind: DirectoryKind) -> impl IntoView {
    let store = FilesStore::new(kind);
    let toasts = expect_context::<RwSignal<ToastState>>();
    let editor = expect_context::<RwSignal<EditorState>>();

    let show_upload = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<FileRecord>);
    let rename_target = RwSignal::new(None::<FileRecord>);
    let edit_target = RwSignal::new(None::<FileRecord>);
    let delete_pending = RwSignal::new(false);

    // Fetch loop: one request per page/size/invalidation change.
    Effect::new(move || {
        let request = ListFilesRequest {
            directory: store.directory,
            page: store.page.get(),
            page_size: store.page_size.get(),
        };
        store.refresh_seq.track();
        #[cfg(feature = "hydrate")]
        {
            let token = store.grid.try_update(|grid| grid.begin()).unwrap_or_default();
            leptos::task::spawn_local(async move {
                match crate::net::api::list_files(&request).await {
                    Ok(page) => {
                        store.grid.update(|grid| {
                            grid.finish(token, page.items, page.total);
                        });
                    }
                    Err(err) => {
                        let applied = store
                            .grid
                            .try_update(|grid| grid.fail(token))
                            .unwrap_or_default();
                        if applied {
                            toasts.update(|state| {
                                state.error(format!("Could not load files: {err}"));
                            });
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    });

    let close_editor = Callback::new(move |()| {
        edit_target.set(None);
        editor.update(EditorState::clear);
    });

    let on_action = Callback::new(move |(action, file): (FileAction, FileRecord)| match action {
        FileAction::Delete => delete_target.set(Some(file)),
        FileAction::Rename => rename_target.set(Some(file)),
        FileAction::Edit => {
            #[cfg(feature = "hydrate")]
            {
                use crate::net::types::FileKey;

                leptos::task::spawn_local(async move {
                    match crate::net::api::fetch_file_content(&FileKey::of(&file)).await {
                        Ok(content) => {
                            editor.update(|state| state.load(content));
                            edit_target.set(Some(file));
                        }
                        Err(err) => {
                            toasts.update(|state| {
                                state.error(format!("Could not open {}: {err}", file.file_name));
                            });
                        }
                    }
                });
            }
        }
        FileAction::Clone => {
            #[cfg(feature = "hydrate")]
            {
                leptos::task::spawn_local(async move {
                    match crate::net::api::clone_file(file.file_id).await {
                        Ok(messages) => {
                            toasts.update(|state| {
                                state.success(success_text(&messages, "File cloned."));
                            });
                            store.invalidate();
                        }
                        Err(err) => {
                            toasts.update(|state| {
                                state.error(err.to_string());
                            });
                        }
                    }
                });
            }
        }
    });

    let on_confirm_delete = Callback::new(move |()| {
        let Some(file) = delete_target.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::FileKey;

            delete_pending.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_file(&FileKey::of(&file)).await {
                    Ok(messages) => {
                        delete_target.set(None);
                        toasts.update(|state| {
                            state.success(success_text(&messages, "File deleted."));
                        });
                        store.invalidate();
                    }
                    Err(err) => {
                        // Failure keeps the confirm modal open; the error is a
                        // toast rather than an in-modal message.
                        toasts.update(|state| {
                            state.error(err.to_string());
                        });
                    }
                }
                delete_pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = file;
    });

    let on_uploaded = Callback::new(move |messages: Vec<String>| {
        show_upload.set(false);
        toasts.update(|state| {
            state.success(success_text(&messages, "File uploaded."));
        });
        store.invalidate();
    });

    let on_renamed = Callback::new(move |messages: Vec<String>| {
        rename_target.set(None);
        toasts.update(|state| {
            state.success(success_text(&messages, "File renamed."));
        });
        store.invalidate();
    });

    let on_saved = Callback::new(move |messages: Vec<String>| {
        close_editor.run(());
        toasts.update(|state| {
            state.success(success_text(&messages, "File saved."));
        });
        store.invalidate();
    });

    view! {
        <section class="page">
            <header class="page__header">
                <h1>{kind.label()}</h1>
                <button class="btn btn--primary" on:click=move |_| show_upload.set(true)>
                    "Upload"
                </button>
            </header>

            <FileTable grid=store.grid on_action=on_action/>
            <Pager
                page=store.page
                page_size=store.page_size
                total=Signal::derive(move || store.grid.with(|grid| grid.total))
            />

            <Show when=move || show_upload.get()>
                <FileUploadDialog
                    kind=kind
                    on_cancel=Callback::new(move |()| show_upload.set(false))
                    on_uploaded=on_uploaded
                />
            </Show>

            {move || {
                delete_target
                    .get()
                    .map(|file| {
                        let title = "Delete File".to_owned();
                        let message = format!("Delete {}? This cannot be undone.", file.file_name);
                        view! {
                            <ConfirmDialog
                                title=title
                                message=message
                                confirm_label="Delete"
                                pending=delete_pending
                                on_cancel=Callback::new(move |()| delete_target.set(None))
                                on_confirm=on_confirm_delete
                            />
                        }
                    })
            }}

            {move || {
                rename_target
                    .get()
                    .map(|file| {
                        view! {
                            <FileRenameDialog
                                file=file
                                on_cancel=Callback::new(move |()| rename_target.set(None))
                                on_renamed=on_renamed
                            />
                        }
                    })
            }}

            {move || {
                edit_target
                    .get()
                    .map(|file| {
                        view! {
                            <FileEditorDialog
                                file=file
                                kind=kind
                                on_cancel=close_editor
                                on_saved=on_saved
                            />
                        }
                    })
            }}
        </section>
    }
}

//! Create/edit user form modal.
//!
//! DESIGN
//! ======
//! Edit mode keeps the retrieved snapshot and sends a partial-field patch
//! built by `diff_against`; a diff with no changes sends nothing and
//! surfaces the no-op as an info toast. Create mode validates the required
//! fields locally before posting.

#[cfg(test)]
#[path = "user_form_dialog_test.rs"]
mod user_form_dialog_test;

use leptos::prelude::*;

use crate::components::modal::{DialogErrors, Modal};
use crate::net::types::{CreateUserRequest, UserPatch, UserRecord};
use crate::state::toast::ToastState;
use crate::state::users::UsersStore;

/// Whether the dialog creates a new account or edits a snapshot.
#[derive(Clone, Debug)]
pub enum UserFormMode {
    Create,
    Edit(UserRecord),
}

/// Form fields the admin can edit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub log_level: Option<String>,
}

impl UserDraft {
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            username: record.username.clone(),
            email: record.email.clone(),
            is_admin: record.is_admin,
            log_level: record.log_level.clone(),
        }
    }
}

/// Partial-field patch: only fields that differ from the snapshot are sent.
pub fn diff_against(snapshot: &UserRecord, draft: &UserDraft) -> UserPatch {
    let mut patch = UserPatch::default();
    if draft.name != snapshot.name {
        patch.name = Some(draft.name.clone());
    }
    if draft.email != snapshot.email {
        patch.email = Some(draft.email.clone());
    }
    if draft.is_admin != snapshot.is_admin {
        patch.is_admin = Some(draft.is_admin);
    }
    if draft.log_level != snapshot.log_level {
        patch.log_level = draft.log_level.clone();
    }
    patch
}

/// Locally detectable problems with a create-mode draft.
pub fn draft_problems(draft: &UserDraft) -> Vec<String> {
    let mut problems = Vec::new();
    if draft.name.trim().is_empty() {
        problems.push("Name is required.".to_owned());
    }
    if draft.username.trim().is_empty() {
        problems.push("Username is required.".to_owned());
    }
    if draft.email.trim().is_empty() {
        problems.push("Email is required.".to_owned());
    }
    problems
}

/// Trimmed create body built from a validated draft.
pub fn create_request(draft: &UserDraft) -> CreateUserRequest {
    CreateUserRequest {
        name: draft.name.trim().to_owned(),
        username: draft.username.trim().to_owned(),
        email: draft.email.trim().to_owned(),
        is_admin: draft.is_admin,
        log_level: draft.log_level.clone(),
    }
}

#[component]
pub fn UserFormDialog(
    mode: UserFormMode,
    #[prop(into)] on_cancel: Callback<()>,
    /// Invoked with the server messages after a successful create/update.
    #[prop(into)] on_saved: Callback<Vec<String>>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let users = expect_context::<UsersStore>();

    let initial = match &mode {
        UserFormMode::Create => UserDraft::default(),
        UserFormMode::Edit(record) => UserDraft::from_record(record),
    };
    let is_edit = matches!(mode, UserFormMode::Edit(_));

    let name = RwSignal::new(initial.name);
    let username = RwSignal::new(initial.username);
    let email = RwSignal::new(initial.email);
    let is_admin = RwSignal::new(initial.is_admin);
    let log_level = RwSignal::new(initial.log_level);
    let errors = RwSignal::new(Vec::<String>::new());
    let pending = RwSignal::new(false);

    let submit_mode = mode.clone();
    let submit = Callback::new(move |()| {
        if pending.get_untracked() {
            return;
        }
        let draft = UserDraft {
            name: name.get_untracked(),
            username: username.get_untracked(),
            email: email.get_untracked(),
            is_admin: is_admin.get_untracked(),
            log_level: log_level.get_untracked(),
        };
        #[cfg(feature = "hydrate")]
        {
            use crate::net::error::ApiError;

            match &submit_mode {
                UserFormMode::Create => {
                    let problems = draft_problems(&draft);
                    if !problems.is_empty() {
                        errors.set(problems);
                        return;
                    }
                    let request = create_request(&draft);
                    pending.set(true);
                    leptos::task::spawn_local(async move {
                        match crate::net::api::create_user(&request).await {
                            Ok(messages) => on_saved.run(messages),
                            Err(err @ ApiError::Rejected { .. }) => errors.set(err.messages()),
                            Err(err) => {
                                toasts.update(|state| {
                                    state.error(err.to_string());
                                });
                            }
                        }
                        pending.set(false);
                    });
                }
                UserFormMode::Edit(snapshot) => {
                    let patch = diff_against(snapshot, &draft);
                    if patch.is_empty() {
                        toasts.update(|state| {
                            state.info("No fields changed.");
                        });
                        return;
                    }
                    let id = snapshot.id;
                    pending.set(true);
                    leptos::task::spawn_local(async move {
                        match crate::net::api::update_user(id, &patch).await {
                            Ok(messages) => on_saved.run(messages),
                            Err(err @ ApiError::Rejected { .. }) => errors.set(err.messages()),
                            Err(err) => {
                                toasts.update(|state| {
                                    state.error(err.to_string());
                                });
                            }
                        }
                        pending.set(false);
                    });
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, &submit_mode, &on_saved, &toasts);
        }
    });

    let title = if is_edit { "Edit User" } else { "Create User" };
    view! {
        <Modal
            visible=Signal::derive(|| true)
            title=title.to_owned()
            on_close=on_cancel
            body=move || {
                view! {
                    <label class="dialog__label">
                        "Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Username"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || username.get()
                            disabled=is_edit
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label dialog__label--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || is_admin.get()
                            on:change=move |ev| is_admin.set(event_target_checked(&ev))
                        />
                        "Administrator"
                    </label>
                    <label class="dialog__label">
                        "Log Level"
                        <select
                            class="dialog__input"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                log_level.set((!value.is_empty()).then_some(value));
                            }
                        >
                            <option value="" selected=move || log_level.get().is_none()>
                                "(default)"
                            </option>
                            {move || {
                                users
                                    .log_levels
                                    .get()
                                    .into_iter()
                                    .map(|level| {
                                        let value = level.clone();
                                        view! {
                                            <option
                                                value=level.clone()
                                                selected=move || log_level.get().as_deref() == Some(value.as_str())
                                            >
                                                {level}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </label>
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
                        {if is_edit { "Save" } else { "Create" }}
                    </button>
                }
            }
        />
    }
}

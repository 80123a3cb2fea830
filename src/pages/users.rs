//! User accounts list-and-detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backed by the shared users store: the page owns the fetch loop while the
//! create/edit dialog reads the once-fetched log-level options from the same
//! store. Soft delete, restore, enable/disable, and reset-password are all
//! patch shapes of one endpoint; restore is the only one that skips the
//! confirm step.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pagination::Pager;
use crate::components::user_form_dialog::{UserFormDialog, UserFormMode};
use crate::components::user_table::{UserAction, UserTable};
use crate::net::types::{UserPatch, UserRecord};
use crate::state::toast::{ToastState, success_text};
use crate::state::users::UsersStore;

/// Patch body for a direct (non-form) row action; `Edit` has none.
pub fn action_patch(action: UserAction) -> Option<UserPatch> {
    match action {
        UserAction::Edit => None,
        UserAction::ResetPassword => Some(UserPatch::password_reset()),
        UserAction::Disable => Some(UserPatch::set_active(false)),
        UserAction::Enable => Some(UserPatch::set_active(true)),
        UserAction::Delete => Some(UserPatch::set_deleted(true)),
        UserAction::Restore => Some(UserPatch::set_deleted(false)),
    }
}

/// Title, message, and confirm label for the confirm modal.
pub fn confirm_copy(action: UserAction, username: &str) -> (String, String, &'static str) {
    match action {
        UserAction::ResetPassword => (
            "Reset Password".to_owned(),
            format!("Reset the password for {username}?"),
            "Reset",
        ),
        UserAction::Disable => (
            "Disable User".to_owned(),
            format!("Disable login for {username}?"),
            "Disable",
        ),
        UserAction::Enable => (
            "Enable User".to_owned(),
            format!("Enable login for {username}?"),
            "Enable",
        ),
        UserAction::Delete => (
            "Delete User".to_owned(),
            format!("Delete {username}? The account can be restored later."),
            "Delete",
        ),
        UserAction::Edit | UserAction::Restore => {
            ("Confirm".to_owned(), format!("Proceed with {username}?"), "Confirm")
        }
    }
}

/// Fallback toast text per action.
fn done_text(action: UserAction) -> &'static str {
    match action {
        UserAction::Edit => "User updated.",
        UserAction::ResetPassword => "Password reset.",
        UserAction::Disable => "User disabled.",
        UserAction::Enable => "User enabled.",
        UserAction::Delete => "User deleted.",
        UserAction::Restore => "User restored.",
    }
}

/// Paginated user grid plus modal-driven account management.
#[component]
pub fn UsersPage() -> impl IntoView {
    let users = expect_context::<UsersStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let form_mode = RwSignal::new(None::<UserFormMode>);
    let confirm_target = RwSignal::new(None::<(UserAction, UserRecord)>);
    let confirm_pending = RwSignal::new(false);

    // Fetch loop: one request per page/size/invalidation change.
    Effect::new(move || {
        let page = users.page.get();
        let page_size = users.page_size.get();
        users.refresh_seq.track();
        #[cfg(feature = "hydrate")]
        {
            let token = users.grid.try_update(|grid| grid.begin()).unwrap_or_default();
            leptos::task::spawn_local(async move {
                match crate::net::api::list_users(page, page_size).await {
                    Ok(result) => {
                        users.grid.update(|grid| {
                            grid.finish(token, result.items, result.total);
                        });
                    }
                    Err(err) => {
                        let applied = users
                            .grid
                            .try_update(|grid| grid.fail(token))
                            .unwrap_or_default();
                        if applied {
                            toasts.update(|state| {
                                state.error(format!("Could not load users: {err}"));
                            });
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (page, page_size);
    });

    // One-time fetch of the dynamic log-level options.
    Effect::new(move || {
        if users.log_levels_requested.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            users.log_levels_requested.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_log_levels().await {
                    Ok(levels) => users.log_levels.set(levels),
                    Err(err) => {
                        log::warn!("log level options unavailable: {err}");
                    }
                }
            });
        }
    });

    // Apply a fixed patch shape for one row, then invalidate.
    let apply_action = move |action: UserAction, user: UserRecord, close_confirm: bool| {
        #[cfg(feature = "hydrate")]
        {
            let Some(patch) = action_patch(action) else {
                return;
            };
            confirm_pending.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::update_user(user.id, &patch).await {
                    Ok(messages) => {
                        if close_confirm {
                            confirm_target.set(None);
                        }
                        toasts.update(|state| {
                            state.success(success_text(&messages, done_text(action)));
                        });
                        users.invalidate();
                    }
                    Err(err) => {
                        toasts.update(|state| {
                            state.error(err.to_string());
                        });
                    }
                }
                confirm_pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (action, user, close_confirm);
    };

    let on_action = Callback::new(move |(action, user): (UserAction, UserRecord)| match action {
        UserAction::Edit => {
            #[cfg(feature = "hydrate")]
            {
                leptos::task::spawn_local(async move {
                    match crate::net::api::retrieve_user(user.id).await {
                        Ok(snapshot) => form_mode.set(Some(UserFormMode::Edit(snapshot))),
                        Err(err) => {
                            toasts.update(|state| {
                                state.error(format!("Could not open {}: {err}", user.username));
                            });
                        }
                    }
                });
            }
        }
        UserAction::Restore => apply_action(action, user, false),
        UserAction::ResetPassword | UserAction::Disable | UserAction::Enable | UserAction::Delete => {
            confirm_target.set(Some((action, user)));
        }
    });

    let on_confirm = Callback::new(move |()| {
        let Some((action, user)) = confirm_target.get_untracked() else {
            return;
        };
        apply_action(action, user, true);
    });

    let on_form_saved = Callback::new(move |messages: Vec<String>| {
        let was_edit = matches!(form_mode.get_untracked(), Some(UserFormMode::Edit(_)));
        form_mode.set(None);
        let fallback = if was_edit { "User updated." } else { "User created." };
        toasts.update(|state| {
            state.success(success_text(&messages, fallback));
        });
        users.invalidate();
    });

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Users"</h1>
                <button
                    class="btn btn--primary"
                    on:click=move |_| form_mode.set(Some(UserFormMode::Create))
                >
                    "Create User"
                </button>
            </header>

            <UserTable grid=users.grid on_action=on_action/>
            <Pager
                page=users.page
                page_size=users.page_size
                total=Signal::derive(move || users.grid.with(|grid| grid.total))
            />

            {move || {
                form_mode
                    .get()
                    .map(|mode| {
                        view! {
                            <UserFormDialog
                                mode=mode
                                on_cancel=Callback::new(move |()| form_mode.set(None))
                                on_saved=on_form_saved
                            />
                        }
                    })
            }}

            {move || {
                confirm_target
                    .get()
                    .map(|(action, user)| {
                        let (title, message, confirm_label) = confirm_copy(action, &user.username);
                        view! {
                            <ConfirmDialog
                                title=title
                                message=message
                                confirm_label=confirm_label
                                pending=confirm_pending
                                on_cancel=Callback::new(move |()| confirm_target.set(None))
                                on_confirm=on_confirm
                            />
                        }
                    })
            }}
        </section>
    }
}

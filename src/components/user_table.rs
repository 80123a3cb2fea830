//! Users grid with per-row actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Action availability combines server capability flags with two local
//! rules: a soft-deleted row collapses to a single restore action, and the
//! signed-in admin's own row offers no mutating controls at all.

#[cfg(test)]
#[path = "user_table_test.rs"]
mod user_table_test;

use leptos::prelude::*;

use crate::net::types::UserRecord;
use crate::state::grid::{GridPhase, GridState};
use crate::state::session::SessionState;

/// Row action kinds for a user entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserAction {
    Edit,
    ResetPassword,
    Disable,
    Enable,
    Delete,
    Restore,
}

/// Actions visible for one row.
pub fn user_row_actions(user: &UserRecord, session: &SessionState) -> Vec<UserAction> {
    if user.is_deleted {
        return vec![UserAction::Restore];
    }
    if session.is_self(&user.username) {
        return Vec::new();
    }
    let mut actions = Vec::new();
    if user.can_edit {
        actions.push(UserAction::Edit);
        actions.push(UserAction::ResetPassword);
    }
    if user.can_disable {
        actions.push(if user.is_active {
            UserAction::Disable
        } else {
            UserAction::Enable
        });
    }
    if user.can_delete {
        actions.push(UserAction::Delete);
    }
    actions
}

fn action_label(action: UserAction) -> &'static str {
    match action {
        UserAction::Edit => "Edit",
        UserAction::ResetPassword => "Reset Password",
        UserAction::Disable => "Disable",
        UserAction::Enable => "Enable",
        UserAction::Delete => "Delete",
        UserAction::Restore => "Restore",
    }
}

/// Login status shown in the grid.
pub fn status_label(user: &UserRecord) -> &'static str {
    if user.is_deleted {
        "Deleted"
    } else if user.is_active {
        "Active"
    } else {
        "Disabled"
    }
}

/// Paginated user-account grid.
#[component]
pub fn UserTable(
    grid: RwSignal<GridState<UserRecord>>,
    #[prop(into)] on_action: Callback<(UserAction, UserRecord)>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="grid-table-wrap">
            {move || {
                let state = grid.get();
                match state.phase {
                    GridPhase::Idle | GridPhase::Loading => {
                        view! { <p class="grid-status">"Loading…"</p> }.into_any()
                    }
                    GridPhase::Error => {
                        view! { <p class="grid-status grid-status--error">"Could not load users."</p> }
                            .into_any()
                    }
                    GridPhase::Empty => view! { <p class="grid-status">"No users."</p> }.into_any(),
                    GridPhase::Populated => {
                        view! {
                            <table class="grid-table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Username"</th>
                                        <th>"Email"</th>
                                        <th>"Admin"</th>
                                        <th>"Status"</th>
                                        <th>"Log Level"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {state
                                        .items
                                        .into_iter()
                                        .map(|user| {
                                            view! { <UserRow user=user session=session on_action=on_action/> }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}

#[component]
fn UserRow(
    user: UserRecord,
    session: RwSignal<SessionState>,
    #[prop(into)] on_action: Callback<(UserAction, UserRecord)>,
) -> impl IntoView {
    let actions = {
        let user = user.clone();
        move || user_row_actions(&user, &session.get())
    };
    let action_user = user.clone();
    let buttons = move || {
        actions()
            .into_iter()
            .map(|action| {
                let record = action_user.clone();
                view! {
                    <button
                        class="btn btn--row"
                        on:click=move |_| on_action.run((action, record.clone()))
                    >
                        {action_label(action)}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <tr class:grid-table__row--deleted=user.is_deleted>
            <td>{user.name.clone()}</td>
            <td class="grid-table__mono">{user.username.clone()}</td>
            <td>{user.email.clone()}</td>
            <td>{if user.is_admin { "Yes" } else { "No" }}</td>
            <td>{status_label(&user)}</td>
            <td>{user.log_level.clone().unwrap_or_else(|| "—".to_owned())}</td>
            <td class="grid-table__actions">{buttons}</td>
        </tr>
    }
}

//! Files grid with per-row actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders rows from the page-owned grid signal. Action availability is
//! decided by `file_row_actions` from server capability flags: unavailable
//! actions are hidden, not disabled.

#[cfg(test)]
#[path = "file_table_test.rs"]
mod file_table_test;

use leptos::prelude::*;

use crate::net::types::{FileRecord, FileScope};
use crate::state::grid::{GridPhase, GridState};

/// Row action kinds for a file entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileAction {
    Edit,
    Rename,
    Clone,
    Delete,
}

/// Actions visible for one row. Editing and renaming follow `can_edit`,
/// deletion follows `can_delete`; cloning is always offered.
pub fn file_row_actions(file: &FileRecord) -> Vec<FileAction> {
    let mut actions = Vec::new();
    if file.can_edit {
        actions.push(FileAction::Edit);
        actions.push(FileAction::Rename);
    }
    actions.push(FileAction::Clone);
    if file.can_delete {
        actions.push(FileAction::Delete);
    }
    actions
}

fn action_label(action: FileAction) -> &'static str {
    match action {
        FileAction::Edit => "Edit",
        FileAction::Rename => "Rename",
        FileAction::Clone => "Clone",
        FileAction::Delete => "Delete",
    }
}

fn scope_label(scope: FileScope) -> &'static str {
    match scope {
        FileScope::User => "USER",
        FileScope::Global => "GLOBAL",
    }
}

/// Paginated file grid for one directory kind.
#[component]
pub fn FileTable(
    grid: RwSignal<GridState<FileRecord>>,
    #[prop(into)] on_action: Callback<(FileAction, FileRecord)>,
) -> impl IntoView {
    view! {
        <div class="grid-table-wrap">
            {move || {
                let state = grid.get();
                match state.phase {
                    GridPhase::Idle | GridPhase::Loading => {
                        view! { <p class="grid-status">"Loading…"</p> }.into_any()
                    }
                    GridPhase::Error => {
                        view! { <p class="grid-status grid-status--error">"Could not load files."</p> }
                            .into_any()
                    }
                    GridPhase::Empty => view! { <p class="grid-status">"No files."</p> }.into_any(),
                    GridPhase::Populated => {
                        view! {
                            <table class="grid-table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Scope"</th>
                                        <th>"Owner"</th>
                                        <th>"Updated"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {state
                                        .items
                                        .into_iter()
                                        .map(|file| view! { <FileRow file=file on_action=on_action/> })
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
fn FileRow(
    file: FileRecord,
    #[prop(into)] on_action: Callback<(FileAction, FileRecord)>,
) -> impl IntoView {
    let buttons = file_row_actions(&file)
        .into_iter()
        .map(|action| {
            let record = file.clone();
            view! {
                <button
                    class="btn btn--row"
                    on:click=move |_| on_action.run((action, record.clone()))
                >
                    {action_label(action)}
                </button>
            }
        })
        .collect_view();

    view! {
        <tr>
            <td class="grid-table__mono">{file.file_name.clone()}</td>
            <td>{scope_label(file.file_type)}</td>
            <td>{file.username.clone().unwrap_or_else(|| "—".to_owned())}</td>
            <td>{file.time_stamp.clone().unwrap_or_default()}</td>
            <td class="grid-table__actions">{buttons}</td>
        </tr>
    }
}

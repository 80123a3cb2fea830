//! Shared store for the users grid and form options.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once from `App` so the users page and its dialogs share
//! pagination, totals, and the once-fetched log-level options without prop
//! drilling.

use leptos::prelude::*;

use crate::components::pagination::DEFAULT_PAGE_SIZE;
use crate::net::types::UserRecord;

use super::grid::GridState;

/// Pagination inputs, grid output, and log-level options for the users view.
#[derive(Clone, Copy)]
pub struct UsersStore {
    pub page: RwSignal<u32>,
    pub page_size: RwSignal<u32>,
    pub refresh_seq: RwSignal<u64>,
    pub grid: RwSignal<GridState<UserRecord>>,
    /// Dynamic options for the user form's LogLevel select.
    pub log_levels: RwSignal<Vec<String>>,
    /// Set after the one-time options fetch has been issued.
    pub log_levels_requested: RwSignal<bool>,
}

impl UsersStore {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(1),
            page_size: RwSignal::new(DEFAULT_PAGE_SIZE),
            refresh_seq: RwSignal::new(0),
            grid: RwSignal::new(GridState::default()),
            log_levels: RwSignal::new(Vec::new()),
            log_levels_requested: RwSignal::new(false),
        }
    }

    /// Ask the users view to refetch its current page.
    pub fn invalidate(&self) {
        self.refresh_seq.update(|seq| *seq += 1);
    }
}

impl Default for UsersStore {
    fn default() -> Self {
        Self::new()
    }
}

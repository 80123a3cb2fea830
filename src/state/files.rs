//! Per-page store for a files grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each files page owns one store instance; the netlist and tech grids are
//! the same machine pointed at different directories. `invalidate` is the
//! repository seam: mutations bump the counter and the page's fetch effect
//! re-runs instead of being handed a refetch callback.

use leptos::prelude::*;

use crate::components::pagination::DEFAULT_PAGE_SIZE;
use crate::net::types::{DirectoryKind, FileRecord};

use super::grid::GridState;

/// Pagination inputs plus grid output for one files view.
#[derive(Clone, Copy)]
pub struct FilesStore {
    pub directory: DirectoryKind,
    pub page: RwSignal<u32>,
    pub page_size: RwSignal<u32>,
    pub refresh_seq: RwSignal<u64>,
    pub grid: RwSignal<GridState<FileRecord>>,
}

impl FilesStore {
    pub fn new(directory: DirectoryKind) -> Self {
        Self {
            directory,
            page: RwSignal::new(1),
            page_size: RwSignal::new(DEFAULT_PAGE_SIZE),
            refresh_seq: RwSignal::new(0),
            grid: RwSignal::new(GridState::default()),
        }
    }

    /// Ask the owning view to refetch its current page.
    pub fn invalidate(&self) {
        self.refresh_seq.update(|seq| *seq += 1);
    }
}

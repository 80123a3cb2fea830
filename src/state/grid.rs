//! Paginated grid state machine shared by the list views.
//!
//! DESIGN
//! ======
//! Every fetch obtains a monotonic token from `begin`; completions carry
//! the token back and stale ones are dropped, so a superseded request can
//! never overwrite a newer page.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

/// Lifecycle of a grid's current fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Rows arrived and at least one is shown.
    Populated,
    /// The fetch succeeded with zero rows.
    Empty,
    /// The fetch failed; rows are cleared.
    Error,
}

/// Rows, total count, and fetch bookkeeping for one paginated grid.
#[derive(Clone, Debug)]
pub struct GridState<T> {
    pub phase: GridPhase,
    pub items: Vec<T>,
    pub total: i64,
    request_seq: u64,
}

impl<T> Default for GridState<T> {
    fn default() -> Self {
        Self {
            phase: GridPhase::default(),
            items: Vec::new(),
            total: 0,
            request_seq: 0,
        }
    }
}

impl<T> GridState<T> {
    /// Enter `Loading` and hand out the token the fetch must return with.
    pub fn begin(&mut self) -> u64 {
        self.request_seq += 1;
        self.phase = GridPhase::Loading;
        self.request_seq
    }

    /// Apply a successful page, replacing the displayed rows. Returns
    /// `false` when the token is stale and the page was dropped.
    pub fn finish(&mut self, token: u64, items: Vec<T>, total: i64) -> bool {
        if token != self.request_seq {
            return false;
        }
        self.phase = if items.is_empty() {
            GridPhase::Empty
        } else {
            GridPhase::Populated
        };
        self.items = items;
        self.total = total;
        true
    }

    /// Apply a failed fetch: the grid clears and shows its error state.
    /// Returns `false` when the token is stale.
    pub fn fail(&mut self, token: u64) -> bool {
        if token != self.request_seq {
            return false;
        }
        self.phase = GridPhase::Error;
        self.items.clear();
        self.total = 0;
        true
    }
}

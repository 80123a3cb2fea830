//! Session state for the signed-in administrator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetched once at mount; the self-row rules in the users grid key off the
//! session username.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::SessionUser;

/// The current admin session and its loading status.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl SessionState {
    /// Whether `username` belongs to the signed-in admin. The comparison is
    /// case-insensitive so `Alice` cannot disable `alice`.
    pub fn is_self(&self, username: &str) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.username.eq_ignore_ascii_case(username))
    }
}

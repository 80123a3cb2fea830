//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `editor`, `users`, ...) so
//! individual components can depend on small focused models. Signal-holding
//! stores are provided once from `App`; the pure structs underneath stay
//! testable without a reactive runtime.

pub mod editor;
pub mod files;
pub mod grid;
pub mod session;
pub mod toast;
pub mod users;

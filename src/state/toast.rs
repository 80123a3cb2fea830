//! Toast notification queue.
//!
//! Operation outcomes that surface as notifications land here; the host
//! component handles rendering and auto-expiry.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use uuid::Uuid;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// One queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub text: String,
}

/// Queue of visible toasts, provided via context.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    pub fn success(&mut self, text: impl Into<String>) -> Uuid {
        self.push(ToastKind::Success, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> Uuid {
        self.push(ToastKind::Error, text)
    }

    pub fn info(&mut self, text: impl Into<String>) -> Uuid {
        self.push(ToastKind::Info, text)
    }

    /// Remove a toast; unknown ids are a no-op.
    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// First server message, or the fallback when the server sent none.
pub fn success_text(messages: &[String], fallback: &str) -> String {
    messages
        .first()
        .cloned()
        .unwrap_or_else(|| fallback.to_owned())
}

//! Tagged error type for the REST boundary.
//!
//! ERROR HANDLING
//! ==============
//! The server reports failure three ways: transport-level errors, JSON
//! envelopes with `status: false`, and envelopes carrying an HTTP-style
//! `status_code`. All of them normalize here so callers match on one enum
//! instead of duck-typing response fields, and `message` values that arrive
//! as a bare string collapse into the same list shape as arrays.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::{Deserialize, Deserializer};

/// Failure of a single REST operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response.
    #[error("request failed: {0}")]
    Transport(String),
    /// A response arrived but could not be interpreted.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// The server processed the request and rejected it.
    #[error("{}", messages.join("; "))]
    Rejected {
        status_code: Option<u16>,
        messages: Vec<String>,
    },
}

impl ApiError {
    /// Messages suitable for inline rendering; transport-class failures
    /// collapse to a single generic line.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Rejected { messages, .. } => messages.clone(),
            other => vec![other.to_string()],
        }
    }

    /// Server-reported status code, when the rejection carried one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Rejected { status_code, .. } => *status_code,
            Self::Transport(_) | Self::Malformed(_) => None,
        }
    }
}

/// Response envelope shared by the administrator and profile endpoints.
///
/// Some endpoints answer `{status: bool, message}`, others
/// `{status_code: u16, message}`; `message` may be a string, an array,
/// null, or absent.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: Option<bool>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default, deserialize_with = "deserialize_messages")]
    pub message: Vec<String>,
}

impl Envelope {
    /// Convert the envelope into an explicit outcome, yielding the server
    /// messages on success for toast display.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `status` is false or
    /// `status_code` is 400 or above.
    pub fn into_result(self) -> Result<Vec<String>, ApiError> {
        let code_ok = self.status_code.is_none_or(|code| code < 400);
        let accepted = match self.status {
            Some(status) => status && code_ok,
            None => code_ok,
        };
        if accepted {
            Ok(self.message)
        } else {
            Err(ApiError::Rejected {
                status_code: self.status_code,
                messages: non_empty(self.message),
            })
        }
    }
}

fn non_empty(messages: Vec<String>) -> Vec<String> {
    if messages.is_empty() {
        vec!["operation failed".to_owned()]
    } else {
        messages
    }
}

/// Accept `"text"`, `["a", "b"]`, `null`, or a missing field as a message list.
pub(crate) fn deserialize_messages<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(flatten_messages(value))
}

fn flatten_messages(value: serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Null => Vec::new(),
        serde_json::Value::String(text) => vec![text],
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(text) => text,
                other => other.to_string(),
            })
            .collect(),
        other => vec![other.to_string()],
    }
}

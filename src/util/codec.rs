//! Base64 codec for file content transported as text.
//!
//! The server ships file bodies base64-encoded; decoding happens once at the
//! network boundary so everything above it works with plain text.

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

use base64::{Engine as _, engine::general_purpose};

/// Decode base64 file content into UTF-8 text.
///
/// # Errors
///
/// Returns a message when the input is not valid base64 or does not decode
/// to UTF-8 text.
pub fn decode_content(encoded: &str) -> Result<String, String> {
    let bytes = general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|err| format!("invalid base64 content: {err}"))?;
    String::from_utf8(bytes).map_err(|err| format!("content is not UTF-8 text: {err}"))
}

/// Encode text content as base64 for upload/modify bodies.
pub fn encode_content(content: &str) -> String {
    general_purpose::STANDARD.encode(content.as_bytes())
}

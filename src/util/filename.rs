//! Filename stem/extension helpers for the rename workflow.
//!
//! The rename dialog only lets the user edit the stem; the original
//! extension is re-appended before the request is sent.

#[cfg(test)]
#[path = "filename_test.rs"]
mod filename_test;

/// Split a filename into its stem and extension suffix (dot included).
///
/// A name without a dot, or a dotfile like `.env`, has an empty suffix.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => (stem, &name[stem.len()..]),
        _ => (name, ""),
    }
}

/// Stem of `name` with the extension stripped.
pub fn stem(name: &str) -> &str {
    split_name(name).0
}

/// Combine a user-entered stem with the extension of `original`.
pub fn with_extension_of(original: &str, new_stem: &str) -> String {
    let (_, suffix) = split_name(original);
    format!("{new_stem}{suffix}")
}

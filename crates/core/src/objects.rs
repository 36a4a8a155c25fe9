//! Object-key naming for uploaded category images.
//!
//! Stored objects live under one prefix per category, with a millisecond
//! timestamp prepended to the original filename to avoid collisions when the
//! same file is uploaded twice:
//!
//! ```text
//! {category_id}/{unix_millis}-{filename}
//! ```

use crate::types::DbId;

/// Build the storage key for an uploaded file.
///
/// The filename is sanitized first; the timestamp is the upload instant in
/// Unix milliseconds.
pub fn object_key(category_id: DbId, uploaded_at_millis: i64, filename: &str) -> String {
    format!(
        "{category_id}/{uploaded_at_millis}-{}",
        sanitize_filename(filename)
    )
}

/// Reduce an uploaded filename to a safe single path component.
///
/// Strips any directory components the client sent, then replaces characters
/// outside `[A-Za-z0-9._-]` with `_`. An empty result becomes `"file"`.
pub fn sanitize_filename(filename: &str) -> String {
    let basename = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
        .trim();

    let cleaned: String = basename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_matches('.').to_string();
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

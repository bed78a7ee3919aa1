//! Text normalization shared by lookups and search.
//!
//! Seed fields are all optional, so every comparison and every response field
//! goes through one of these two helpers instead of touching raw `Option`s.

/// Trimmed, lower-cased comparison key. Missing input maps to `""`.
pub fn norm(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_lowercase()
}

/// Display-safe view of an optional string. Missing input maps to `""`.
pub fn safe(value: Option<&str>) -> &str {
    value.unwrap_or_default()
}

/// `Some` only for a non-blank string.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

//! Model and store references.

/// `http://` and `https://` references are fetched, never joined to a directory.
pub fn is_url(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

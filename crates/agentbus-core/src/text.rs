//! Author and content validation applied before any write

use crate::error::BusError;

/// Maximum author/agent name length in Unicode scalar values.
pub const MAX_AUTHOR_CHARS: usize = 100;

/// Maximum message content size in bytes.
pub const MAX_CONTENT_BYTES: usize = 100_000;

// Characters that would break the per-message filename or escape the
// message directory. The author lands verbatim in the storage filename.
const AUTHOR_FORBIDDEN: [char; 5] = ['/', '\\', '\0', '\n', '\r'];

/// Validate an author/agent identity, returning the trimmed name.
///
/// # Errors
///
/// Returns `BusError::InvalidAuthor` when the trimmed name is empty,
/// longer than [`MAX_AUTHOR_CHARS`], or contains path-unsafe characters.
pub fn validate_author(author: &str) -> Result<String, BusError> {
    let trimmed = author.trim();
    if trimmed.is_empty() {
        return Err(BusError::InvalidAuthor(
            "author name cannot be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_AUTHOR_CHARS {
        return Err(BusError::InvalidAuthor(format!(
            "author name too long (max {MAX_AUTHOR_CHARS} characters)"
        )));
    }
    if trimmed.chars().any(|c| AUTHOR_FORBIDDEN.contains(&c)) {
        return Err(BusError::InvalidAuthor(
            "author name contains path-unsafe characters".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Validate message content. Empty content is allowed.
///
/// # Errors
///
/// Returns `BusError::InvalidContent` when the content contains null
/// bytes or exceeds [`MAX_CONTENT_BYTES`].
pub fn validate_content(content: &str) -> Result<(), BusError> {
    if content.contains('\0') {
        return Err(BusError::InvalidContent(
            "content contains null bytes".to_string(),
        ));
    }
    if content.len() > MAX_CONTENT_BYTES {
        return Err(BusError::InvalidContent(format!(
            "content size ({} bytes) exceeds maximum allowed ({MAX_CONTENT_BYTES} bytes)",
            content.len()
        )));
    }
    Ok(())
}

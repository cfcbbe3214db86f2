//! Timestamp generation and encoding for message identity
//!
//! Message identity and ordering hang off one encoding choice: timestamps
//! are ISO 8601 UTC with exactly six fractional-second digits and a
//! `+00:00` offset. The encoding is fixed-width, so lexical order equals
//! chronological order both in message records and in the filenames
//! derived from them.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// Current UTC time as an ISO 8601 string with microsecond precision,
/// e.g. `2026-08-05T14:30:00.123456+00:00`.
pub fn now_iso_micros() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Encode a timestamp for use in a filename.
///
/// `:` is not legal on every filesystem; `-` is, and the substitution
/// preserves lexical ordering because the encoding is fixed-width.
pub fn filename_encode(timestamp: &str) -> String {
    timestamp.replace(':', "-")
}

/// Parse an ISO 8601 timestamp as stored in message records and cursors.
///
/// Returns `None` on malformed input; callers decide whether that means
/// skip, treat-as-absent, or error.
pub fn parse_iso(timestamp: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(timestamp).ok()
}

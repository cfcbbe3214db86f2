//! Message record schema

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One message on the bus
///
/// Stored one per file under `<root>/messages/`, named
/// `<sortable-timestamp>_<author>.json`. Immutable once written; never
/// deleted by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Sender identity
    pub author: String,

    /// ISO 8601 UTC timestamp with microsecond precision,
    /// e.g. `2026-08-05T14:30:00.123456+00:00`
    pub timestamp: String,

    /// Message body (may be empty, may be multi-line)
    pub content: String,

    /// Unknown fields preserved for forward compatibility
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

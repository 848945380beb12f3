// Event entity
// Represents a single tag read reported by a reader

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value_objects::{AssetId, EventId, ReaderId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub tag: String,
    pub reader: String,
    pub asset_id: AssetId,
    pub reader_id: ReaderId,
    pub created_at: i64,
}

/// Candidate Event as supplied by the caller. `tag` and `reader` stay raw JSON
/// until the creation guard normalizes them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewEvent {
    #[serde(default)]
    pub tag: Value,
    #[serde(default)]
    pub reader: Value,
}

#[derive(Debug, Default, Deserialize)]
pub struct EventQuery {
    pub tag: Option<String>,
    pub limit: Option<usize>,
}

// Asset entity
// Tracked item; keeps a denormalized pointer to the Reader that saw it last

use serde::{Deserialize, Serialize};

use crate::value_objects::{AssetId, ReaderId, TagId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub tag_id: TagId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub current_reader_id: Option<ReaderId>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Asset {
    pub fn is_at_reader(&self, reader_id: &ReaderId) -> bool {
        self.current_reader_id.as_ref() == Some(reader_id)
    }

    pub fn move_to_reader(&mut self, reader_id: ReaderId, now_ms: i64) {
        self.current_reader_id = Some(reader_id);
        self.updated_at = now_ms;
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAsset {
    pub tag_id: TagId,
    #[serde(default)]
    pub name: Option<String>,
}

// Tag entity
// Physical or logical tag used to resolve the Asset it is attached to

use serde::{Deserialize, Serialize};

use crate::value_objects::TagId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub tag: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTag {
    pub tag: String,
}

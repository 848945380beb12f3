// Reader entity
// Scanning device that reports tag reads

use serde::{Deserialize, Serialize};

use crate::value_objects::ReaderId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reader {
    pub id: ReaderId,
    pub reader: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewReader {
    pub reader: String,
}

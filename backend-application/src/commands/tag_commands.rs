use chrono::Utc;
use tracing::info;

use crate::{AppError, AppState};
use backend_domain::{LookupKey, NewTag, Tag, TagId};

pub async fn create_tag(state: &AppState, payload: NewTag) -> Result<Tag, AppError> {
    let key = LookupKey::from_text("tag", &payload.tag)?;
    let tag = Tag {
        id: TagId::new(),
        tag: key.into_string(),
        created_at: Utc::now().timestamp_millis(),
    };
    state
        .tag_repo
        .insert_tag(&tag)
        .await
        .map_err(AppError::from_insert)?;
    info!(tag = %tag.tag, id = %tag.id, "tag created");
    Ok(tag)
}

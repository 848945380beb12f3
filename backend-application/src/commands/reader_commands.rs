use chrono::Utc;
use tracing::info;

use crate::{AppError, AppState};
use backend_domain::{LookupKey, NewReader, Reader, ReaderId};

pub async fn create_reader(state: &AppState, payload: NewReader) -> Result<Reader, AppError> {
    let key = LookupKey::from_text("reader", &payload.reader)?;
    let reader = Reader {
        id: ReaderId::new(),
        reader: key.into_string(),
        created_at: Utc::now().timestamp_millis(),
    };
    state
        .reader_repo
        .insert_reader(&reader)
        .await
        .map_err(AppError::from_insert)?;
    info!(reader = %reader.reader, id = %reader.id, "reader registered");
    Ok(reader)
}

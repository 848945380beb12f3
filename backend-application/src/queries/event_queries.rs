use tracing::error;

use crate::{AppError, AppState};
use backend_domain::{Event, EventQuery};

const MAX_LIST_LIMIT: usize = 500;

pub async fn list_events(state: &AppState, query: EventQuery) -> Result<Vec<Event>, AppError> {
    let limit = query
        .limit
        .unwrap_or(state.config.default_list_limit)
        .clamp(1, MAX_LIST_LIMIT);
    let tag = query
        .tag
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty());
    let events = state
        .event_repo
        .list_events(tag, limit)
        .await
        .map_err(|err| {
            error!("failed to fetch events: {}", err);
            AppError::Internal(err)
        })?;
    Ok(events)
}

use chrono::Utc;
use tracing::{error, info, warn};

use crate::{AppError, AppState};
use backend_domain::{Event, EventId, NewEvent};

/// Creates an Event once the creation guard has accepted it.
pub async fn create_event(state: &AppState, payload: NewEvent) -> Result<Event, AppError> {
    let resolved = match state.event_guard.before_create(&payload).await {
        Ok(resolved) => resolved,
        Err(err) => {
            state.metrics.record_event_rejected();
            warn!("event rejected: {}", err);
            return Err(err);
        }
    };

    let event = Event {
        id: EventId::new(),
        tag: resolved.tag.tag,
        reader: resolved.reader.reader,
        asset_id: resolved.asset.id,
        reader_id: resolved.reader.id,
        created_at: Utc::now().timestamp_millis(),
    };
    if let Err(err) = state.event_repo.insert_event(&event).await {
        state.metrics.record_event_rejected();
        if resolved.reader_changed {
            // the asset move is already committed and is not rolled back
            error!(
                asset = %resolved.asset.id,
                reader = %resolved.reader.id,
                "event insert failed after asset moved to reader: {}",
                err
            );
        }
        return Err(AppError::Internal(err));
    }

    state.metrics.record_event_created(resolved.reader_changed);
    info!(event = %event.id, tag = %event.tag, reader = %event.reader, "event recorded");
    Ok(event)
}

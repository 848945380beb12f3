use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use tracing::warn;

use backend_application::commands::event_commands;
use backend_application::queries::event_queries;
use backend_application::AppState;
use backend_domain::{Event, EventQuery, NewEvent};

use crate::error::HttpError;
use crate::middleware::{authorize, parse_json_body};

pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> Result<(StatusCode, Json<Event>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let payload: NewEvent = parse_json_body(&headers, &body, state.config.max_body_bytes)
        .map_err(|err| {
            warn!("failed to parse event body: {}", err);
            HttpError::BadRequest(err.to_string())
        })?;
    let event = event_commands::create_event(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn list_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EventQuery>,
) -> Result<Json<Vec<Event>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let events = event_queries::list_events(&state, query).await?;
    Ok(Json(events))
}

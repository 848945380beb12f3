use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::warn;

use backend_application::commands::{asset_commands, reader_commands, tag_commands};
use backend_application::queries::record_queries;
use backend_application::AppState;
use backend_domain::{Asset, AssetId, NewAsset, NewReader, NewTag, Reader, ReaderId, Tag, TagId};

use crate::error::HttpError;
use crate::middleware::{authorize, parse_json_body};

fn parse_payload<T: DeserializeOwned>(
    state: &AppState,
    headers: &HeaderMap,
    body: &[u8],
    kind: &str,
) -> Result<T, HttpError> {
    parse_json_body(headers, body, state.config.max_body_bytes).map_err(|err| {
        warn!("failed to parse {} body: {}", kind, err);
        HttpError::BadRequest(err.to_string())
    })
}

pub async fn create_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> Result<(StatusCode, Json<Tag>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let payload: NewTag = parse_payload(&state, &headers, &body, "tag")?;
    let tag = tag_commands::create_tag(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}

pub async fn list_tags(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Tag>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(record_queries::list_tags(&state).await?))
}

pub async fn get_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<TagId>,
) -> Result<Json<Tag>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(record_queries::get_tag(&state, &id).await?))
}

pub async fn create_reader(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> Result<(StatusCode, Json<Reader>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let payload: NewReader = parse_payload(&state, &headers, &body, "reader")?;
    let reader = reader_commands::create_reader(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(reader)))
}

pub async fn list_readers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Reader>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(record_queries::list_readers(&state).await?))
}

pub async fn get_reader(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<ReaderId>,
) -> Result<Json<Reader>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(record_queries::get_reader(&state, &id).await?))
}

pub async fn create_asset(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> Result<(StatusCode, Json<Asset>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let payload: NewAsset = parse_payload(&state, &headers, &body, "asset")?;
    let asset = asset_commands::create_asset(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

pub async fn list_assets(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Asset>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(record_queries::list_assets(&state).await?))
}

pub async fn get_asset(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<AssetId>,
) -> Result<Json<Asset>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(record_queries::get_asset(&state, &id).await?))
}

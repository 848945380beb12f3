use tracing::error;

use crate::{AppError, AppState};
use backend_domain::{Asset, AssetId, Reader, ReaderId, Tag, TagId};

pub async fn list_tags(state: &AppState) -> Result<Vec<Tag>, AppError> {
    let mut tags = state.tag_repo.list_tags().await.map_err(|err| {
        error!("failed to list tags: {}", err);
        AppError::Internal(err)
    })?;
    tags.sort_by(|a, b| a.tag.cmp(&b.tag));
    Ok(tags)
}

pub async fn get_tag(state: &AppState, id: &TagId) -> Result<Tag, AppError> {
    state
        .tag_repo
        .find_tag(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("tag {}", id)))
}

pub async fn list_readers(state: &AppState) -> Result<Vec<Reader>, AppError> {
    let mut readers = state.reader_repo.list_readers().await.map_err(|err| {
        error!("failed to list readers: {}", err);
        AppError::Internal(err)
    })?;
    readers.sort_by(|a, b| a.reader.cmp(&b.reader));
    Ok(readers)
}

pub async fn get_reader(state: &AppState, id: &ReaderId) -> Result<Reader, AppError> {
    state
        .reader_repo
        .find_reader(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("reader {}", id)))
}

pub async fn list_assets(state: &AppState) -> Result<Vec<Asset>, AppError> {
    let mut assets = state.asset_repo.list_assets().await.map_err(|err| {
        error!("failed to list assets: {}", err);
        AppError::Internal(err)
    })?;
    assets.sort_by_key(|asset| asset.created_at);
    Ok(assets)
}

pub async fn get_asset(state: &AppState, id: &AssetId) -> Result<Asset, AppError> {
    state
        .asset_repo
        .find_asset(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("asset {}", id)))
}

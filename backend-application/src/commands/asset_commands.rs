use chrono::Utc;
use tracing::info;

use crate::{AppError, AppState};
use backend_domain::{Asset, AssetId, NewAsset};

pub async fn create_asset(state: &AppState, payload: NewAsset) -> Result<Asset, AppError> {
    let tag = state
        .tag_repo
        .find_tag(&payload.tag_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("tag {}", payload.tag_id)))?;

    let now = Utc::now().timestamp_millis();
    let asset = Asset {
        id: AssetId::new(),
        tag_id: tag.id,
        name: normalize_optional_text(payload.name),
        current_reader_id: None,
        created_at: now,
        updated_at: now,
    };
    state
        .asset_repo
        .insert_asset(&asset)
        .await
        .map_err(AppError::from_insert)?;
    info!(asset = %asset.id, tag = %tag.tag, "asset attached to tag");
    Ok(asset)
}

fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

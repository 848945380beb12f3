use std::sync::Arc;

use tracing::{debug, info, warn};

use backend_domain::ports::{AssetRepository, ReaderRepository, TagRepository};
use backend_domain::{Asset, LookupKey, NewEvent, Reader, ReferenceKind, Tag};

use crate::hooks::KeyedLocks;
use crate::AppError;

/// Records a candidate Event resolved to, plus whether the Asset pointer moved.
#[derive(Debug, Clone)]
pub struct ResolvedEvent {
    pub tag: Tag,
    pub asset: Asset,
    pub reader: Reader,
    pub reader_changed: bool,
}

/// Pre-commit check for Event creation.
///
/// Resolves `tag -> asset` and `reader` and points the Asset at the Reader
/// before the Event itself is written. Calls for the same tag key are
/// serialized; across calls the latest reader wins.
pub struct EventCreationGuard {
    tag_repo: Arc<dyn TagRepository>,
    asset_repo: Arc<dyn AssetRepository>,
    reader_repo: Arc<dyn ReaderRepository>,
    locks: KeyedLocks,
}

impl EventCreationGuard {
    pub fn new(
        tag_repo: Arc<dyn TagRepository>,
        asset_repo: Arc<dyn AssetRepository>,
        reader_repo: Arc<dyn ReaderRepository>,
    ) -> Self {
        Self {
            tag_repo,
            asset_repo,
            reader_repo,
            locks: KeyedLocks::new(),
        }
    }

    pub async fn before_create(&self, values: &NewEvent) -> Result<ResolvedEvent, AppError> {
        let tag_key = LookupKey::from_value("tag", &values.tag)?;
        let reader_key = LookupKey::from_value("reader", &values.reader)?;

        let _serialized = self.locks.lock(tag_key.as_str()).await;

        let tag = self
            .tag_repo
            .find_by_tag(tag_key.as_str())
            .await?
            .ok_or_else(|| AppError::reference_not_found(ReferenceKind::Tag, tag_key.as_str()))?;

        let asset = self
            .asset_repo
            .find_by_tag_id(&tag.id)
            .await?
            .ok_or_else(|| {
                AppError::reference_not_found(ReferenceKind::AssetForTag, tag_key.as_str())
            })?;

        let reader = self
            .reader_repo
            .find_by_reader(reader_key.as_str())
            .await?
            .ok_or_else(|| {
                AppError::reference_not_found(ReferenceKind::Reader, reader_key.as_str())
            })?;

        if asset.is_at_reader(&reader.id) {
            debug!(asset = %asset.id, reader = %reader.id, "asset already at reader");
            return Ok(ResolvedEvent {
                tag,
                asset,
                reader,
                reader_changed: false,
            });
        }

        let mut moved = asset.clone();
        moved.move_to_reader(reader.id, chrono::Utc::now().timestamp_millis());
        if let Err(err) = self.asset_repo.save_asset(&moved).await {
            warn!(asset = %asset.id, "failed to save asset reader update: {}", err);
            return Err(AppError::Persistence(err));
        }
        info!(
            asset = %moved.id,
            from = ?asset.current_reader_id,
            to = %reader.id,
            "asset moved to reader"
        );

        Ok(ResolvedEvent {
            tag,
            asset: moved,
            reader,
            reader_changed: true,
        })
    }
}

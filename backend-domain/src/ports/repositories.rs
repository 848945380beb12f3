use async_trait::async_trait;

use crate::entities::{Asset, Event, Reader, Tag};
use crate::value_objects::{AssetId, ReaderId, TagId};

// Lookups return `Ok(None)` for a missing record; `Err` is reserved for
// storage faults.

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn insert_tag(&self, tag: &Tag) -> anyhow::Result<()>;
    async fn find_by_tag(&self, tag: &str) -> anyhow::Result<Option<Tag>>;
    async fn find_tag(&self, id: &TagId) -> anyhow::Result<Option<Tag>>;
    async fn list_tags(&self) -> anyhow::Result<Vec<Tag>>;
}

#[async_trait]
pub trait AssetRepository: Send + Sync {
    async fn insert_asset(&self, asset: &Asset) -> anyhow::Result<()>;
    async fn find_by_tag_id(&self, tag_id: &TagId) -> anyhow::Result<Option<Asset>>;
    async fn find_asset(&self, id: &AssetId) -> anyhow::Result<Option<Asset>>;
    async fn list_assets(&self) -> anyhow::Result<Vec<Asset>>;
    /// Persists field changes of an existing asset.
    async fn save_asset(&self, asset: &Asset) -> anyhow::Result<()>;
}

#[async_trait]
pub trait ReaderRepository: Send + Sync {
    async fn insert_reader(&self, reader: &Reader) -> anyhow::Result<()>;
    async fn find_by_reader(&self, reader: &str) -> anyhow::Result<Option<Reader>>;
    async fn find_reader(&self, id: &ReaderId) -> anyhow::Result<Option<Reader>>;
    async fn list_readers(&self) -> anyhow::Result<Vec<Reader>>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn insert_event(&self, event: &Event) -> anyhow::Result<()>;
    /// Newest first.
    async fn list_events(&self, tag: Option<&str>, limit: usize) -> anyhow::Result<Vec<Event>>;
    async fn ping(&self) -> anyhow::Result<()>;
}

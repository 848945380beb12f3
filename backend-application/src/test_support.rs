// In-memory fakes of the repository ports for unit tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;

use backend_domain::ports::{
    AssetRepository, EventRepository, HealthCheckService, ReaderRepository, TagRepository,
};
use backend_domain::{
    Asset, AssetId, DuplicateRecord, Event, Reader, ReaderId, RuntimeConfig, Tag, TagId,
};

use crate::{AppState, EventCreationGuard, Metrics};

#[derive(Default)]
pub struct Records {
    tags: Mutex<Vec<Tag>>,
    assets: Mutex<Vec<Asset>>,
    readers: Mutex<Vec<Reader>>,
    events: Mutex<Vec<Event>>,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
    fail_lookups: AtomicBool,
    fail_event_inserts: AtomicBool,
}

impl Records {
    pub fn add_tag(&self, tag: &str) -> Tag {
        let tag = Tag {
            id: TagId::new(),
            tag: tag.to_string(),
            created_at: 0,
        };
        self.tags.lock().unwrap().push(tag.clone());
        tag
    }

    pub fn add_reader(&self, reader: &str) -> Reader {
        let reader = Reader {
            id: ReaderId::new(),
            reader: reader.to_string(),
            created_at: 0,
        };
        self.readers.lock().unwrap().push(reader.clone());
        reader
    }

    pub fn add_asset(&self, tag: &Tag, current_reader_id: Option<ReaderId>) -> Asset {
        let asset = Asset {
            id: AssetId::new(),
            tag_id: tag.id,
            name: None,
            current_reader_id,
            created_at: 0,
            updated_at: 0,
        };
        self.assets.lock().unwrap().push(asset.clone());
        asset
    }

    pub fn asset(&self, id: &AssetId) -> Asset {
        self.assets
            .lock()
            .unwrap()
            .iter()
            .find(|asset| asset.id == *id)
            .cloned()
            .expect("asset exists")
    }

    pub fn assets(&self) -> Vec<Asset> {
        self.assets.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn fail_lookups(&self, fail: bool) {
        self.fail_lookups.store(fail, Ordering::SeqCst);
    }

    pub fn fail_event_inserts(&self, fail: bool) {
        self.fail_event_inserts.store(fail, Ordering::SeqCst);
    }

    fn check_lookup(&self) -> anyhow::Result<()> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(anyhow!("lookup failed: store offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl TagRepository for Records {
    async fn insert_tag(&self, tag: &Tag) -> anyhow::Result<()> {
        let mut tags = self.tags.lock().unwrap();
        if tags.iter().any(|existing| existing.tag == tag.tag) {
            return Err(DuplicateRecord::new("tag", tag.tag.clone()).into());
        }
        tags.push(tag.clone());
        Ok(())
    }

    async fn find_by_tag(&self, tag: &str) -> anyhow::Result<Option<Tag>> {
        self.check_lookup()?;
        Ok(self.tags.lock().unwrap().iter().find(|t| t.tag == tag).cloned())
    }

    async fn find_tag(&self, id: &TagId) -> anyhow::Result<Option<Tag>> {
        self.check_lookup()?;
        Ok(self.tags.lock().unwrap().iter().find(|t| t.id == *id).cloned())
    }

    async fn list_tags(&self) -> anyhow::Result<Vec<Tag>> {
        self.check_lookup()?;
        Ok(self.tags.lock().unwrap().clone())
    }
}

#[async_trait]
impl AssetRepository for Records {
    async fn insert_asset(&self, asset: &Asset) -> anyhow::Result<()> {
        let mut assets = self.assets.lock().unwrap();
        if assets.iter().any(|existing| existing.tag_id == asset.tag_id) {
            return Err(DuplicateRecord::new("asset for tag", asset.tag_id.to_string()).into());
        }
        assets.push(asset.clone());
        Ok(())
    }

    async fn find_by_tag_id(&self, tag_id: &TagId) -> anyhow::Result<Option<Asset>> {
        self.check_lookup()?;
        Ok(self
            .assets
            .lock()
            .unwrap()
            .iter()
            .find(|asset| asset.tag_id == *tag_id)
            .cloned())
    }

    async fn find_asset(&self, id: &AssetId) -> anyhow::Result<Option<Asset>> {
        self.check_lookup()?;
        Ok(self.assets.lock().unwrap().iter().find(|a| a.id == *id).cloned())
    }

    async fn list_assets(&self) -> anyhow::Result<Vec<Asset>> {
        self.check_lookup()?;
        Ok(self.assets())
    }

    async fn save_asset(&self, asset: &Asset) -> anyhow::Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(anyhow!("simulated storage fault"));
        }
        let mut assets = self.assets.lock().unwrap();
        let slot = assets
            .iter_mut()
            .find(|existing| existing.id == asset.id)
            .ok_or_else(|| anyhow!("asset {} not found", asset.id))?;
        *slot = asset.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl ReaderRepository for Records {
    async fn insert_reader(&self, reader: &Reader) -> anyhow::Result<()> {
        let mut readers = self.readers.lock().unwrap();
        if readers.iter().any(|existing| existing.reader == reader.reader) {
            return Err(DuplicateRecord::new("reader", reader.reader.clone()).into());
        }
        readers.push(reader.clone());
        Ok(())
    }

    async fn find_by_reader(&self, reader: &str) -> anyhow::Result<Option<Reader>> {
        self.check_lookup()?;
        Ok(self
            .readers
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.reader == reader)
            .cloned())
    }

    async fn find_reader(&self, id: &ReaderId) -> anyhow::Result<Option<Reader>> {
        self.check_lookup()?;
        Ok(self.readers.lock().unwrap().iter().find(|r| r.id == *id).cloned())
    }

    async fn list_readers(&self) -> anyhow::Result<Vec<Reader>> {
        self.check_lookup()?;
        Ok(self.readers.lock().unwrap().clone())
    }
}

#[async_trait]
impl EventRepository for Records {
    async fn insert_event(&self, event: &Event) -> anyhow::Result<()> {
        if self.fail_event_inserts.load(Ordering::SeqCst) {
            return Err(anyhow!("event log unavailable"));
        }
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn list_events(&self, tag: Option<&str>, limit: usize) -> anyhow::Result<Vec<Event>> {
        self.check_lookup()?;
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|event| tag.map(|t| event.tag == t).unwrap_or(true))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.check_lookup()
    }
}

#[async_trait]
impl HealthCheckService for Records {
    async fn check_store(&self) -> anyhow::Result<bool> {
        self.ping().await.map(|_| true)
    }
}

pub fn app_state(records: &Arc<Records>) -> AppState {
    AppState {
        config: RuntimeConfig::default(),
        tag_repo: records.clone(),
        asset_repo: records.clone(),
        reader_repo: records.clone(),
        event_repo: records.clone(),
        health_service: records.clone(),
        event_guard: Arc::new(EventCreationGuard::new(
            records.clone(),
            records.clone(),
            records.clone(),
        )),
        metrics: Arc::new(Metrics::default()),
    }
}

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use backend_domain::ports::{AssetRepository, EventRepository, ReaderRepository, TagRepository};
use backend_domain::{
    Asset, AssetId, DuplicateRecord, Event, Reader, ReaderId, StoreConfig, Tag, TagId,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Snapshot {
    #[serde(default)]
    tags: Vec<Tag>,
    #[serde(default)]
    assets: Vec<Asset>,
    #[serde(default)]
    readers: Vec<Reader>,
}

/// Record store kept in memory and mirrored to disk.
///
/// Tags, assets and readers live in a JSON snapshot file. A mutation is
/// applied to a copy of the snapshot, written to disk, and only then swapped
/// in; a failed write leaves the in-memory records unchanged.
///
/// Events go to an append-only JSON lines log next to the snapshot, one line
/// per event, under their own lock so guard lookups never wait on it.
pub struct JsonFileStore {
    path: Option<PathBuf>,
    records: RwLock<Snapshot>,
    events: RwLock<Vec<Event>>,
}

impl JsonFileStore {
    pub fn in_memory() -> Self {
        Self {
            path: None,
            records: RwLock::new(Snapshot::default()),
            events: RwLock::new(Vec::new()),
        }
    }

    pub async fn open(config: &StoreConfig) -> anyhow::Result<Self> {
        let Some(path) = config.data_path.as_deref() else {
            info!("no data_path configured, records are kept in memory");
            return Ok(Self::in_memory());
        };
        let path = PathBuf::from(path);
        let snapshot: Snapshot = if path.exists() {
            let content = fs::read_to_string(&path)
                .await
                .with_context(|| format!("read store snapshot {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("parse store snapshot {}", path.display()))?
        } else {
            Snapshot::default()
        };
        let events = read_event_log(&event_log_path(&path)).await?;
        info!(
            path = %path.display(),
            tags = snapshot.tags.len(),
            assets = snapshot.assets.len(),
            readers = snapshot.readers.len(),
            events = events.len(),
            "record store opened"
        );
        Ok(Self {
            path: Some(path),
            records: RwLock::new(snapshot),
            events: RwLock::new(events),
        })
    }

    async fn commit<F>(&self, mutate: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Snapshot) -> anyhow::Result<()> + Send,
    {
        let mut records = self.records.write().await;
        let mut next = records.clone();
        mutate(&mut next)?;
        if let Some(path) = &self.path {
            write_snapshot(path, &next).await?;
        }
        *records = next;
        Ok(())
    }
}

fn event_log_path(snapshot: &Path) -> PathBuf {
    snapshot.with_extension("events.jsonl")
}

async fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    Ok(())
}

async fn write_snapshot(path: &Path, snapshot: &Snapshot) -> anyhow::Result<()> {
    ensure_parent(path).await?;
    let content = serde_json::to_string(snapshot)?;
    let staging = path.with_extension("json.tmp");
    fs::write(&staging, content)
        .await
        .with_context(|| format!("write store snapshot {}", staging.display()))?;
    fs::rename(&staging, path)
        .await
        .with_context(|| format!("replace store snapshot {}", path.display()))?;
    debug!(path = %path.display(), "store snapshot written");
    Ok(())
}

async fn append_event(path: &Path, event: &Event) -> anyhow::Result<()> {
    ensure_parent(path).await?;
    let mut line = serde_json::to_vec(event)?;
    line.push(b'\n');
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .with_context(|| format!("open event log {}", path.display()))?;
    file.write_all(&line)
        .await
        .with_context(|| format!("append to event log {}", path.display()))?;
    file.flush().await?;
    Ok(())
}

async fn read_event_log(path: &Path) -> anyhow::Result<Vec<Event>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("read event log {}", path.display()))?;
    let lines: Vec<&str> = content.lines().filter(|line| !line.trim().is_empty()).collect();
    let mut events = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        match serde_json::from_str::<Event>(line) {
            Ok(event) => events.push(event),
            // a torn final line is what an interrupted append leaves behind
            Err(err) if index + 1 == lines.len() => {
                warn!(path = %path.display(), "skipping truncated event log tail: {}", err);
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("parse event log {} line {}", path.display(), index + 1)
                });
            }
        }
    }
    Ok(events)
}

#[async_trait]
impl TagRepository for JsonFileStore {
    async fn insert_tag(&self, tag: &Tag) -> anyhow::Result<()> {
        let tag = tag.clone();
        self.commit(move |records| {
            if records.tags.iter().any(|existing| existing.tag == tag.tag) {
                return Err(DuplicateRecord::new("tag", tag.tag).into());
            }
            records.tags.push(tag);
            Ok(())
        })
        .await
    }

    async fn find_by_tag(&self, tag: &str) -> anyhow::Result<Option<Tag>> {
        let records = self.records.read().await;
        Ok(records.tags.iter().find(|existing| existing.tag == tag).cloned())
    }

    async fn find_tag(&self, id: &TagId) -> anyhow::Result<Option<Tag>> {
        let records = self.records.read().await;
        Ok(records.tags.iter().find(|existing| existing.id == *id).cloned())
    }

    async fn list_tags(&self) -> anyhow::Result<Vec<Tag>> {
        Ok(self.records.read().await.tags.clone())
    }
}

#[async_trait]
impl AssetRepository for JsonFileStore {
    async fn insert_asset(&self, asset: &Asset) -> anyhow::Result<()> {
        let asset = asset.clone();
        self.commit(move |records| {
            if !records.tags.iter().any(|tag| tag.id == asset.tag_id) {
                return Err(anyhow!("tag {} does not exist", asset.tag_id));
            }
            if records.assets.iter().any(|existing| existing.tag_id == asset.tag_id) {
                return Err(DuplicateRecord::new("asset for tag", asset.tag_id.to_string()).into());
            }
            records.assets.push(asset);
            Ok(())
        })
        .await
    }

    async fn find_by_tag_id(&self, tag_id: &TagId) -> anyhow::Result<Option<Asset>> {
        let records = self.records.read().await;
        Ok(records
            .assets
            .iter()
            .find(|asset| asset.tag_id == *tag_id)
            .cloned())
    }

    async fn find_asset(&self, id: &AssetId) -> anyhow::Result<Option<Asset>> {
        let records = self.records.read().await;
        Ok(records.assets.iter().find(|asset| asset.id == *id).cloned())
    }

    async fn list_assets(&self) -> anyhow::Result<Vec<Asset>> {
        Ok(self.records.read().await.assets.clone())
    }

    async fn save_asset(&self, asset: &Asset) -> anyhow::Result<()> {
        let asset = asset.clone();
        self.commit(move |records| {
            let slot = records
                .assets
                .iter_mut()
                .find(|existing| existing.id == asset.id)
                .ok_or_else(|| anyhow!("asset {} does not exist", asset.id))?;
            *slot = asset;
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl ReaderRepository for JsonFileStore {
    async fn insert_reader(&self, reader: &Reader) -> anyhow::Result<()> {
        let reader = reader.clone();
        self.commit(move |records| {
            if records
                .readers
                .iter()
                .any(|existing| existing.reader == reader.reader)
            {
                return Err(DuplicateRecord::new("reader", reader.reader).into());
            }
            records.readers.push(reader);
            Ok(())
        })
        .await
    }

    async fn find_by_reader(&self, reader: &str) -> anyhow::Result<Option<Reader>> {
        let records = self.records.read().await;
        Ok(records
            .readers
            .iter()
            .find(|existing| existing.reader == reader)
            .cloned())
    }

    async fn find_reader(&self, id: &ReaderId) -> anyhow::Result<Option<Reader>> {
        let records = self.records.read().await;
        Ok(records.readers.iter().find(|existing| existing.id == *id).cloned())
    }

    async fn list_readers(&self) -> anyhow::Result<Vec<Reader>> {
        Ok(self.records.read().await.readers.clone())
    }
}

#[async_trait]
impl EventRepository for JsonFileStore {
    async fn insert_event(&self, event: &Event) -> anyhow::Result<()> {
        let mut events = self.events.write().await;
        if let Some(path) = &self.path {
            append_event(&event_log_path(path), event).await?;
        }
        events.push(event.clone());
        Ok(())
    }

    async fn list_events(&self, tag: Option<&str>, limit: usize) -> anyhow::Result<Vec<Event>> {
        let events = self.events.read().await;
        Ok(events
            .iter()
            .rev()
            .filter(|event| tag.map(|wanted| event.tag == wanted).unwrap_or(true))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(anyhow!("store directory {} is missing", parent.display()));
                }
            }
        }
        Ok(())
    }
}

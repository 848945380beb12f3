use std::sync::Arc;

use backend_domain::ports::{
    AssetRepository, EventRepository, HealthCheckService, ReaderRepository, TagRepository,
};
use backend_domain::RuntimeConfig;

use crate::{EventCreationGuard, Metrics};

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub tag_repo: Arc<dyn TagRepository>,
    pub asset_repo: Arc<dyn AssetRepository>,
    pub reader_repo: Arc<dyn ReaderRepository>,
    pub event_repo: Arc<dyn EventRepository>,
    pub health_service: Arc<dyn HealthCheckService>,
    pub event_guard: Arc<EventCreationGuard>,
    pub metrics: Arc<Metrics>,
}

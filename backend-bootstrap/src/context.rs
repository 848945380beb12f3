use std::sync::Arc;

use anyhow::Result;

use backend_application::{AppState, EventCreationGuard, Metrics};
use backend_infrastructure::{AppConfig, DefaultHealthService, JsonFileStore};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        Self::from_config(&config).await
    }

    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let store = Arc::new(JsonFileStore::open(&config.to_store_config()).await?);

        let event_guard = Arc::new(EventCreationGuard::new(
            store.clone(),
            store.clone(),
            store.clone(),
        ));

        let state = AppState {
            config: runtime_config,
            tag_repo: store.clone(),
            asset_repo: store.clone(),
            reader_repo: store.clone(),
            event_repo: store.clone(),
            health_service: Arc::new(DefaultHealthService::new(store)),
            event_guard,
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_only_context_is_ready() {
        let config = AppConfig {
            data_path: String::new(),
            ..AppConfig::default()
        };
        let context = AppContext::from_config(&config).await.expect("context");
        assert!(context
            .state
            .health_service
            .check_store()
            .await
            .expect("store check"));
        assert!(context.state.tag_repo.list_tags().await.expect("tags").is_empty());
    }
}

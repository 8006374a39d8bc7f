use std::sync::Arc;

use tokio::sync::Mutex;

use business::application::inventory::dispatcher::EventDispatcher;
use business::application::inventory::store::InventoryStore;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;
use logger::TracingLogger;

use crate::api::health::routes::HealthApi;
use crate::api::inventory::routes::InventoryApi;
use crate::api::page::routes::PageApi;
use crate::config::{app_config::AppConfig, storage_config};

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub inventory_api: InventoryApi,
    pub page_api: PageApi,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let repository = storage_config::init_repository(&config.storage);
        Self::with_repository(repository, &config.currency_symbol).await
    }

    /// Loads the inventory from `repository`; fails if the slot is corrupted.
    pub async fn with_repository(
        repository: Arc<dyn ProductRepository>,
        currency_symbol: &str,
    ) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        let store = InventoryStore::load(repository, logger.clone(), currency_symbol).await?;
        let store = Arc::new(Mutex::new(store));
        let dispatcher = Arc::new(EventDispatcher::new(logger));

        Ok(Self {
            health_api: HealthApi::new(store.clone()),
            inventory_api: InventoryApi::new(store, dispatcher),
            page_api: PageApi::new(),
        })
    }
}

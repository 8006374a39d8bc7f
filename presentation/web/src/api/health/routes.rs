use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use business::application::inventory::store::InventoryStore;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Number of stored products
    pub products: u64,
}

/// Liveness endpoint for process supervisors and load balancers.
pub struct HealthApi {
    store: Arc<Mutex<InventoryStore>>,
}

impl HealthApi {
    pub fn new(store: Arc<Mutex<InventoryStore>>) -> Self {
        Self { store }
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// ## Response
    /// - `status`: "healthy" if service is running
    /// - `timestamp`: Current server timestamp in ISO 8601 format
    /// - `version`: Service version from Cargo.toml
    /// - `products`: Records currently held by the inventory
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let products = self.store.lock().await.products().len() as u64;
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            products,
        })
    }
}

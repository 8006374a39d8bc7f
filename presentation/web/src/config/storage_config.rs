use std::env;
use std::sync::Arc;

use persistence::product::repository::ProductRepositoryKeyValue;
use persistence::storage::{FileKeyValueStore, StorageConfig};

const DEFAULT_STORAGE_PATH: &str = "inventory.json";

/// Reads the storage slot location from the environment
///
/// Environment variables:
/// - INVENTORY_STORAGE_PATH: JSON file holding the slots (default: "inventory.json")
/// - INVENTORY_STORAGE_KEY: key of the product list (default: "inventory-products")
pub fn from_env() -> StorageConfig {
    from_lookup(|name| env::var(name).ok())
}

pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> StorageConfig {
    let path = lookup("INVENTORY_STORAGE_PATH")
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_STORAGE_PATH.to_string());
    let config = StorageConfig::new(path);

    match lookup("INVENTORY_STORAGE_KEY").filter(|k| !k.trim().is_empty()) {
        Some(key) => config.with_key(key),
        None => config,
    }
}

/// Builds the file-backed product repository for the configured slot
pub fn init_repository(config: &StorageConfig) -> Arc<ProductRepositoryKeyValue> {
    tracing::info!(
        path = %config.path.display(),
        key = %config.key,
        "using file storage"
    );
    let store = Arc::new(FileKeyValueStore::new(&config.path));
    Arc::new(ProductRepositoryKeyValue::new(store, config.key.clone()))
}

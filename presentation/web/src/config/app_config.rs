use std::env;

use business::domain::inventory::view::DEFAULT_CURRENCY_SYMBOL;
use persistence::storage::StorageConfig;

use super::{server_config::ServerConfig, storage_config};

pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    /// Prefix for displayed prices (INVENTORY_CURRENCY_SYMBOL, default "$")
    pub currency_symbol: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            storage: storage_config::from_env(),
            currency_symbol: env::var("INVENTORY_CURRENCY_SYMBOL")
                .unwrap_or_else(|_| DEFAULT_CURRENCY_SYMBOL.to_string()),
        }
    }
}

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use crate::storage::KeyValueStore;

use super::entity::ProductEntity;

/// Keeps the whole product list as one JSON array under a single key.
pub struct ProductRepositoryKeyValue {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl ProductRepositoryKeyValue {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

/// Parses the slot contents. A value that is not a JSON array is rejected as a
/// whole; individual bad or duplicated entries are skipped.
pub fn decode_products(raw: &str) -> Result<Vec<Product>, RepositoryError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw).map_err(|e| {
        tracing::error!(error = %e, "stored product list is not a JSON array");
        RepositoryError::Corrupted
    })?;

    let mut seen = HashSet::new();
    let mut products = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let product = match serde_json::from_value::<ProductEntity>(value)
            .map_err(|e| e.to_string())
            .and_then(|entity| entity.into_domain().map_err(|e| e.to_string()))
        {
            Ok(product) => product,
            Err(reason) => {
                tracing::warn!(index, %reason, "skipping malformed stored product");
                continue;
            }
        };

        if !seen.insert(product.id.clone()) {
            tracing::warn!(index, id = %product.id, "skipping stored product with duplicate id");
            continue;
        }
        products.push(product);
    }

    Ok(products)
}

pub fn encode_products(products: &[Product]) -> Result<String, RepositoryError> {
    let entities: Vec<ProductEntity> = products.iter().map(ProductEntity::from_domain).collect();
    serde_json::to_string(&entities).map_err(|_| RepositoryError::Persistence)
}

#[async_trait]
impl ProductRepository for ProductRepositoryKeyValue {
    async fn load_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let raw = self.store.get(&self.key).map_err(|e| {
            tracing::error!(error = %e, key = %self.key, "failed to read product list");
            RepositoryError::Persistence
        })?;

        match raw {
            Some(raw) => decode_products(&raw),
            None => Ok(Vec::new()),
        }
    }

    async fn replace_all(&self, products: &[Product]) -> Result<(), RepositoryError> {
        let raw = encode_products(products)?;
        self.store.set(&self.key, &raw).map_err(|e| {
            tracing::error!(error = %e, key = %self.key, "failed to write product list");
            RepositoryError::Persistence
        })
    }
}

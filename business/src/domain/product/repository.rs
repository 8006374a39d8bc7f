use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Whole-list persistence. The slot is a mirror of the in-memory list and is
/// always rewritten in full; there are no per-record writes.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn load_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn replace_all(&self, products: &[Product]) -> Result<(), RepositoryError>;
}

use crate::domain::errors::RepositoryError;
use crate::domain::product::errors::ProductError;

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("{0}")]
    Validation(#[from] ProductError),
    #[error("{0}")]
    Repository(#[from] RepositoryError),
}

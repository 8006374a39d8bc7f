/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The slot could not be read or written.
    #[error("repository.persistence")]
    Persistence,
    /// The slot holds something that is not a product list.
    #[error("repository.corrupted")]
    Corrupted,
}

impl RepositoryError {
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
    pub fn corrupted() -> Self {
        RepositoryError::Corrupted
    }
}

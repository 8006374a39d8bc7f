use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::inventory::errors::InventoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for InventoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            InventoryError::Validation(_) => StatusCode::BAD_REQUEST,
            InventoryError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let name = match &self {
            InventoryError::Validation(_) => "ValidationError",
            InventoryError::Repository(RepositoryError::Corrupted) => "CorruptedStorage",
            InventoryError::Repository(RepositoryError::Persistence) => "InternalError",
        };

        (status, Json(ErrorResponse::new(name, self.to_string())))
    }
}

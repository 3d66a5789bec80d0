// handlers/address/delete.rs - DELETE /address/:id handler
use axum::{extract::Path, http::StatusCode};

use crate::database::manager::DatabaseManager;
use crate::database::repository::AddressRepository;
use crate::error::ApiError;

/// DELETE /address/:id - Delete an address
///
/// 204 with an empty body on success; deleting an id that was never created
/// (or is already gone) is a 404.
pub async fn address_delete(Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let repo = AddressRepository::new(DatabaseManager::pool().await?);

    let deleted = repo.delete_by_id(id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("Address not found"));
    }

    tracing::info!(id, "deleted address");
    Ok(StatusCode::NO_CONTENT)
}

// handlers/address/update.rs - PATCH /address/:id handler
use axum::{extract::Path, response::Json};

use crate::api::contracts::AddressUpdate;
use crate::database::manager::DatabaseManager;
use crate::database::models::Address;
use crate::database::repository::AddressRepository;
use crate::error::ApiError;

/// PATCH /address/:id - Partially update an address
///
/// Only fields present in the payload change; the stored geometry follows
/// the coordinates automatically.
pub async fn address_update(
    Path(id): Path<i64>,
    Json(changes): Json<AddressUpdate>,
) -> Result<Json<Address>, ApiError> {
    let repo = AddressRepository::new(DatabaseManager::pool().await?);

    match repo.update_by_id(id, &changes).await? {
        Some(updated) => Ok(Json(updated)),
        None => Err(ApiError::not_found("Address not found")),
    }
}

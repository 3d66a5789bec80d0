// handlers/address/show.rs - GET /address/:id handler
use axum::{extract::Path, response::Json};

use crate::database::manager::DatabaseManager;
use crate::database::models::Address;
use crate::database::repository::AddressRepository;
use crate::error::ApiError;

/// GET /address/:id - Get an address by id
pub async fn address_show(Path(id): Path<i64>) -> Result<Json<Address>, ApiError> {
    let repo = AddressRepository::new(DatabaseManager::pool().await?);

    match repo.find_by_id(id).await? {
        Some(found) => Ok(Json(found)),
        None => Err(ApiError::not_found("Address not found")),
    }
}

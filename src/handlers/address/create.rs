// handlers/address/create.rs - POST /address/ handler
use axum::{http::StatusCode, response::Json};

use crate::api::contracts::AddressCreate;
use crate::database::manager::DatabaseManager;
use crate::database::models::Address;
use crate::database::repository::AddressRepository;
use crate::error::ApiError;

/// POST /address/ - Create an address
///
/// A missing or mistyped field never reaches this function: the JSON
/// extractor rejects it with 422 first.
pub async fn address_create(
    Json(payload): Json<AddressCreate>,
) -> Result<(StatusCode, Json<Address>), ApiError> {
    let repo = AddressRepository::new(DatabaseManager::pool().await?);
    let created = repo.create(&payload).await?;

    tracing::info!(id = created.id, "created address");
    Ok((StatusCode::CREATED, Json(created)))
}

// handlers/address/list.rs - GET /address/ handler
use axum::{extract::Query, response::Json};

use crate::api::contracts::ListQuery;
use crate::database::manager::DatabaseManager;
use crate::database::models::Address;
use crate::database::repository::AddressRepository;
use crate::error::ApiError;

/// GET /address/ - List addresses
///
/// With `distance`, `latitude` and `longitude` supplied this becomes a
/// radius search around the given point (distance in degrees, see
/// `AddressFind`); with none of them it is a plain paginated listing. A
/// partial filter is rejected with 422.
pub async fn address_list(Query(query): Query<ListQuery>) -> Result<Json<Vec<Address>>, ApiError> {
    let page = query.pagination();
    let repo = AddressRepository::new(DatabaseManager::pool().await?);

    let rows = match query.radius_filter()? {
        Some(find) => repo.find_within_distance(&find, page).await?,
        None => repo.list(page).await?,
    };

    Ok(Json(rows))
}

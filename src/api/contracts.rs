// Wire-format contracts for the /address API
use serde::Deserialize;
use std::collections::HashMap;

use crate::config::{DEFAULT_LIMIT, DEFAULT_SKIP};
use crate::error::ApiError;

/// Body of POST /address/. All fields required; a missing field is rejected
/// by the JSON extractor before any handler code runs.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressCreate {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Body of PATCH /address/:id - every field optional.
///
/// A field absent from the payload leaves the stored value untouched, while
/// an explicit `0.0` or `""` is a real value to write. An explicit JSON
/// `null` behaves like an absent field: no column of this entity is
/// nullable, so there is nothing a null could clear.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressUpdate {
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Radius filter for GET /address/.
///
/// `distance` is expressed in the native units of the coordinate reference
/// system - degrees under SRID 4326 - NOT meters. This mirrors the stored
/// geometry's CRS and is deliberate; callers wanting meters must convert.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddressFind {
    pub distance: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Resolved pagination window. `skip`/`limit` deserialize as unsigned so a
/// negative query value is rejected at the extractor.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub skip: i64,
    pub limit: i64,
}

/// Query string of GET /address/: pagination plus the optional radius filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
    pub distance: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            skip: clamp_to_i64(self.skip.unwrap_or(DEFAULT_SKIP)),
            limit: clamp_to_i64(self.limit.unwrap_or(DEFAULT_LIMIT)),
        }
    }

    /// The radius filter is all-or-nothing: either every field of
    /// `AddressFind` is present, or none is. A strict subset is a
    /// validation error naming the missing fields.
    pub fn radius_filter(&self) -> Result<Option<AddressFind>, ApiError> {
        match (self.distance, self.latitude, self.longitude) {
            (None, None, None) => Ok(None),
            (Some(distance), Some(latitude), Some(longitude)) => Ok(Some(AddressFind {
                distance,
                latitude,
                longitude,
            })),
            _ => {
                let mut field_errors = HashMap::new();
                for (field, present) in [
                    ("distance", self.distance.is_some()),
                    ("latitude", self.latitude.is_some()),
                    ("longitude", self.longitude.is_some()),
                ] {
                    if !present {
                        field_errors
                            .insert(field.to_string(), "This field is required".to_string());
                    }
                }
                Err(ApiError::unprocessable_entity(
                    "Incomplete radius filter: distance, latitude and longitude must be supplied together",
                    field_errors,
                ))
            }
        }
    }
}

fn clamp_to_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

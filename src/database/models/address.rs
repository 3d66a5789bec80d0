use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored address row. The table also carries a `geo` point column
/// (generated by the database from `longitude`/`latitude`); it is internal
/// to radius queries and deliberately absent here so it never reaches the
/// wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Address {
    pub id: i64,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

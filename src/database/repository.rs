use sqlx::PgPool;

use crate::api::contracts::{AddressCreate, AddressFind, AddressUpdate, Pagination};
use crate::config::SRID;
use crate::database::manager::DatabaseError;
use crate::database::models::Address;

const COLUMNS: &str = "id, address, latitude, longitude";

/// Stateless data access for address rows, parameterized by the shared pool.
///
/// Every operation is a single SQL statement and therefore its own implicit
/// transaction. "Not found" is an `Option`/count, never an error.
pub struct AddressRepository {
    pool: PgPool,
}

impl AddressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates an address. The geometry column is generated by the database
    /// from the coordinate pair, so nothing spatial is bound here.
    pub async fn create(&self, new: &AddressCreate) -> Result<Address, DatabaseError> {
        let sql = format!(
            "INSERT INTO addresses (address, latitude, longitude)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );

        let created = sqlx::query_as::<_, Address>(&sql)
            .bind(&new.address)
            .bind(new.latitude)
            .bind(new.longitude)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    /// Returns a page of addresses ordered by id.
    pub async fn list(&self, page: Pagination) -> Result<Vec<Address>, DatabaseError> {
        let sql = format!("SELECT {COLUMNS} FROM addresses ORDER BY id OFFSET $1 LIMIT $2");

        let rows = sqlx::query_as::<_, Address>(&sql)
            .bind(page.skip)
            .bind(page.limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Returns addresses whose stored geometry lies within `find.distance`
    /// of the given center, with the same pagination as `list`.
    ///
    /// `ST_Distance` on geometry compares in the units of the coordinate
    /// reference system: under SRID 4326 the threshold is in degrees, not
    /// meters.
    pub async fn find_within_distance(
        &self,
        find: &AddressFind,
        page: Pagination,
    ) -> Result<Vec<Address>, DatabaseError> {
        // POINT(long lat) - longitude binds first
        let rows = sqlx::query_as::<_, Address>(&Self::within_distance_sql())
            .bind(find.longitude)
            .bind(find.latitude)
            .bind(find.distance)
            .bind(page.skip)
            .bind(page.limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    fn within_distance_sql() -> String {
        format!(
            "SELECT {COLUMNS} FROM addresses
             WHERE ST_Distance(geo, ST_SetSRID(ST_MakePoint($1, $2), {srid})) <= $3
             ORDER BY id
             OFFSET $4 LIMIT $5",
            srid = SRID
        )
    }

    /// Returns the address with the given id, or None.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Address>, DatabaseError> {
        let sql = format!("SELECT {COLUMNS} FROM addresses WHERE id = $1");

        let row = sqlx::query_as::<_, Address>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Partially updates an address. Absent fields keep their stored value;
    /// the database regenerates the geometry whenever either coordinate
    /// changes. Returns None if no row matched the id.
    pub async fn update_by_id(
        &self,
        id: i64,
        changes: &AddressUpdate,
    ) -> Result<Option<Address>, DatabaseError> {
        let sql = format!(
            "UPDATE addresses
             SET address = COALESCE($2, address),
                 latitude = COALESCE($3, latitude),
                 longitude = COALESCE($4, longitude)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );

        let updated = sqlx::query_as::<_, Address>(&sql)
            .bind(id)
            .bind(changes.address.as_deref())
            .bind(changes.latitude)
            .bind(changes.longitude)
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    /// Deletes the address with the given id, returning how many rows were
    /// removed (0 or 1).
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

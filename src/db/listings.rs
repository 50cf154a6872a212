use crate::db::connection::Database;
use crate::domain::listing::Listing;
use crate::errors::ServerError;

const SQL_ALL_PROPERTIES: &str = include_str!("../../sql/all_properties.sql");

/// Full scan of the `properties` table. The caller gets the whole table and
/// filters in memory; nothing is narrowed or sorted at this layer.
pub fn load_listings(db: &Database) -> Result<Vec<Listing>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(SQL_ALL_PROPERTIES)
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Listing {
                    name: row.get(0)?,
                    address: row.get(1)?,
                    age: row.get(2)?,
                    rent: row.get(3)?,
                    management_fee: row.get(4)?,
                    layout: row.get(5)?,
                    area: row.get(6)?,
                    station1: row.get(7)?,
                    station2: row.get(8)?,
                    station3: row.get(9)?,
                    walk1: row.get(10)?,
                    walk2: row.get(11)?,
                    walk3: row.get(12)?,
                    photo_url: row.get(13)?,
                    floorplan_url: row.get(14)?,
                    detail_url: row.get(15)?,
                })
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
        }

        Ok(results)
    })
}

/// Startup check: the store must exist and carry the `properties` table.
/// Returns the row count so main can print it.
pub fn probe_store(db: &Database) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare("SELECT COUNT(*) FROM properties")
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut rows = stmt
            .query([])
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let row = rows
            .next()
            .map_err(|e| ServerError::DbError(e.to_string()))?
            .ok_or_else(|| ServerError::DbError("No rows".into()))?;

        row.get(0).map_err(|e| ServerError::DbError(e.to_string()))
    })
}

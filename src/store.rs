//! The resource store: CRUD over the `plants` table.

use crate::error::AppError;
use crate::model::{NewPlant, Plant, PlantPatch};
use sqlx::SqlitePool;

const PLANT_COLUMNS: &str = "id, name, image, price, is_in_stock";

/// Handle on the plants table. Cheap to clone; the pool inside is shared
/// across all concurrent requests. SQLite's own locking serializes writers,
/// no additional coordination happens here.
#[derive(Clone)]
pub struct PlantStore {
    pool: SqlitePool,
}

impl PlantStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Every row, in insertion (id) order.
    pub async fn list_all(&self) -> Result<Vec<Plant>, AppError> {
        tracing::debug!("list plants");
        let plants = sqlx::query_as::<_, Plant>(&format!(
            "SELECT {} FROM plants ORDER BY id",
            PLANT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(plants)
    }

    /// Lookup by primary key. `None` when no row matches.
    pub async fn get(&self, id: i64) -> Result<Option<Plant>, AppError> {
        tracing::debug!(id, "get plant");
        let plant = sqlx::query_as::<_, Plant>(&format!(
            "SELECT {} FROM plants WHERE id = ?",
            PLANT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(plant)
    }

    /// Insert a validated plant and return the stored row with its
    /// generated id.
    pub async fn create(&self, new: &NewPlant) -> Result<Plant, AppError> {
        tracing::debug!(name = %new.name, "create plant");
        let plant = sqlx::query_as::<_, Plant>(&format!(
            "INSERT INTO plants (name, image, price, is_in_stock) \
             VALUES (?, ?, ?, ?) RETURNING {}",
            PLANT_COLUMNS
        ))
        .bind(&new.name)
        .bind(&new.image)
        .bind(new.price)
        .bind(new.is_in_stock)
        .fetch_one(&self.pool)
        .await?;
        Ok(plant)
    }

    /// Overwrite only the fields present in the patch. `None` when the id
    /// does not exist.
    pub async fn update(&self, id: i64, patch: &PlantPatch) -> Result<Option<Plant>, AppError> {
        tracing::debug!(id, "update plant");
        let plant = sqlx::query_as::<_, Plant>(&format!(
            "UPDATE plants SET \
                name = COALESCE(?, name), \
                image = COALESCE(?, image), \
                price = COALESCE(?, price), \
                is_in_stock = COALESCE(?, is_in_stock) \
             WHERE id = ? RETURNING {}",
            PLANT_COLUMNS
        ))
        .bind(&patch.name)
        .bind(&patch.image)
        .bind(patch.price)
        .bind(patch.is_in_stock)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(plant)
    }

    /// Hard delete. `false` when the id does not exist.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        tracing::debug!(id, "delete plant");
        let result = sqlx::query("DELETE FROM plants WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

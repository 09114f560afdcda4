//! Diesel-backed snack catalogue reads.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Snack;
use crate::domain::ports::{SnackCatalogue, StoreError};

use super::models::SnackRow;
use super::pool::{DbPool, PoolError};
use super::schema::snacks;

/// Diesel implementation of the [`SnackCatalogue`] port.
#[derive(Clone)]
pub struct DieselSnackCatalogue {
    pool: DbPool,
}

impl DieselSnackCatalogue {
    /// Create a new catalogue adapter over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> StoreError {
    StoreError::connection(error.to_string())
}

fn map_diesel_error(error: diesel::result::Error) -> StoreError {
    StoreError::query(format!("snack listing failed: {error}"))
}

#[async_trait]
impl SnackCatalogue for DieselSnackCatalogue {
    async fn list_snacks(&self) -> Result<Vec<Snack>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Ordered by id so back-to-back reads observe the same sequence.
        let rows: Vec<SnackRow> = snacks::table
            .select(SnackRow::as_select())
            .order_by(snacks::id)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Snack::from).collect())
    }
}

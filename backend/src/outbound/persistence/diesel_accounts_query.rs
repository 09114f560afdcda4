//! Diesel-backed identity lookup over the `accounts` relation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::AccountId;
use crate::domain::ports::{AccountsQuery, StoreError};

use super::models::AccountNameRow;
use super::pool::{DbPool, PoolError};
use super::schema::accounts;

/// Diesel implementation of the [`AccountsQuery`] port.
#[derive(Clone)]
pub struct DieselAccountsQuery {
    pool: DbPool,
}

impl DieselAccountsQuery {
    /// Create a new query adapter over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> StoreError {
    StoreError::connection(error.to_string())
}

fn map_diesel_error(error: diesel::result::Error) -> StoreError {
    StoreError::query(format!("account lookup failed: {error}"))
}

#[async_trait]
impl AccountsQuery for DieselAccountsQuery {
    async fn find_display_name(&self, id: AccountId) -> Result<Option<String>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<AccountNameRow> = accounts::table
            .filter(accounts::userid.eq(id.get()))
            .select(AccountNameRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(|row| row.name))
    }
}

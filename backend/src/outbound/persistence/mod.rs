//! PostgreSQL persistence adapters using Diesel.
//!
//! Thin adapters only: each implementation translates between Diesel rows
//! and domain types, mapping database failures to [`StoreError`] values.
//! Row structs and schema definitions stay internal to this module.
//!
//! [`StoreError`]: crate::domain::ports::StoreError

mod diesel_accounts_query;
mod diesel_snack_catalogue;
mod models;
mod pool;
mod schema;

pub use diesel_accounts_query::DieselAccountsQuery;
pub use diesel_snack_catalogue::DieselSnackCatalogue;
pub use pool::{DbPool, PoolConfig, PoolError};

//! Diesel row structs mapped to domain types.

use diesel::prelude::*;

use crate::domain::Snack;

use super::schema::{accounts, snacks};

/// Projection of the single column the identity lookup needs.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(super) struct AccountNameRow {
    pub name: String,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = snacks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(super) struct SnackRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price_cents: i32,
}

impl From<SnackRow> for Snack {
    fn from(row: SnackRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price_cents: row.price_cents,
        }
    }
}

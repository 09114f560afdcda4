//! Snack catalogue data model.

use serde::{Deserialize, Serialize};

/// A catalogue entry, read-only from this service's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snack {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price_cents: i32,
}

impl Snack {
    /// Build a snack from its parts.
    pub fn new(
        id: i32,
        name: impl Into<String>,
        description: impl Into<String>,
        price_cents: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price_cents,
        }
    }
}

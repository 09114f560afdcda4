//! Account data model.
//!
//! Accounts are written by the external registration flow; this service
//! only ever reads them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable account identifier matching the `accounts.userid` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i32);

impl AccountId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw identifier as stored in the database.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for AccountId {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted user record with identifier, email, and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub id: AccountId,
    pub email: String,
    pub name: String,
}

impl Account {
    /// Build an account from its parts.
    pub fn new(id: AccountId, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            name: name.into(),
        }
    }
}

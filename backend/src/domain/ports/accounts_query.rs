//! Driven port for account identity lookups.
//!
//! The resolver uses this port to turn a session-held account id into a
//! display name without importing persistence concerns. Production backs it
//! with a Diesel adapter; tests use the deterministic in-memory fixture.

use async_trait::async_trait;

use crate::domain::{Account, AccountId};

use super::StoreError;

/// Read-only identity lookup over the account entity set.
#[async_trait]
pub trait AccountsQuery: Send + Sync {
    /// Fetch the display name for `id`, or `None` when no account matches.
    async fn find_display_name(&self, id: AccountId) -> Result<Option<String>, StoreError>;
}

/// In-memory accounts for tests and database-free runs.
#[derive(Debug, Default, Clone)]
pub struct FixtureAccountsQuery {
    accounts: Vec<Account>,
}

impl FixtureAccountsQuery {
    /// Add an account to the fixture set.
    #[must_use]
    pub fn with_account(mut self, account: Account) -> Self {
        self.accounts.push(account);
        self
    }
}

#[async_trait]
impl AccountsQuery for FixtureAccountsQuery {
    async fn find_display_name(&self, id: AccountId) -> Result<Option<String>, StoreError> {
        Ok(self
            .accounts
            .iter()
            .find(|account| account.id == id)
            .map(|account| account.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_returns_matching_name() {
        let query = FixtureAccountsQuery::default()
            .with_account(Account::new(AccountId::new(7), "ada@example.com", "Ada"));

        let name = query
            .find_display_name(AccountId::new(7))
            .await
            .expect("fixture lookup");
        assert_eq!(name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn fixture_returns_none_for_unknown_id() {
        let query = FixtureAccountsQuery::default();

        let name = query
            .find_display_name(AccountId::new(42))
            .await
            .expect("fixture lookup");
        assert!(name.is_none());
    }
}

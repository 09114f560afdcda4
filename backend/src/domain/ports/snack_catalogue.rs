//! Driven port for snack catalogue reads.

use async_trait::async_trait;

use crate::domain::Snack;

use super::StoreError;

/// Read-only access to the snack entity set.
#[async_trait]
pub trait SnackCatalogue: Send + Sync {
    /// Return the full catalogue in a stable order.
    async fn list_snacks(&self) -> Result<Vec<Snack>, StoreError>;
}

/// In-memory catalogue for tests and database-free runs.
#[derive(Debug, Clone)]
pub struct FixtureSnackCatalogue {
    snacks: Vec<Snack>,
}

impl FixtureSnackCatalogue {
    /// Catalogue with an explicit snack set.
    pub fn new(snacks: Vec<Snack>) -> Self {
        Self { snacks }
    }
}

impl Default for FixtureSnackCatalogue {
    fn default() -> Self {
        Self::new(vec![
            Snack::new(1, "Chips", "Salted potato chips", 250),
            Snack::new(2, "Nuts", "Roasted mixed nuts", 400),
        ])
    }
}

#[async_trait]
impl SnackCatalogue for FixtureSnackCatalogue {
    async fn list_snacks(&self) -> Result<Vec<Snack>, StoreError> {
        Ok(self.snacks.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_preserves_order_across_calls() {
        let catalogue = FixtureSnackCatalogue::default();

        let first = catalogue.list_snacks().await.expect("fixture catalogue");
        let second = catalogue.list_snacks().await.expect("fixture catalogue");

        assert_eq!(first, second);
        assert_eq!(first[0].name, "Chips");
        assert_eq!(first[1].name, "Nuts");
    }
}

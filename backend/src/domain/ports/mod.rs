//! Driven ports of the storefront core.
//!
//! Handlers and the resolver depend on these traits only; concrete
//! implementations live in the outbound adapters.

mod accounts_query;
mod page_renderer;
mod snack_catalogue;
mod store_error;

pub use accounts_query::{AccountsQuery, FixtureAccountsQuery};
pub use page_renderer::PageRenderer;
pub use snack_catalogue::{FixtureSnackCatalogue, SnackCatalogue};
pub use store_error::StoreError;

//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::PageResolver;
use crate::domain::ports::{AccountsQuery, PageRenderer, SnackCatalogue};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub resolver: PageResolver,
    pub snacks: Arc<dyn SnackCatalogue>,
    pub renderer: Arc<dyn PageRenderer>,
}

impl HttpState {
    /// Construct handler state from port implementations.
    pub fn new(
        accounts: Arc<dyn AccountsQuery>,
        snacks: Arc<dyn SnackCatalogue>,
        renderer: Arc<dyn PageRenderer>,
    ) -> Self {
        Self {
            resolver: PageResolver::new(accounts, Arc::clone(&renderer)),
            snacks,
            renderer,
        }
    }
}

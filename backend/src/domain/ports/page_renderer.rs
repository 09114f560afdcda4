//! Driven port for page rendering.
//!
//! Keeps the template engine out of the domain: the resolver and handlers
//! hand over a page and a fully built view model and get HTML back.

use crate::domain::{Error, Page, ViewModel};

/// Renders a page template with a view model.
pub trait PageRenderer: Send + Sync {
    /// Render `page` with `model`, returning the HTML body.
    fn render(&self, page: Page, model: &ViewModel) -> Result<String, Error>;
}

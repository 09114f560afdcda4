//! MiniJinja rendering adapter behind the [`PageRenderer`] port.
//!
//! Templates are embedded at compile time so the binary serves pages
//! without a template directory on disk.

use minijinja::Environment;

use crate::domain::ports::PageRenderer;
use crate::domain::{Error, Page, ViewModel};

/// Renderer backed by an in-memory MiniJinja environment.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Build the environment with every storefront template registered.
    ///
    /// # Errors
    ///
    /// Returns an internal error if an embedded template fails to compile;
    /// this only happens when a template shipped with the binary is broken.
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        let sources = [
            ("index.html", include_str!("../../../templates/index.html")),
            ("snacks.html", include_str!("../../../templates/snacks.html")),
            ("basket.html", include_str!("../../../templates/basket.html")),
            (
                "register.html",
                include_str!("../../../templates/register.html"),
            ),
        ];
        for (name, source) in sources {
            env.add_template(name, source).map_err(|error| {
                Error::internal(format!("template {name} failed to compile: {error}"))
            })?;
        }
        Ok(Self { env })
    }
}

impl PageRenderer for MiniJinjaRenderer {
    fn render(&self, page: Page, model: &ViewModel) -> Result<String, Error> {
        let template = self.env.get_template(page.template_name()).map_err(|error| {
            Error::internal(format!("template {page} is not registered: {error}"))
        })?;
        template
            .render(model)
            .map_err(|error| Error::internal(format!("rendering {page} failed: {error}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Snack;

    fn renderer() -> MiniJinjaRenderer {
        MiniJinjaRenderer::new().expect("embedded templates compile")
    }

    #[test]
    fn home_greets_a_named_visitor() {
        let mut model = ViewModel::new();
        model.set_name("Ada");

        let html = renderer().render(Page::Home, &model).expect("render home");
        assert!(html.contains("Welcome back, Ada!"));
        assert!(!html.contains("href=\"/register\""));
    }

    #[test]
    fn home_offers_registration_to_anonymous_visitors() {
        let mut model = ViewModel::new();
        model.set_name("");

        let html = renderer().render(Page::Home, &model).expect("render home");
        assert!(!html.contains("Welcome back"));
        assert!(html.contains("href=\"/register\""));
    }

    #[test]
    fn snack_listing_preserves_catalogue_order() {
        let mut model = ViewModel::new();
        model.set_name("");
        model
            .insert(
                "snacks",
                vec![
                    Snack::new(1, "Chips", "Salted potato chips", 250),
                    Snack::new(2, "Nuts", "Roasted mixed nuts", 400),
                ],
            )
            .expect("serialisable snacks");

        let html = renderer()
            .render(Page::Snacks, &model)
            .expect("render snacks");
        let chips = html.find("Chips").expect("chips rendered");
        let nuts = html.find("Nuts").expect("nuts rendered");
        assert!(chips < nuts);
    }

    #[test]
    fn register_renders_without_a_name_entry() {
        let html = renderer()
            .render(Page::Register, &ViewModel::new())
            .expect("render register");
        assert!(html.contains("<form action=\"/api/users\""));
    }

    #[test]
    fn visitor_name_is_escaped() {
        let mut model = ViewModel::new();
        model.set_name("<script>alert(1)</script>");

        let html = renderer().render(Page::Home, &model).expect("render home");
        assert!(!html.contains("<script>alert(1)</script>"));
    }
}

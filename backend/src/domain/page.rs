//! Pages served by the storefront.

use std::fmt;

/// Identifies a renderable page and names its template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Snacks,
    Basket,
    Register,
}

impl Page {
    /// Template name understood by the renderer.
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Home => "index.html",
            Self::Snacks => "snacks.html",
            Self::Basket => "basket.html",
            Self::Register => "register.html",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_name())
    }
}

//! Rendering adapter implementing the renderer port.

mod minijinja_renderer;

pub use minijinja_renderer::MiniJinjaRenderer;

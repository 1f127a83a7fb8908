//! # Views Module
//!
//! Renders panel state as plain text.

pub mod panel_renderer;

// Re-export main types for convenience
pub use panel_renderer::ViewRenderer;

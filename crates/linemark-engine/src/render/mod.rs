//! # Rendering
//!
//! Turns parsed block nodes into the fixed HTML vocabulary: `h3`, `ul`/`li`,
//! `p`, `hr`, a classed disclaimer `div`, and `strong`. Class names come from
//! [`RenderOptions`]; everything else is fixed.

pub mod html;

pub use html::HtmlRenderer;

/// Class names attached to the classed elements of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub heading_class: String,
    pub disclaimer_class: String,
    pub error_class: String,
}

impl RenderOptions {
    pub const DEFAULT_HEADING_CLASS: &'static str = "result-heading";
    pub const DEFAULT_DISCLAIMER_CLASS: &'static str = "disclaimer-box";
    pub const DEFAULT_ERROR_CLASS: &'static str = "error-message";
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            heading_class: Self::DEFAULT_HEADING_CLASS.to_string(),
            disclaimer_class: Self::DEFAULT_DISCLAIMER_CLASS.to_string(),
            error_class: Self::DEFAULT_ERROR_CLASS.to_string(),
        }
    }
}

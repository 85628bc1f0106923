//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use serde_json::Value;

use crate::models::{PageResult, User};

/// Trait for rendering directory responses to an output format.
pub trait OutputRenderer {
    /// Render one page of users with its pagination metadata.
    fn render_page(&self, page: &PageResult) -> String;

    /// Render a single user record.
    fn render_user(&self, user: &User) -> String;

    /// Render a response body that has no fixed shape.
    fn render_value(&self, value: &Value) -> String;
}

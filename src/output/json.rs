//! JSON output renderer.
//!
//! Pretty-prints response bodies as-is, for piping into `jq` and friends.

use serde_json::Value;

use crate::models::{PageResult, User};
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render_page(&self, page: &PageResult) -> String {
        serde_json::to_string_pretty(page).unwrap_or_else(|_| "{}".to_string())
    }

    fn render_user(&self, user: &User) -> String {
        self.render_value(user.as_value())
    }

    fn render_value(&self, value: &Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn render_page_has_exactly_four_fields() {
        let page = PageResult {
            users: vec![User::new(json!({"id": 1}))],
            total_pages: 2,
            current_page: 1,
            total_users: 6,
        };
        let output = JsonRenderer.render_page(&page);
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.as_object().unwrap().len(), 4);
        assert_eq!(parsed["users"][0]["id"], 1);
        assert_eq!(parsed["total_users"], 6);
    }

    #[test]
    fn render_user_is_the_raw_record() {
        let user = User::new(json!({"id": "42", "name": "X"}));
        let parsed: Value = serde_json::from_str(&JsonRenderer.render_user(&user)).unwrap();
        assert_eq!(parsed, json!({"id": "42", "name": "X"}));
    }

    #[test]
    fn render_null_value() {
        assert_eq!(JsonRenderer.render_value(&Value::Null), "null");
    }
}

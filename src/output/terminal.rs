//! Terminal renderer: styled flowing text, one user per line.

use colored::Colorize;
use serde_json::Value;

use crate::models::{PageResult, User};
use crate::output::OutputRenderer;

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer;

impl TerminalRenderer {
    fn user_line(user: &User) -> String {
        let id = user.id().unwrap_or_else(|| "?".to_string());
        let name = user.display_name().unwrap_or_else(|| "(unnamed)".to_string());
        let mut line = format!(" {} {}", format!("#{id}").cyan().bold(), name.bold());
        if let Some(role) = user.role() {
            line.push_str(&format!("  {}", role.dimmed()));
        }
        line
    }
}

impl OutputRenderer for TerminalRenderer {
    fn render_page(&self, page: &PageResult) -> String {
        let mut output = String::new();

        if page.is_empty() {
            output.push_str(&format!("{}", "  No users found.\n".yellow()));
        } else {
            for user in &page.users {
                output.push_str(&Self::user_line(user));
                output.push('\n');
            }
        }

        output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
        output.push_str(&format!(
            " page {} of {} · {} {}\n",
            page.current_page.to_string().bold(),
            page.total_pages.to_string().bold(),
            page.total_users.to_string().bold(),
            if page.total_users == 1 { "user" } else { "users" },
        ));

        output
    }

    fn render_user(&self, user: &User) -> String {
        let mut output = Self::user_line(user);
        output.push('\n');

        if let Value::Object(fields) = user.as_value() {
            for (key, value) in fields {
                let shown = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                output.push_str(&format!("   {} {}\n", format!("{key}:").dimmed(), shown));
            }
        }

        output
    }

    fn render_value(&self, value: &Value) -> String {
        match value {
            Value::Null => format!("{}\n", "  ✔ Done.".green()),
            other => {
                let pretty =
                    serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string());
                format!("{pretty}\n")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn render_empty_page() {
        let page = PageResult {
            users: vec![],
            total_pages: 0,
            current_page: 1,
            total_users: 0,
        };
        let output = TerminalRenderer.render_page(&page);
        assert!(output.contains("No users found"));
        assert!(output.contains("users"));
    }

    #[test]
    fn render_page_lists_users() {
        let page = PageResult {
            users: vec![
                User::new(json!({"id": 1, "first_name": "Ana", "last_name": "Rojas", "role": "analyst"})),
                User::new(json!({"id": 2, "email": "b@x"})),
            ],
            total_pages: 3,
            current_page: 1,
            total_users: 11,
        };
        let output = TerminalRenderer.render_page(&page);
        assert!(output.contains("#1"));
        assert!(output.contains("Ana Rojas"));
        assert!(output.contains("analyst"));
        assert!(output.contains("b@x"));
        assert!(output.contains("11"));
    }

    #[test]
    fn render_user_shows_fields() {
        let user = User::new(json!({"id": "42", "name": "X", "active": true}));
        let output = TerminalRenderer.render_user(&user);
        assert!(output.contains("#42"));
        assert!(output.contains("active:"));
        assert!(output.contains("true"));
    }

    #[test]
    fn render_null_value_reports_success() {
        assert!(TerminalRenderer.render_value(&Value::Null).contains("Done"));
    }
}

//! User record as returned by the directory API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A user record.
///
/// The shape belongs to the server: the record is kept exactly as decoded
/// and is never validated or reshaped. Accessors read the common fields
/// without imposing a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(Value);

impl User {
    /// Wrap a decoded JSON value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The record identifier, rendered as a string.
    ///
    /// Servers emit either numeric or string ids; both are accepted.
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// The role name, whether sent as a plain string or as `{ "name": .. }`.
    pub fn role(&self) -> Option<&str> {
        match self.0.get("role")? {
            Value::String(s) => Some(s),
            Value::Object(obj) => obj.get("name")?.as_str(),
            _ => None,
        }
    }

    /// Look up an arbitrary field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Best-effort display name from `first_name`/`last_name`, then `name`, then `email`.
    pub fn display_name(&self) -> Option<String> {
        let first = self.field("first_name").and_then(Value::as_str).unwrap_or("");
        let last = self.field("last_name").and_then(Value::as_str).unwrap_or("");
        let full = format!("{first} {last}").trim().to_string();
        if !full.is_empty() {
            return Some(full);
        }
        ["name", "email"]
            .iter()
            .find_map(|key| self.field(key).and_then(Value::as_str))
            .map(str::to_string)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for User {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

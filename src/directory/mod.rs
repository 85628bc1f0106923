//! User directory client.
//!
//! Six operations, each mapped onto exactly one request through the
//! injected [`Transport`]. A failure is logged once at the call site and
//! returned to the caller with the transport error carried unaltered.
//! Nothing is retried, cached or swallowed.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use crate::constants::{
    ROUTE_DELETE_USER, ROUTE_GET_USER, ROUTE_LIST_USERS, ROUTE_REGISTER_USER,
    ROUTE_UPDATE_USER, ROUTE_USERS_BY_FILTER,
};
use crate::models::{FilterRequest, PageRequest, PageResult, User};
use crate::transport::{ApiRequest, Transport, TransportError};

/// The directory operations, used to label logs and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListUsers,
    AddUser,
    DeleteUser,
    EditUser,
    GetUser,
    ListUsersByFilter,
}

impl Operation {
    /// Diagnostic message logged when the operation fails.
    fn failure_message(self) -> &'static str {
        match self {
            Operation::ListUsers => "error fetching users",
            Operation::AddUser => "error adding user",
            Operation::DeleteUser => "error deleting user",
            Operation::EditUser => "error editing user",
            Operation::GetUser => "error fetching user",
            Operation::ListUsersByFilter => "error fetching filtered users",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::ListUsers => "list_users",
            Operation::AddUser => "add_user",
            Operation::DeleteUser => "delete_user",
            Operation::EditUser => "edit_user",
            Operation::GetUser => "get_user",
            Operation::ListUsersByFilter => "list_users_by_filter",
        };
        f.write_str(name)
    }
}

/// Errors from directory operations.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The round trip failed; `source` is exactly what the transport reported.
    #[error("{operation} request failed: {source}")]
    Request {
        operation: Operation,
        #[source]
        source: TransportError,
    },

    /// The server answered successfully but the body lacks the expected shape.
    #[error("{operation} returned a malformed response: {reason}")]
    MalformedResponse { operation: Operation, reason: String },
}

impl DirectoryError {
    pub fn operation(&self) -> Operation {
        match self {
            DirectoryError::Request { operation, .. }
            | DirectoryError::MalformedResponse { operation, .. } => *operation,
        }
    }

    /// The underlying transport failure, if this was a request failure.
    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            DirectoryError::Request { source, .. } => Some(source),
            DirectoryError::MalformedResponse { .. } => None,
        }
    }

    /// Take ownership of the underlying transport failure.
    pub fn into_transport_error(self) -> Result<TransportError, Self> {
        match self {
            DirectoryError::Request { source, .. } => Ok(source),
            other => Err(other),
        }
    }
}

/// Client for the user directory API.
///
/// Holds no state besides the transport, so it is cheap to clone and safe
/// to call concurrently. Concurrent calls are not ordered relative to each
/// other.
#[derive(Clone)]
pub struct DirectoryClient {
    transport: Arc<dyn Transport>,
}

impl DirectoryClient {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Build a client over a transport shared with other components.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// List one page of users.
    ///
    /// `search` is sent only when non-empty. `role` is omitted when absent,
    /// empty, or `"all"`. Returns the decoded body as the server sent it.
    pub async fn list_users(
        &self,
        page: u32,
        search: Option<&str>,
        role: Option<&str>,
    ) -> Result<Value, DirectoryError> {
        let body = PageRequest::new(page).search(search).role(role);
        let request = ApiRequest::post(ROUTE_LIST_USERS, to_body(&body));
        self.round_trip(Operation::ListUsers, request).await
    }

    /// Register a new user. Returns whatever the server answered with.
    pub async fn add_user(&self, user: &Value) -> Result<Value, DirectoryError> {
        let request = ApiRequest::post(ROUTE_REGISTER_USER, user.clone());
        self.round_trip(Operation::AddUser, request).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<Value, DirectoryError> {
        let request = ApiRequest::delete(ROUTE_DELETE_USER).param(id);
        self.round_trip(Operation::DeleteUser, request).await
    }

    /// Apply a partial update to a user.
    pub async fn edit_user(&self, id: &str, patch: &Value) -> Result<Value, DirectoryError> {
        let request = ApiRequest::put(ROUTE_UPDATE_USER, patch.clone()).param(id);
        self.round_trip(Operation::EditUser, request).await
    }

    /// Fetch a single user, unwrapped from its `{ "user": .. }` envelope.
    ///
    /// A missing or `null` `user` field is reported as
    /// [`DirectoryError::MalformedResponse`].
    pub async fn get_user(&self, id: &str) -> Result<User, DirectoryError> {
        let request = ApiRequest::get(ROUTE_GET_USER).param(id);
        let body = self.round_trip(Operation::GetUser, request).await?;

        match body {
            Value::Object(mut envelope) => match envelope.remove("user") {
                Some(Value::Null) | None => Err(malformed(
                    Operation::GetUser,
                    "response envelope has no `user` field",
                )),
                Some(user) => Ok(User::new(user)),
            },
            other => Err(malformed(
                Operation::GetUser,
                format!("expected a JSON object, got {}", json_kind(&other)),
            )),
        }
    }

    /// List users matching a free-form filter token.
    ///
    /// The result always has exactly the four pagination fields, whatever
    /// else the server includes.
    pub async fn list_users_by_filter(
        &self,
        request: &FilterRequest,
    ) -> Result<PageResult, DirectoryError> {
        let api_request = ApiRequest::post(ROUTE_USERS_BY_FILTER, to_body(request));
        let body = self.round_trip(Operation::ListUsersByFilter, api_request).await?;

        serde_json::from_value(body)
            .map_err(|e| malformed(Operation::ListUsersByFilter, e.to_string()))
    }

    async fn round_trip(
        &self,
        operation: Operation,
        request: ApiRequest,
    ) -> Result<Value, DirectoryError> {
        debug!(
            %operation,
            method = %request.method,
            path = %request.path(),
            "sending directory request"
        );

        self.transport.send(request).await.map_err(|source| {
            error!(%operation, error = %source, "{}", operation.failure_message());
            DirectoryError::Request { operation, source }
        })
    }
}

impl fmt::Debug for DirectoryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryClient").finish_non_exhaustive()
    }
}

fn malformed(operation: Operation, reason: impl Into<String>) -> DirectoryError {
    let reason = reason.into();
    error!(%operation, %reason, "{}", operation.failure_message());
    DirectoryError::MalformedResponse { operation, reason }
}

/// Request bodies are plain structs of strings and integers.
fn to_body(body: &impl serde::Serialize) -> Value {
    serde_json::to_value(body).unwrap_or(Value::Null)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

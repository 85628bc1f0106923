//! Transport trait and HTTP integration.
//!
//! The directory client never talks to the network itself: it hands an
//! [`ApiRequest`] to an injected [`Transport`] and gets the decoded body
//! back. Production code uses [`http::HttpTransport`]; tests substitute
//! their own implementation.

pub mod http;

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use http::HttpTransport;

/// Errors reported by a transport for a single round trip.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response body: {0}")]
    Decode(String),
}

impl TransportError {
    /// HTTP status code, when the server answered with a non-2xx status.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// HTTP verbs used by the directory API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Put => write!(f, "PUT"),
            Method::Delete => write!(f, "DELETE"),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One request against the directory API.
///
/// `route` is relative to the configured base URL. `params` are appended
/// as individual path segments and are percent-encoded by the transport,
/// so an identifier can never change which route is hit.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub route: String,
    pub params: Vec<String>,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, route: &str) -> Self {
        Self {
            method,
            route: route.to_string(),
            params: Vec::new(),
            body: None,
        }
    }

    pub fn get(route: &str) -> Self {
        Self::new(Method::Get, route)
    }

    pub fn post(route: &str, body: Value) -> Self {
        Self::new(Method::Post, route).with_body(body)
    }

    pub fn put(route: &str, body: Value) -> Self {
        Self::new(Method::Put, route).with_body(body)
    }

    pub fn delete(route: &str) -> Self {
        Self::new(Method::Delete, route)
    }

    /// Append a path parameter (e.g. a user id).
    pub fn param(mut self, value: impl Into<String>) -> Self {
        self.params.push(value.into());
        self
    }

    fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Route with parameters joined, unencoded. Used for logs and tests.
    pub fn path(&self) -> String {
        let mut path = self.route.clone();
        for param in &self.params {
            if !path.ends_with('/') {
                path.push('/');
            }
            path.push_str(param);
        }
        path
    }
}

/// Performs exactly one round trip per call.
///
/// Implementations return the decoded JSON body (`Value::Null` for an
/// empty body) or the failure as-is. They must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError>;
}

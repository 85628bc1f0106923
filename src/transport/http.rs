//! `reqwest`-backed transport.
//!
//! Resolves request routes against the configured base URL, attaches the
//! bearer token, and maps non-2xx responses to [`TransportError::Status`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

use super::{ApiRequest, Transport, TransportError};
use crate::config::ApiConfig;
use crate::constants::USER_AGENT;

/// HTTP transport for the directory API.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpTransport {
    /// Build a transport for `base_url`.
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| TransportError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(TransportError::InvalidUrl(format!(
                "{base_url}: cannot be used as a base URL"
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self, TransportError> {
        Self::new(&api.base_url, api.token.clone(), api.timeout())
    }

    /// Resolve a request to an absolute URL.
    ///
    /// Route segments are appended to the base path and a trailing slash in
    /// the route is preserved. Each parameter becomes one encoded segment.
    /// Empty and dot-only parameters (`.`, `..`) are rejected, since the URL
    /// parser would drop or collapse them and hit a different route.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url, TransportError> {
        if let Some(bad) = request
            .params
            .iter()
            .find(|p| matches!(p.as_str(), "" | "." | ".."))
        {
            return Err(TransportError::InvalidUrl(format!(
                "path parameter {bad:?} is not a valid identifier"
            )));
        }

        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                TransportError::InvalidUrl(format!("{}: cannot be a base", self.base_url))
            })?;
            segments.pop_if_empty();
            segments.extend(request.route.trim_start_matches('/').split('/'));
            if !request.params.is_empty() {
                segments.pop_if_empty();
                segments.extend(request.params.iter().map(String::as_str));
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
        let url = self.url_for(&request)?;

        let mut builder = self.client.request(request.method.into(), url);
        if let Some(ref token) = self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn transport(base: &str) -> HttpTransport {
        HttpTransport::new(base, None, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn list_route_keeps_trailing_slash() {
        let t = transport("http://localhost:8000/api");
        let url = t.url_for(&ApiRequest::post("/users/", json!({}))).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/users/");
    }

    #[test]
    fn base_url_trailing_slash_is_tolerated() {
        let t = transport("http://localhost:8000/api/");
        let url = t.url_for(&ApiRequest::get("/users/get_user").param("42")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/users/get_user/42");
    }

    #[test]
    fn params_are_encoded_as_single_segment() {
        let t = transport("http://localhost/api");
        let url = t
            .url_for(&ApiRequest::delete("/users/delete").param("../admin?x=1"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost/api/users/delete/..%2Fadmin%3Fx=1"
        );
    }

    #[test]
    fn root_base_url() {
        let t = transport("http://localhost:9000");
        let url = t
            .url_for(&ApiRequest::post("/users/get_users_by_filter", json!({})))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/users/get_users_by_filter");
    }

    #[test]
    fn dot_and_empty_params_are_rejected() {
        let t = transport("http://localhost/api");
        for id in ["..", ".", ""] {
            let err = t
                .url_for(&ApiRequest::delete("/users/delete").param(id))
                .unwrap_err();
            assert!(matches!(err, TransportError::InvalidUrl(_)), "id {id:?}");

            let err = t
                .url_for(&ApiRequest::put("/users/update", json!({})).param(id))
                .unwrap_err();
            assert!(matches!(err, TransportError::InvalidUrl(_)), "id {id:?}");
        }

        // Dots inside a longer identifier are fine.
        let url = t.url_for(&ApiRequest::get("/users/get_user").param("a..b")).unwrap();
        assert_eq!(url.as_str(), "http://localhost/api/users/get_user/a..b");
    }

    #[test]
    fn rejects_invalid_base_urls() {
        let err = HttpTransport::new("not a url", None, Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl(_)));

        let err = HttpTransport::new("mailto:a@b.c", None, Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl(_)));
    }

    #[test]
    fn debug_redacts_token() {
        let t = HttpTransport::new("http://x", Some("tok-123".into()), Duration::from_secs(1))
            .unwrap();
        let debug = format!("{t:?}");
        assert!(!debug.contains("tok-123"));
    }
}

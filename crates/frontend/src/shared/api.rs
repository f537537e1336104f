//! HTTP client shared by every domain api module.
//!
//! A single [`ApiClient`] is constructed in `App` from the current
//! [`Session`](crate::system::auth::session::Session) and handed to pages
//! through Leptos context, so the bearer token is read exactly once per
//! client lifetime instead of on every request.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::system::auth::session::Session;

/// Failure taxonomy for one request. No retry, no timeout: a failure
/// propagates directly to the calling page.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to encode query: {0}")]
    Query(String),
}

/// Backend origin derived from the current window location. The API server
/// listens on port 5000 next to whatever host serves the frontend.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5000", protocol, hostname)
}

#[derive(Clone)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(session: &Session) -> Self {
        Self {
            base: api_base(),
            token: session.token().map(str::to_string),
        }
    }

    /// Construct against an explicit origin, bypassing window inspection.
    pub fn with_base(base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base: base.into(),
            token,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.authorize(Request::get(&self.url(path)));
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// GET with a filter bag serialized to a query string. Callers mark
    /// empty/default fields with `skip_serializing_if` so only active
    /// filters reach the wire.
    pub async fn get_json_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let qs = serde_qs::to_string(query).map_err(|e| ApiError::Query(e.to_string()))?;
        let path = if qs.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, qs)
        };
        self.get_json(&path).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let builder = self.authorize(Request::post(&self.url(path)));
        let response = builder
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let api = ApiClient::with_base("http://localhost:5000", None);
        assert_eq!(api.url("/api/ngos"), "http://localhost:5000/api/ngos");
    }
}

//! HTTP client for the dispenser backend.

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;

use crate::config::Settings;

use super::ApiError;

/// How requests reach the backend.
///
/// `ApiClient` is the only production implementation; the stores depend on
/// this trait so tests can drive them with an in-memory transport instead
/// of a live server.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `path`, returning the raw body of a 2xx response.
    async fn get(&self, path: &str) -> Result<String, ApiError>;

    /// POST `body` as JSON to `path`. Success bodies are discarded.
    async fn post(&self, path: &str, body: Value) -> Result<(), ApiError>;

    /// DELETE with `body` as JSON. Success bodies are discarded.
    async fn delete(&self, path: &str, body: Value) -> Result<(), ApiError>;
}

/// REST client for the dispenser backend.
/// Clone is cheap - reqwest::Client shares its connection pool.
///
/// No client-side timeout is configured: requests run on the transport's
/// defaults and cannot be cancelled once in flight.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the configured backend.
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: settings.backend_url().to_string(),
        })
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, url = %url, "sending request");

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }
        Ok(response)
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn get(&self, path: &str) -> Result<String, ApiError> {
        let response = self.send(Method::GET, path, None).await?;
        Ok(response.text().await?)
    }

    async fn post(&self, path: &str, body: Value) -> Result<(), ApiError> {
        self.send(Method::POST, path, Some(body)).await?;
        Ok(())
    }

    async fn delete(&self, path: &str, body: Value) -> Result<(), ApiError> {
        self.send(Method::DELETE, path, Some(body)).await?;
        Ok(())
    }
}

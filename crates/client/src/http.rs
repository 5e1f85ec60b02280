//! JSON-over-HTTP wrapper for the Histórico Domino backend.
//!
//! Every request sends `Content-Type: application/json`, every non-2xx
//! response becomes an [`ApiError`] and every failure is logged before it
//! is returned. `204 No Content` is reported as `Ok(None)`.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration, applying the request timeout
    /// when one is set.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend path starting with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send `method path` with an optional JSON body.
    ///
    /// Returns `Ok(None)` on `204 No Content` or an empty body and the
    /// decoded body otherwise.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut builder = self.client.request(method.clone(), self.url(path));
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.execute(&method, path, builder).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.request::<T, ()>(Method::GET, path, None).await?;
        Self::require_body(path, body)
    }

    /// `GET path?query`, with `query` serialized as URL parameters.
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.client.get(self.url(path)).query(query);
        let body = self.execute(&Method::GET, path, builder).await?;
        Self::require_body(path, body)
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.request(Method::POST, path, Some(body)).await?;
        Self::require_body(path, response)
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.request(Method::PUT, path, Some(body)).await?;
        Self::require_body(path, response)
    }

    /// `DELETE path`. Any response body is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request::<IgnoredAny, ()>(Method::DELETE, path, None)
            .await
            .map(|_| ())
    }

    // ---- private helpers ----

    async fn execute<T: DeserializeOwned>(
        &self,
        method: &Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        let result = Self::send(builder.header(CONTENT_TYPE, "application/json")).await;

        if let Err(err) = &result {
            match err {
                ApiError::Status { status, .. } => {
                    tracing::warn!(%method, path, status, error = %err, "Backend request rejected");
                }
                _ => {
                    tracing::error!(%method, path, error = %err, "Backend request failed");
                }
            }
        }

        result
    }

    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<Option<T>, ApiError> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(
                status.as_u16(),
                status.canonical_reason(),
                &body,
            ));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn require_body<T>(path: &str, body: Option<T>) -> Result<T, ApiError> {
        body.ok_or_else(|| ApiError::EmptyResponse {
            path: path.to_string(),
        })
    }
}

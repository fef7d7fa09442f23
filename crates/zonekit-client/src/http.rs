//! Shared HTTP plumbing for the typed endpoint clients.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Thin wrapper around [`reqwest::Client`] carrying the service base URL
/// and uniform error mapping. The typed clients ([`HttpPolygonStore`],
/// [`HttpCitizenStore`]) share one of these.
///
/// [`HttpPolygonStore`]: crate::polygons::HttpPolygonStore
/// [`HttpCitizenStore`]: crate::citizens::HttpCitizenStore
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Config {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and deserialize the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!(endpoint = %url, error = %e, "API request failed");
            ApiError::Http {
                endpoint: url.clone(),
                source: e,
            }
        })?;
        Self::decode(url, response).await
    }

    /// POST `body` to `path` and deserialize the JSON response.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = self.client.post(&url).json(body).send().await.map_err(|e| {
            tracing::error!(endpoint = %url, error = %e, "API request failed");
            ApiError::Http {
                endpoint: url.clone(),
                source: e,
            }
        })?;
        Self::decode(url, response).await
    }

    /// PUT `body` to `path` and deserialize the JSON response.
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = self.client.put(&url).json(body).send().await.map_err(|e| {
            tracing::error!(endpoint = %url, error = %e, "API request failed");
            ApiError::Http {
                endpoint: url.clone(),
                source: e,
            }
        })?;
        Self::decode(url, response).await
    }

    /// DELETE `path`, expecting an empty success body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        let response = self.client.delete(&url).send().await.map_err(|e| {
            tracing::error!(endpoint = %url, error = %e, "API request failed");
            ApiError::Http {
                endpoint: url.clone(),
                source: e,
            }
        })?;
        Self::check_status(&url, response).await.map(|_| ())
    }

    async fn decode<T: DeserializeOwned>(
        url: String,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::check_status(&url, response).await?;
        response.json().await.map_err(|e| {
            tracing::error!(endpoint = %url, error = %e, "API response decode failed");
            ApiError::Decode {
                endpoint: url,
                source: e,
            }
        })
    }

    async fn check_status(
        url: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let body_excerpt: String = body.chars().take(256).collect();
        tracing::error!(endpoint = %url, status = status.as_u16(), body = %body_excerpt, "API error response");
        Err(ApiError::Status {
            endpoint: url.to_string(),
            status: status.as_u16(),
            body: body_excerpt,
        })
    }
}

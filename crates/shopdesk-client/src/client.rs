//! The reqwest-backed resource client.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue, ORIGIN};
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use shopdesk_core::config::{ApiConfig, EndpointsConfig};
use shopdesk_core::types::Resource;

use crate::cause::{LikelyCause, classify_transport_failure};
use crate::error::ClientError;
use crate::origin::origin_allowed;

/// Client for the remote CRUD API.
///
/// Every call is a fresh request; nothing is cached. An empty response body
/// decodes to `None`, which callers treat like an empty collection.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    http: reqwest::Client,
    base_url: String,
    endpoints: EndpointsConfig,
    origin: Option<String>,
}

impl ResourceClient {
    /// Build a client from API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl {
            url: base_url.clone(),
            message: e.to_string(),
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(|e| ClientError::Setup(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            endpoints: config.endpoints.clone(),
            origin: config
                .client_origin
                .as_deref()
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string),
        })
    }

    /// Configured collection paths.
    pub fn endpoints(&self) -> &EndpointsConfig {
        &self.endpoints
    }

    /// GET a whole collection.
    pub async fn fetch_collection<T: DeserializeOwned>(
        &self,
        resource: Resource,
    ) -> Result<Option<Vec<T>>, ClientError> {
        let path = resource.collection_path(&self.endpoints).to_string();
        self.mutate::<(), Vec<T>>(Method::GET, &path, None).await
    }

    /// GET a single item by id.
    pub async fn fetch_one<T: DeserializeOwned>(
        &self,
        resource: Resource,
        id: i64,
    ) -> Result<Option<T>, ClientError> {
        let path = resource.item_path(&self.endpoints, id);
        self.mutate::<(), T>(Method::GET, &path, None).await
    }

    /// POST a new item to a collection.
    pub async fn create<B, T>(&self, resource: Resource, body: &B) -> Result<Option<T>, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let path = resource.collection_path(&self.endpoints).to_string();
        self.mutate(Method::POST, &path, Some(body)).await
    }

    /// PUT a full replacement of an item.
    pub async fn update<B, T>(
        &self,
        resource: Resource,
        id: i64,
        body: &B,
    ) -> Result<Option<T>, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let path = resource.item_path(&self.endpoints, id);
        self.mutate(Method::PUT, &path, Some(body)).await
    }

    /// DELETE an item. Any response body is ignored.
    pub async fn delete(&self, resource: Resource, id: i64) -> Result<(), ClientError> {
        let path = resource.item_path(&self.endpoints, id);
        self.send(Method::DELETE, &path, None).await?;
        Ok(())
    }

    /// Issue a request with any verb and decode the response.
    ///
    /// The body is serialized as JSON. It is never attached to GET requests.
    pub async fn mutate<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<T>, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = match body {
            Some(body) if method != Method::GET => {
                Some(serde_json::to_value(body).map_err(|e| ClientError::Decode {
                    endpoint: path.to_string(),
                    message: format!("request body: {e}"),
                })?)
            }
            _ => None,
        };

        let Some(text) = self.send(method, path, payload.as_ref()).await? else {
            return Ok(None);
        };

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| {
                warn!(endpoint = %path, error = %e, "Response did not match expected shape");
                ClientError::Decode {
                    endpoint: path.to_string(),
                    message: e.to_string(),
                }
            })
    }

    /// Send the request and return the raw body, `None` when it is empty.
    async fn send(
        &self,
        method: Method,
        path: &str,
        payload: Option<&serde_json::Value>,
    ) -> Result<Option<String>, ClientError> {
        let url = self.url(path)?;
        debug!(method = %method, url = %url, "Sending API request");

        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(origin) = &self.origin {
            request = request.header(ORIGIN, origin.as_str());
        }
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request.send().await.map_err(|e| {
            let likely_cause = classify_transport_failure(self.origin.as_deref(), e.is_timeout());
            warn!(
                method = %method,
                url = %url,
                error = %e,
                cause = ?likely_cause,
                "API request did not complete"
            );
            ClientError::Connectivity {
                likely_cause,
                detail: e.to_string(),
            }
        })?;

        if let Some(origin) = &self.origin {
            if !origin_allowed(response.headers(), origin) {
                warn!(url = %url, origin = %origin, "Response does not allow the client origin");
                return Err(ClientError::Connectivity {
                    likely_cause: LikelyCause::DisallowedOrigin,
                    detail: format!("origin '{origin}' not allowed by {url}"),
                });
            }
        }

        let status = response.status();
        if !status.is_success() {
            warn!(method = %method, url = %url, status = status.as_u16(), "API request failed");
            return Err(ClientError::RemoteRequestFailed {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let text = response.text().await.map_err(|e| ClientError::Connectivity {
            likely_cause: classify_transport_failure(self.origin.as_deref(), e.is_timeout()),
            detail: e.to_string(),
        })?;

        if text.trim().is_empty() {
            debug!(url = %url, "API returned no content");
            return Ok(None);
        }
        Ok(Some(text))
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        let raw = if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };
        Url::parse(&raw).map_err(|e| ClientError::InvalidUrl {
            url: raw,
            message: e.to_string(),
        })
    }
}

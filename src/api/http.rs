// ABOUTME: Shared request plumbing for the REST clients
// Builds the reqwest client, joins endpoint paths, and maps error statuses to ApiError

use super::error::ApiError;
use crate::models::ApiErrorBody;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Base URL plus a configured reqwest client.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    client: Client,
    base: String,
    root: Url,
}

impl Endpoint {
    pub(crate) fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("flagdeck/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base: base_url.trim_end_matches('/').to_string(),
            root: parsed,
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// Appends each segment to the base path, percent-encoding `/`, `?` and spaces.
    pub(crate) fn segments_url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.root.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn get_segments(&self, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
        Ok(self.client.get(self.segments_url(segments)?))
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.url(path))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.client.put(self.url(path))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.client.delete(self.url(path))
    }
}

/// Sends the request and fails on any non-2xx status.
pub(crate) async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    let (client, request) = request.build_split();
    let request = request?;
    let method = request.method().clone();
    let url = request.url().clone();
    debug!("API request: {} {}", method, url);

    let response = match client.execute(request).await {
        Ok(response) => response,
        Err(e) => {
            warn!("API request {} {} failed: {}", method, url, e);
            return Err(e.into());
        }
    };

    let status = response.status();
    debug!("API response: {} {} {}", status.as_u16(), method, url);
    if status.is_success() {
        return Ok(response);
    }

    let err = error_for(status, &response.text().await.unwrap_or_default());
    warn!("API error for {} {}: {}", method, url, err);
    Err(err)
}

/// Sends the request and decodes the JSON body.
pub(crate) async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let body = send(request).await?.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

fn error_for(status: StatusCode, body: &str) -> ApiError {
    if status == StatusCode::SERVICE_UNAVAILABLE {
        return ApiError::Maintenance;
    }

    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|body| body.message);

    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

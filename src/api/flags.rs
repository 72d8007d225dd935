// ABOUTME: Client for the feature flag service REST API
// CRUD plus toggle, stats, and health over /flags

use super::error::ApiError;
use super::http::{send, send_json, Endpoint};
use crate::models::{FeatureFlag, FeatureFlagRequest, FlagStats};
use std::time::Duration;

pub const DEFAULT_FLAGS_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone)]
pub struct FlagsClient {
    endpoint: Endpoint,
}

impl FlagsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        Ok(Self {
            endpoint: Endpoint::new(base_url, timeout)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.endpoint.base_url()
    }

    /// `GET /flags`
    pub async fn list(&self) -> Result<Vec<FeatureFlag>, ApiError> {
        send_json(self.endpoint.get("/flags")).await
    }

    /// `GET /flags/{id}`
    pub async fn get(&self, id: i64) -> Result<FeatureFlag, ApiError> {
        send_json(self.endpoint.get(&format!("/flags/{id}"))).await
    }

    /// `GET /flags/name/{name}`
    pub async fn get_by_name(&self, name: &str) -> Result<FeatureFlag, ApiError> {
        send_json(self.endpoint.get_segments(&["flags", "name", name])?).await
    }

    /// `POST /flags`
    pub async fn create(&self, request: &FeatureFlagRequest) -> Result<FeatureFlag, ApiError> {
        send_json(self.endpoint.post("/flags").json(request)).await
    }

    /// `PUT /flags/{id}`
    pub async fn update(&self, id: i64, request: &FeatureFlagRequest) -> Result<FeatureFlag, ApiError> {
        send_json(self.endpoint.put(&format!("/flags/{id}")).json(request)).await
    }

    /// `DELETE /flags/{id}`
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        send(self.endpoint.delete(&format!("/flags/{id}"))).await?;
        Ok(())
    }

    /// `POST /flags/{id}/toggle`
    pub async fn toggle(&self, id: i64) -> Result<FeatureFlag, ApiError> {
        send_json(self.endpoint.post(&format!("/flags/{id}/toggle"))).await
    }

    /// `GET /flags/stats`
    pub async fn stats(&self) -> Result<FlagStats, ApiError> {
        send_json(self.endpoint.get("/flags/stats")).await
    }

    /// `GET /flags/health`. The service answers with plain text.
    pub async fn health(&self) -> Result<String, ApiError> {
        Ok(send(self.endpoint.get("/flags/health")).await?.text().await?)
    }
}

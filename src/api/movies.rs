// ABOUTME: Client for the movie search service (OMDb proxy) REST API
// Search, details, cached flag status, and service health

use super::error::ApiError;
use super::http::{send, send_json, Endpoint};
use crate::models::{FlagStatus, MovieSearchResponse, SearchQuery, ServiceHealth};
use std::time::Duration;

pub const DEFAULT_MOVIES_URL: &str = "http://localhost:8081/api";

#[derive(Debug, Clone)]
pub struct MoviesClient {
    endpoint: Endpoint,
}

impl MoviesClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        Ok(Self {
            endpoint: Endpoint::new(base_url, timeout)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.endpoint.base_url()
    }

    /// `GET /movies/search?title=..[&page][&type][&year]`
    ///
    /// A 503 means the service is in maintenance mode and comes back as
    /// [`ApiError::Maintenance`].
    pub async fn search(&self, query: &SearchQuery) -> Result<MovieSearchResponse, ApiError> {
        send_json(self.endpoint.get("/movies/search").query(&query.params())).await
    }

    /// `GET /movies/{imdbId}`
    pub async fn details(&self, imdb_id: &str) -> Result<MovieSearchResponse, ApiError> {
        send_json(self.endpoint.get_segments(&["movies", imdb_id])?).await
    }

    /// `GET /flags/status`
    pub async fn flag_status(&self) -> Result<FlagStatus, ApiError> {
        send_json(self.endpoint.get("/flags/status")).await
    }

    /// `POST /flags/refresh`, asking the service to resync its flag cache.
    pub async fn refresh_flags(&self) -> Result<(), ApiError> {
        send(self.endpoint.post("/flags/refresh")).await?;
        Ok(())
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<ServiceHealth, ApiError> {
        send_json(self.endpoint.get("/health")).await
    }
}

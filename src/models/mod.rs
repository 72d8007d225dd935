// ABOUTME: Wire models for the flags service and the movie search service

pub mod flag;
pub mod movie;
pub mod status;

pub use flag::{FeatureFlag, FeatureFlagRequest, FlagStats};
pub use movie::{Movie, MovieKind, MovieSearchResponse, SearchQuery};
pub use status::{ApiErrorBody, CacheStats, FlagStatus, ServiceHealth};

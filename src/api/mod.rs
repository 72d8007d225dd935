// ABOUTME: REST clients for the flags service and the movie search service
// Both speak JSON; request/response logging replaces per-call tracing at call sites

pub mod error;
pub mod flags;
mod http;
pub mod movies;

pub use error::ApiError;
pub use flags::{FlagsClient, DEFAULT_FLAGS_URL};
pub use movies::{MoviesClient, DEFAULT_MOVIES_URL};

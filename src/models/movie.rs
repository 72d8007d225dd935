// ABOUTME: Movie search models mirroring the OMDb-style payloads of the movie service
// OMDb uses PascalCase keys and string-typed booleans and counts

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Option<Vec<Movie>>,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MovieSearchResponse {
    /// OMDb reports success as the string `"True"`.
    pub fn is_success(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }

    pub fn movies(&self) -> &[Movie] {
        self.search.as_deref().unwrap_or_default()
    }

    pub fn total_results(&self) -> &str {
        self.total_results.as_deref().unwrap_or("0")
    }
}

/// Result type filter accepted by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieKind {
    Movie,
    Series,
    Episode,
}

impl MovieKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            MovieKind::Movie => "movie",
            MovieKind::Series => "series",
            MovieKind::Episode => "episode",
        }
    }

    /// Cycles `None -> movie -> series -> episode -> None`.
    pub const fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(MovieKind::Movie),
            Some(MovieKind::Movie) => Some(MovieKind::Series),
            Some(MovieKind::Series) => Some(MovieKind::Episode),
            Some(MovieKind::Episode) => None,
        }
    }
}

impl fmt::Display for MovieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a `/movies/search` request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub title: String,
    pub page: Option<u32>,
    pub kind: Option<MovieKind>,
    pub year: Option<String>,
}

impl SearchQuery {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: Option<MovieKind>) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn year(mut self, year: impl Into<String>) -> Self {
        let year = year.into();
        self.year = if year.trim().is_empty() { None } else { Some(year) };
        self
    }

    /// Query-string pairs in the order the service documents them.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("title", self.title.trim().to_string())];
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(kind) = self.kind {
            params.push(("type", kind.as_str().to_string()));
        }
        if let Some(year) = &self.year {
            params.push(("year", year.trim().to_string()));
        }
        params
    }
}

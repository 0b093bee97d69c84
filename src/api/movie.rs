//! Movie backend API client
//!
//! Looks up a movie by title and returns it together with
//! relevance-ranked recommendations.

use anyhow::Result;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::models::{ApiErrorBody, HealthStatus, MovieResponse};

/// Default backend origin when nothing else is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Message used when the backend fails without a readable error body
pub const FALLBACK_ERROR: &str = "Failed to fetch movie";

/// Movie API error types
#[derive(Error, Debug)]
pub enum MovieApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct MovieRequest<'a> {
    title: &'a str,
}

/// Client for the movie backend
#[derive(Debug, Clone)]
pub struct MovieApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl Default for MovieApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieApiClient {
    /// Create a client pointed at the default local backend
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE)
    }

    /// Create a client with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a movie and its recommendations by title.
    ///
    /// The title is sent exactly as given; callers trim it.
    pub async fn fetch_movie(&self, title: &str) -> Result<MovieResponse> {
        let url = format!("{}/api/movie", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(&MovieRequest { title })
            .send()
            .await
            .map_err(MovieApiError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(MovieApiError::from)?;

        if status.is_success() {
            let parsed: MovieResponse = serde_json::from_str(&body).map_err(|e| {
                MovieApiError::InvalidResponse(format!("JSON parse error: {}", e))
            })?;
            return Ok(parsed);
        }

        let message = error_message(&body);
        match status {
            StatusCode::NOT_FOUND => Err(MovieApiError::NotFound(message).into()),
            status => Err(MovieApiError::Server {
                status: status.as_u16(),
                message,
            }
            .into()),
        }
    }

    /// Check backend health
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}/api/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(MovieApiError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(MovieApiError::from)?;

        if !status.is_success() {
            return Err(MovieApiError::Server {
                status: status.as_u16(),
                message: error_message(&body),
            }
            .into());
        }

        parse_json(&body)
    }
}

fn parse_json<T: for<'de> Deserialize<'de>>(body: &str) -> Result<T> {
    serde_json::from_str(body)
        .map_err(|e| MovieApiError::InvalidResponse(format!("JSON parse error: {}", e)).into())
}

/// Pull the server-provided message out of an error body
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_body() {
        assert_eq!(error_message(r#"{"error": "Movie not found"}"#), "Movie not found");
    }

    #[test]
    fn test_error_message_fallbacks() {
        assert_eq!(error_message("<html>502</html>"), FALLBACK_ERROR);
        assert_eq!(error_message(r#"{"error": ""}"#), FALLBACK_ERROR);
        assert_eq!(error_message(r#"{"detail": "nope"}"#), FALLBACK_ERROR);
        assert_eq!(error_message(""), FALLBACK_ERROR);
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = MovieApiClient::with_base_url("http://example.test:5000/");
        assert_eq!(client.base_url(), "http://example.test:5000");
        assert_eq!(MovieApiClient::new().base_url(), DEFAULT_API_BASE);
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(MovieRequest { title: "Inception" }).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "Inception" }));
    }
}

//! Data structures for Cineplex
//!
//! Wire types returned by the movie backend:
//! - **Movie**: the record shown on the detail page, with its cast
//! - **Recommendation**: related titles, relevance-ranked by the backend
//! - **MovieResponse**: the `/api/movie` envelope

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// =============================================================================
// Movie Models
// =============================================================================

/// A cast entry on the detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub character: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

impl fmt::Display for CastMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.character.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} as {}", self.name, self.character)
        }
    }
}

/// Full movie record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub backdrop: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    /// Runtime in minutes
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cast: Vec<CastMember>,
    #[serde(rename = "trailerUrl", default)]
    pub trailer_url: Option<String>,
    #[serde(rename = "watchUrl", default)]
    pub watch_url: Option<String>,
}

impl Movie {
    /// Release year, taken from the first four characters of the release date
    pub fn year(&self) -> Option<&str> {
        self.release_date.as_deref().and_then(extract_year)
    }

    /// Runtime formatted as "148 min", empty when unknown
    pub fn runtime_label(&self) -> String {
        match self.runtime {
            Some(minutes) if minutes > 0 => format!("{} min", minutes),
            _ => String::new(),
        }
    }

    pub fn genres_label(&self) -> String {
        self.genres.join(" · ")
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if let Some(year) = self.year() {
            write!(f, " ({})", year)?;
        }
        let runtime = self.runtime_label();
        if !runtime.is_empty() {
            write!(f, " - {}", runtime)?;
        }
        if let Some(rating) = self.rating {
            write!(f, " - ★ {:.1}", rating)?;
        }
        Ok(())
    }
}

/// A related title shown in the recommendation grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub backdrop: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: String,
    /// Similarity to the current movie, in percent
    #[serde(default)]
    pub similarity: Option<f32>,
}

impl Recommendation {
    /// Image shown on the tile: backdrop first, poster as fallback
    pub fn preferred_image(&self) -> Option<&str> {
        self.backdrop.as_deref().or(self.poster.as_deref())
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if !self.year.is_empty() {
            write!(f, " ({})", self.year)?;
        }
        write!(f, " - ★ {:.1}", self.rating)?;
        if let Some(similarity) = self.similarity {
            write!(f, " - {:.1}% match", similarity)?;
        }
        Ok(())
    }
}

// =============================================================================
// API Envelopes
// =============================================================================

/// Successful `/api/movie` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieResponse {
    pub movie: Movie,
    /// Absent or null lists are treated as empty
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendations: Vec<Recommendation>,
}

/// Error body returned with non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// `/api/health` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub cached_movies: u64,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} cached movies)", self.status, self.cached_movies)
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Extract year from a date string like "2010-07-15"
pub fn extract_year(date: &str) -> Option<&str> {
    let year = date.get(..4)?;
    if year.chars().all(|c| c.is_ascii_digit()) {
        Some(year)
    } else {
        None
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

//! API clients for external services
//!
//! - Movie backend: title lookup and recommendations

pub mod movie;

pub use movie::{MovieApiClient, MovieApiError, DEFAULT_API_BASE};

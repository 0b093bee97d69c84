//! Cineplex - cinematic TUI for movie discovery
//!
//! Search for a title, get its details and a row of related movies,
//! and hop from one recommendation to the next.
//!
//! # Modules
//!
//! - `models` - Movie, cast and recommendation records
//! - `api` - Movie backend client
//! - `app` - Application state and the search-and-display controller
//! - `loader` - Background fetch tasks
//! - `shortcuts` - Global keyboard shortcuts
//! - `config` - Config file and backend origin resolution
//! - `logging` - Tracing setup
//! - `ui` - TUI components

pub mod models;
pub mod api;
pub mod app;
pub mod config;
pub mod loader;
pub mod logging;
pub mod shortcuts;
pub mod ui;

// Re-export commonly used types
pub use models::{CastMember, HealthStatus, Movie, MovieResponse, Recommendation};

pub use api::MovieApiClient;
pub use app::{App, LoadOutcome, LoadRequest, StaleResponsePolicy, View};
pub use config::Config;

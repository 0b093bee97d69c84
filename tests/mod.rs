//! Integration tests for Cineplex
//!
//! Tests are organized by component:
//! - movie_api_test: Movie backend client (mock HTTP server)
//! - app_test: Search-and-display controller state machine
//! - ui_test: Frame rendering with TestBackend
//! - e2e_test: Key events through loader tasks to rendered state

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs

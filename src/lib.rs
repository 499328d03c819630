//! Libris Book Catalog
//!
//! A Rust implementation of the Libris book catalog, providing a REST JSON
//! API for a paginated, searchable book list together with a client-side
//! catalog browser state machine.

use std::sync::Arc;

pub mod api;
pub mod browser;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

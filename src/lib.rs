//! Book Service
//!
//! A REST JSON API exposing create, read, update and delete operations on a
//! catalog of books stored in PostgreSQL.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use crate::config::AppConfig;
pub use crate::error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(store: Arc<dyn repository::BookStore>) -> Self {
        Self {
            services: Arc::new(services::Services::new(store)),
        }
    }
}

//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use super::{config::UploadConfig, service::admin::code::AdminCodeService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `AdminCodeService` uses `Arc` for shared state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client used to forward document uploads to the file service.
    pub http_client: reqwest::Client,

    /// Service for the one-time code that allows registering the first railway admin.
    pub admin_code_service: AdminCodeService,

    /// Public base URL, embedded in license QR codes.
    pub app_url: String,

    /// Hosted file service settings.
    pub upload: UploadConfig,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for the file service
    /// - `admin_code_service` - Service for managing admin codes
    /// - `app_url` - Application base URL
    /// - `upload` - File service settings
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        admin_code_service: AdminCodeService,
        app_url: String,
        upload: UploadConfig,
    ) -> Self {
        Self {
            db,
            http_client,
            admin_code_service,
            app_url,
            upload,
        }
    }
}

use std::path::PathBuf;

use sqlx::SqlitePool;

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Directory where uploaded documents are kept after parsing.
    pub upload_dir: PathBuf,
}

impl AppState {
    pub fn new(db: SqlitePool, config: &Config) -> Self {
        Self {
            db,
            upload_dir: PathBuf::from(&config.upload_dir),
        }
    }
}

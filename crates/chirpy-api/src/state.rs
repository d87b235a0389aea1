use std::path::PathBuf;
use std::sync::Arc;

use chirpy_db::Database;
use tracing::error;

use crate::config::{Config, Platform};
use crate::error::ApiError;
use crate::metrics::HitCounter;

pub type AppState = Arc<AppStateInner>;

/// Everything the handlers share. Built once at startup.
pub struct AppStateInner {
    pub db: Database,
    pub hits: HitCounter,
    pub platform: Platform,
    pub filepath_root: PathBuf,
}

impl AppStateInner {
    pub fn new(db: Database, config: &Config) -> AppState {
        Arc::new(Self {
            db,
            hits: HitCounter::new(),
            platform: config.platform.clone(),
            filepath_root: config.filepath_root.clone(),
        })
    }
}

/// Run a blocking database call off the async runtime.
pub(crate) async fn blocking_db<F, T>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&Database) -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(&state.db))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Storage(anyhow::anyhow!("database task failed: {}", e))
        })?
        .map_err(ApiError::Storage)
}

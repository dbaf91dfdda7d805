use std::sync::Arc;

use crate::config::Config;
use crate::store::CandidateStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Persistence for candidates and their nested records. Production wires
    /// `PgCandidateStore`; tests swap in an in-memory store.
    pub store: Arc<dyn CandidateStore>,
    pub config: Config,
}

#[cfg(test)]
impl AppState {
    pub fn for_tests(store: Arc<dyn CandidateStore>, upload_dir: std::path::PathBuf) -> Self {
        AppState {
            store,
            config: Config {
                database_url: "postgres://localhost/unused".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
                upload_dir,
                max_upload_bytes: 1024,
            },
        }
    }
}

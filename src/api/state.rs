use std::sync::Arc;

use crate::core::config::AppConfig;
use crate::github::RepositorySource;
use crate::storage::Storage;

/// Everything a handler needs, built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub storage: Arc<dyn Storage>,
    pub repositories: Arc<dyn RepositorySource>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        storage: Arc<dyn Storage>,
        repositories: Arc<dyn RepositorySource>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            storage,
            repositories,
        }
    }
}

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::DEFAULT_ENVIRONMENT;
use crate::storage::ItemRepository;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ItemRepository>,
    pub environment: Arc<str>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self {
            repo,
            environment: Arc::from(DEFAULT_ENVIRONMENT),
            started_at: Utc::now(),
        }
    }

    pub fn with_environment(mut self, environment: impl AsRef<str>) -> Self {
        self.environment = Arc::from(environment.as_ref());
        self
    }
}

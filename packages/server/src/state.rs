use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::storage::ContentStore;

#[derive(Clone)]
pub struct AppState {
    pub store: ContentStore,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        Self {
            store: ContentStore::new(db),
            config,
        }
    }
}

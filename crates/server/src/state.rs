use sqlx::SqlitePool;
use std::sync::Arc;

use crate::config::Config;
use crate::services::CapacityService;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
    pub capacity: Arc<CapacityService>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Config) -> Self {
        let capacity = Arc::new(CapacityService::new(db.clone()));

        Self {
            db,
            config: Arc::new(config),
            capacity,
        }
    }
}

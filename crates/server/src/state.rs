use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::records::{RecordRepository, RecordService, SeaOrmRecordRepository};

/// Shared by every handler; cloning is cheap.
#[derive(Clone)]
pub struct ServerState {
    pub records: RecordService,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_repository(Arc::new(SeaOrmRecordRepository::new(db)))
    }

    pub fn with_repository(repo: Arc<dyn RecordRepository>) -> Self {
        Self { records: RecordService::new(repo) }
    }
}

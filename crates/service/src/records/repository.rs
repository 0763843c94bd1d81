use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::namespace::Namespace;
use models::{character, inventory, room};

/// Point upsert and lookup of opaque payloads, per namespace.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn put(&self, ns: Namespace, key: &str, payload: &str) -> Result<(), ServiceError>;
    async fn get(&self, ns: Namespace, key: &str) -> Result<Option<String>, ServiceError>;
}

/// SeaORM-backed repository implementation.
///
/// `DatabaseConnection` is a pool handle, so one instance is shared by all
/// request handlers.
#[derive(Clone)]
pub struct SeaOrmRecordRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmRecordRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl RecordRepository for SeaOrmRecordRepository {
    async fn put(&self, ns: Namespace, key: &str, payload: &str) -> Result<(), ServiceError> {
        match ns {
            Namespace::Characters => character::upsert(&self.db, key, payload).await?,
            Namespace::Inventory => inventory::upsert(&self.db, key, payload).await?,
            Namespace::Rooms => room::upsert(&self.db, key, payload).await?,
        }
        Ok(())
    }

    async fn get(&self, ns: Namespace, key: &str) -> Result<Option<String>, ServiceError> {
        let found = match ns {
            Namespace::Characters => character::find_data(&self.db, key).await?,
            Namespace::Inventory => inventory::find_data(&self.db, key).await?,
            Namespace::Rooms => room::find_players(&self.db, key).await?,
        };
        Ok(found)
    }
}

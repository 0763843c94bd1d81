//! Migrator registering one table per record namespace.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_characters;
mod m20240601_000002_create_inventory;
mod m20240601_000003_create_rooms;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_characters::Migration),
            Box::new(m20240601_000002_create_inventory::Migration),
            Box::new(m20240601_000003_create_rooms::Migration),
        ]
    }
}

//! Create `rooms` table.
//!
//! `players` holds whatever list encoding the client sends; it is never parsed.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(string(Rooms::RoomId).primary_key())
                    .col(text(Rooms::Players).not_null())
                    .col(big_integer(Rooms::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Rooms::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Rooms { Table, RoomId, Players, UpdatedAt }

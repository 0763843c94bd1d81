//! Create `characters` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(string(Characters::Username).primary_key())
                    .col(text(Characters::Data).not_null())
                    .col(big_integer(Characters::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Characters::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Characters { Table, Username, Data, UpdatedAt }

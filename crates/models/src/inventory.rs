use sea_orm::{entity::prelude::*, sea_query::OnConflict, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub username: String,
    #[sea_orm(column_type = "Text")]
    pub data: String,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn upsert<C: ConnectionTrait>(db: &C, username: &str, data: &str) -> Result<(), ModelError> {
    if username.is_empty() { return Err(ModelError::Validation("username required".into())); }
    if data.is_empty() { return Err(ModelError::Validation("data required".into())); }
    let am = ActiveModel {
        username: Set(username.to_string()),
        data: Set(data.to_string()),
        updated_at: Set(crate::now_millis()),
    };
    Entity::insert(am)
        .on_conflict(
            OnConflict::column(Column::Username)
                .update_columns([Column::Data, Column::UpdatedAt])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    Ok(())
}

pub async fn find_data<C: ConnectionTrait>(db: &C, username: &str) -> Result<Option<String>, ModelError> {
    let row = Entity::find_by_id(username).one(db).await?;
    Ok(row.map(|m| m.data))
}

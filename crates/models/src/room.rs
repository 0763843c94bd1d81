use sea_orm::{entity::prelude::*, sea_query::OnConflict, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Player list of a room, stored exactly as the client serialized it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub room_id: String,
    #[sea_orm(column_type = "Text")]
    pub players: String,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert or overwrite the player list of `room_id` atomically.
pub async fn upsert<C: ConnectionTrait>(db: &C, room_id: &str, players: &str) -> Result<(), ModelError> {
    if room_id.is_empty() { return Err(ModelError::Validation("room_id required".into())); }
    if players.is_empty() { return Err(ModelError::Validation("players required".into())); }
    let am = ActiveModel {
        room_id: Set(room_id.to_string()),
        players: Set(players.to_string()),
        updated_at: Set(crate::now_millis()),
    };
    Entity::insert(am)
        .on_conflict(
            OnConflict::column(Column::RoomId)
                .update_columns([Column::Players, Column::UpdatedAt])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    Ok(())
}

pub async fn find_players<C: ConnectionTrait>(db: &C, room_id: &str) -> Result<Option<String>, ModelError> {
    let row = Entity::find_by_id(room_id).one(db).await?;
    Ok(row.map(|m| m.players))
}

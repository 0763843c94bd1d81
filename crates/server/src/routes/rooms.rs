use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use service::namespace::Namespace;

use crate::{errors::JsonApiError, routes::records::SaveOutput, state::ServerState};

#[derive(Debug, Deserialize)]
pub struct RoomPlayersInput {
    #[serde(default, rename = "roomId")]
    pub room_id: Option<String>,
    #[serde(default)]
    pub players: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlayersOutput {
    pub players: String,
}

pub async fn save_players(
    State(state): State<ServerState>,
    body: Result<Json<RoomPlayersInput>, JsonRejection>,
) -> Result<Json<SaveOutput>, JsonApiError> {
    let Json(input) = body.map_err(|r| JsonApiError::rejected(r, Namespace::Rooms))?;
    state
        .records
        .save(Namespace::Rooms, input.room_id.as_deref(), input.players.as_deref())
        .await
        .map_err(|e| JsonApiError::from_service(e, "Save Failed"))?;
    Ok(Json(SaveOutput { success: true, message: None }))
}

/// Unknown rooms answer `{"players": "[]"}` rather than 404.
pub async fn load_players(
    State(state): State<ServerState>,
    Path(room_id): Path<String>,
) -> Result<Json<PlayersOutput>, JsonApiError> {
    let players = state
        .records
        .load(Namespace::Rooms, &room_id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Load Failed"))?;
    Ok(Json(PlayersOutput { players }))
}

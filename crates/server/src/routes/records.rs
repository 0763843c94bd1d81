//! Character and inventory records, both keyed by username.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use service::namespace::Namespace;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Deserialize)]
pub struct UserRecordInput {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct DataOutput {
    pub data: String,
}

async fn save(
    state: &ServerState,
    ns: Namespace,
    body: Result<Json<UserRecordInput>, JsonRejection>,
) -> Result<(), JsonApiError> {
    let Json(input) = body.map_err(|r| JsonApiError::rejected(r, ns))?;
    state
        .records
        .save(ns, input.username.as_deref(), input.data.as_deref())
        .await
        .map_err(|e| JsonApiError::from_service(e, "Save Failed"))
}

async fn load(state: &ServerState, ns: Namespace, username: &str) -> Result<Json<DataOutput>, JsonApiError> {
    let data = state
        .records
        .load(ns, username)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Load Failed"))?;
    Ok(Json(DataOutput { data }))
}

pub async fn save_character(
    State(state): State<ServerState>,
    body: Result<Json<UserRecordInput>, JsonRejection>,
) -> Result<Json<SaveOutput>, JsonApiError> {
    save(&state, Namespace::Characters, body).await?;
    Ok(Json(SaveOutput { success: true, message: Some("saved") }))
}

pub async fn load_character(
    State(state): State<ServerState>,
    Path(username): Path<String>,
) -> Result<Json<DataOutput>, JsonApiError> {
    load(&state, Namespace::Characters, &username).await
}

pub async fn save_inventory(
    State(state): State<ServerState>,
    body: Result<Json<UserRecordInput>, JsonRejection>,
) -> Result<Json<SaveOutput>, JsonApiError> {
    save(&state, Namespace::Inventory, body).await?;
    Ok(Json(SaveOutput { success: true, message: None }))
}

pub async fn load_inventory(
    State(state): State<ServerState>,
    Path(username): Path<String>,
) -> Result<Json<DataOutput>, JsonApiError> {
    load(&state, Namespace::Inventory, &username).await
}

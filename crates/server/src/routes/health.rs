use axum::Json;

use common::types::{Health, Ping};

/// Liveness; never touches storage.
pub async fn root() -> Json<Health> {
    Json(Health::ok("RPG server is running"))
}

pub async fn ping() -> Json<Ping> {
    Json(Ping::now("server is healthy"))
}

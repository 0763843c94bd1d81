pub mod health;
pub mod records;
pub mod rooms;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::ServerState;

/// Build the full application router: liveness probes plus the record routes.
pub fn build_router(state: ServerState, cors: CorsLayer, body_limit: usize) -> Router {
    let public = Router::new()
        .route("/", get(health::root))
        .route("/api/ping", get(health::ping));

    let record_routes = Router::new()
        .route("/api/character/save", post(records::save_character))
        .route("/api/character/load/:username", get(records::load_character))
        .route("/api/inventory/save", post(records::save_inventory))
        .route("/api/inventory/load/:username", get(records::load_inventory))
        .route("/api/room/players", post(rooms::save_players))
        .route("/api/room/players/:room_id", get(rooms::load_players));

    public
        .merge(record_routes)
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx responses
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

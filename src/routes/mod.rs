//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the three game endpoints consumed by the polling browser client,
//! plus a liveness probe. CORS is wide open: the client may be served from
//! anywhere and every mutating request is scoped by an opaque player token.

pub mod game;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[must_use]
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/join", post(game::join))
        .route("/move", post(game::submit_move))
        .route("/state", get(game::room_state))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

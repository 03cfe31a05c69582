//! Game routes — join, move, and state polling.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::game::session::{GameError, Mode, PlayerId, RoomId, Snapshot};
use crate::services::registry::{self, RegistryError};
use crate::state::AppState;

/// Room id used when the client does not name one.
const DEFAULT_ROOM: RoomId = 1;

#[derive(Deserialize)]
pub struct JoinQuery {
    pub room: Option<String>,
    pub mode: Option<String>,
}

#[derive(Deserialize)]
pub struct RoomQuery {
    pub room: Option<String>,
}

#[derive(Serialize)]
pub struct JoinResponse {
    pub player_id: PlayerId,
    pub room_id: RoomId,
    pub mode: &'static str,
}

#[derive(Deserialize)]
pub struct MoveBody {
    pub r: i64,
    pub c: i64,
    pub player: PlayerId,
}

/// Parse the `room` query parameter the way the reference client sends it:
/// absent or unparsable ids fall back to room 1.
fn room_or_default(raw: Option<&str>) -> RoomId {
    raw.and_then(|value| value.parse().ok()).unwrap_or(DEFAULT_ROOM)
}

/// `POST /join?room={id}&mode={human|ai}` — join a room, creating it if
/// absent; responds with the issued player token.
pub async fn join(
    State(state): State<AppState>,
    Query(query): Query<JoinQuery>,
) -> Result<Json<JoinResponse>, StatusCode> {
    let room_id = room_or_default(query.room.as_deref());
    let mode = match query.mode.as_deref() {
        None => Mode::HumanVsHuman,
        Some(raw) => Mode::from_str(raw).ok_or(StatusCode::BAD_REQUEST)?,
    };

    let joined = registry::join_room(&state, room_id, mode)
        .await
        .map_err(registry_error_to_status)?;

    Ok(Json(JoinResponse {
        player_id: joined.player_id,
        room_id: joined.room_id,
        mode: joined.mode.as_str(),
    }))
}

/// `POST /move?room={id}` — submit a move for a player token.
pub async fn submit_move(
    State(state): State<AppState>,
    Query(query): Query<RoomQuery>,
    Json(body): Json<MoveBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let room_id = room_or_default(query.room.as_deref());
    registry::submit_move(&state, room_id, body.player, body.r, body.c)
        .await
        .map_err(registry_error_to_status)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `GET /state?room={id}` — latest authoritative snapshot for pollers.
pub async fn room_state(
    State(state): State<AppState>,
    Query(query): Query<RoomQuery>,
) -> Result<Json<Snapshot>, StatusCode> {
    let room_id = room_or_default(query.room.as_deref());
    let snapshot = registry::room_snapshot(&state, room_id)
        .await
        .map_err(registry_error_to_status)?;
    Ok(Json(snapshot))
}

pub(crate) fn registry_error_to_status(err: RegistryError) -> StatusCode {
    tracing::debug!(error = %err, "request rejected");
    match err {
        RegistryError::UnknownRoom(_) => StatusCode::NOT_FOUND,
        RegistryError::Game(game) => game_error_to_status(&game),
    }
}

pub(crate) fn game_error_to_status(err: &GameError) -> StatusCode {
    match err {
        GameError::IllegalMove { .. } => StatusCode::BAD_REQUEST,
        GameError::NotYourTurn | GameError::RoomFull => StatusCode::FORBIDDEN,
        GameError::GameOver => StatusCode::CONFLICT,
    }
}

#[cfg(test)]
#[path = "game_test.rs"]
mod tests;

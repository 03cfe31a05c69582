//! Session registry — room lifecycle and per-room operation dispatch.
//!
//! DESIGN
//! ======
//! Rooms are created lazily on first join and live for the process lifetime.
//! Creation is atomic: the entry API runs under the map write lock, so two
//! racing first joins to the same id observe a single session. The lock is
//! released before any game operation; those serialize on the room mutex.
//!
//! Policy: `/move` and `/state` against a never-joined room are rejected
//! with `UnknownRoom` rather than auto-created. Rooms come into existence
//! only through joins, so anything else is a client addressing bug worth
//! surfacing.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::game::board::Seat;
use crate::game::session::{GameError, GameSession, Mode, PlayerId, RoomId, Snapshot};
use crate::state::AppState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown room: {0}")]
    UnknownRoom(RoomId),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Outcome of a join: the issued token plus the session's actual mode. The
/// requested mode only matters on the creating join; later joins get
/// whatever the room already is.
#[derive(Debug, Clone, Copy)]
pub struct JoinedRoom {
    pub player_id: PlayerId,
    pub seat: Seat,
    pub room_id: RoomId,
    pub mode: Mode,
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Join a room, creating it with `requested_mode` on first contact.
///
/// # Errors
///
/// `RoomFull` when every seat in the room is already owned.
pub async fn join_room(
    state: &AppState,
    room_id: RoomId,
    requested_mode: Mode,
) -> Result<JoinedRoom, RegistryError> {
    let session = {
        let mut rooms = state.rooms.write().await;
        rooms
            .entry(room_id)
            .or_insert_with(|| {
                info!(room_id, mode = requested_mode.as_str(), "room created");
                Arc::new(Mutex::new(GameSession::new(room_id, requested_mode)))
            })
            .clone()
    };

    let mut session = session.lock().await;
    let (player_id, seat) = session.join()?;
    info!(room_id, seat = ?seat, mode = session.mode().as_str(), "player joined");
    Ok(JoinedRoom { player_id, seat, room_id, mode: session.mode() })
}

/// Validate and apply one move in the given room.
///
/// # Errors
///
/// `UnknownRoom` for rooms never joined; otherwise whatever
/// [`GameSession::play`] rejects with.
pub async fn submit_move(
    state: &AppState,
    room_id: RoomId,
    player: PlayerId,
    row: i64,
    col: i64,
) -> Result<(), RegistryError> {
    let session = room(state, room_id).await?;
    let mut session = session.lock().await;
    session.play(player, row, col)?;
    debug!(room_id, row, col, status = session.status().as_str(), "move applied");
    Ok(())
}

/// Latest authoritative snapshot of a room, for pollers.
///
/// # Errors
///
/// `UnknownRoom` for rooms never joined.
pub async fn room_snapshot(state: &AppState, room_id: RoomId) -> Result<Snapshot, RegistryError> {
    let session = room(state, room_id).await?;
    let session = session.lock().await;
    Ok(session.snapshot())
}

async fn room(state: &AppState, room_id: RoomId) -> Result<Arc<Mutex<GameSession>>, RegistryError> {
    let rooms = state.rooms.read().await;
    rooms
        .get(&room_id)
        .cloned()
        .ok_or(RegistryError::UnknownRoom(room_id))
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;

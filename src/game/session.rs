//! Per-room game session state machine.
//!
//! DESIGN
//! ======
//! A session owns the authoritative state of one room: board, turn, seat
//! assignments, mode, and status. The state machine is
//! WaitingForPlayers → InProgress → {BlackWins, WhiteWins, Draw}; no
//! transition leaves a terminal state, and terminal sessions accept no
//! further moves. In AI mode the reply move is computed and applied
//! synchronously inside `play`, under the same room lock as the human move,
//! so a poller can never observe the half-completed exchange.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::board::{Board, SIZE, Seat};
use crate::services::ai;

/// Integer room identifier, from the client's `?room=` parameter.
pub type RoomId = u32;

// =============================================================================
// TYPES
// =============================================================================

/// Opaque per-player token, issued at join time. Serialized as a UUID string
/// so identifiers never collide across rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

/// Game mode, fixed at room creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    HumanVsHuman,
    HumanVsAi,
}

impl Mode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HumanVsHuman => "human",
            Self::HumanVsAi => "ai",
        }
    }

    #[must_use]
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "human" => Some(Self::HumanVsHuman),
            "ai" => Some(Self::HumanVsAi),
            _ => None,
        }
    }
}

/// Session lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    WaitingForPlayers,
    InProgress,
    BlackWins,
    WhiteWins,
    Draw,
}

impl Status {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WaitingForPlayers => "waiting",
            Self::InProgress => "active",
            Self::BlackWins => "black_wins",
            Self::WhiteWins => "white_wins",
            Self::Draw => "draw",
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::BlackWins | Self::WhiteWins | Self::Draw)
    }
}

/// Who owns a seat once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatOwner {
    Human(PlayerId),
    Ai,
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("room is full")]
    RoomFull,
    #[error("not your turn")]
    NotYourTurn,
    #[error("game is over")]
    GameOver,
    #[error("illegal move at ({row}, {col})")]
    IllegalMove { row: i64, col: i64 },
}

/// Read-only view of a session, shaped for the polling client.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub board: [[u8; SIZE]; SIZE],
    pub status: &'static str,
    /// 1 = black, 2 = white, 0 when the game is not in progress.
    pub turn: u8,
    pub mode: &'static str,
    pub room_id: RoomId,
}

// =============================================================================
// SESSION
// =============================================================================

pub struct GameSession {
    room_id: RoomId,
    board: Board,
    turn: Seat,
    mode: Mode,
    black: Option<SeatOwner>,
    white: Option<SeatOwner>,
    status: Status,
}

impl GameSession {
    /// Fresh session with the standard starting board. In AI mode the AI
    /// takes the white seat immediately; black always moves first.
    #[must_use]
    pub fn new(room_id: RoomId, mode: Mode) -> Self {
        let white = match mode {
            Mode::HumanVsHuman => None,
            Mode::HumanVsAi => Some(SeatOwner::Ai),
        };
        Self {
            room_id,
            board: Board::initial(),
            turn: Seat::Black,
            mode,
            black: None,
            white,
            status: Status::WaitingForPlayers,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Assign the next open seat (black first, then white) and issue a fresh
    /// player token. The game starts exactly when the last seat fills.
    ///
    /// # Errors
    ///
    /// `RoomFull` when both seats are already owned.
    pub fn join(&mut self) -> Result<(PlayerId, Seat), GameError> {
        let player = PlayerId::new();
        let seat = if self.black.is_none() {
            self.black = Some(SeatOwner::Human(player));
            Seat::Black
        } else if self.white.is_none() {
            self.white = Some(SeatOwner::Human(player));
            Seat::White
        } else {
            return Err(GameError::RoomFull);
        };

        if self.status == Status::WaitingForPlayers && self.black.is_some() && self.white.is_some()
        {
            self.status = Status::InProgress;
        }
        Ok((player, seat))
    }

    /// The seat held by `player` in this session, if any.
    #[must_use]
    pub fn seat_of(&self, player: PlayerId) -> Option<Seat> {
        if self.owner(Seat::Black) == Some(SeatOwner::Human(player)) {
            Some(Seat::Black)
        } else if self.owner(Seat::White) == Some(SeatOwner::Human(player)) {
            Some(Seat::White)
        } else {
            None
        }
    }

    /// Validate and apply one move for `player`, advance the turn (honoring
    /// the pass rule), finalize the status when neither seat can move, and
    /// in AI mode apply the AI's replies before returning.
    ///
    /// # Errors
    ///
    /// `GameOver` once the session is terminal; `NotYourTurn` when the game
    /// has not started, the token holds no seat here, or the seat is not on
    /// turn; `IllegalMove` when the placement flips nothing. A rejected move
    /// leaves the board untouched.
    pub fn play(&mut self, player: PlayerId, row: i64, col: i64) -> Result<(), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        if self.status != Status::InProgress {
            return Err(GameError::NotYourTurn);
        }
        let seat = self.seat_of(player).ok_or(GameError::NotYourTurn)?;
        if seat != self.turn {
            return Err(GameError::NotYourTurn);
        }

        let (r, c) = coords(row, col).ok_or(GameError::IllegalMove { row, col })?;
        let next = self
            .board
            .apply_move(seat, r, c)
            .ok_or(GameError::IllegalMove { row, col })?;
        self.board = next;
        self.advance_from(seat);

        // The AI replies until the turn returns to the human or the game
        // ends. A pass by the human hands consecutive moves to the AI.
        while self.status == Status::InProgress && self.owner(self.turn) == Some(SeatOwner::Ai) {
            let Some((ar, ac)) = ai::choose_move(&self.board, self.turn) else {
                break;
            };
            let Some(next) = self.board.apply_move(self.turn, ar, ac) else {
                break;
            };
            tracing::debug!(room_id = self.room_id, row = ar, col = ac, "ai reply");
            let mover = self.turn;
            self.board = next;
            self.advance_from(mover);
        }
        Ok(())
    }

    /// Side-effect-free view for `/state`.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let turn = if self.status == Status::InProgress {
            self.turn.wire()
        } else {
            0
        };
        Snapshot {
            board: self.board.grid(),
            status: self.status.as_str(),
            turn,
            mode: self.mode.as_str(),
            room_id: self.room_id,
        }
    }

    fn owner(&self, seat: Seat) -> Option<SeatOwner> {
        match seat {
            Seat::Black => self.black,
            Seat::White => self.white,
        }
    }

    /// Turn handoff after `mover` placed a disc: the opponent if they can
    /// answer, the mover again if only they can (pass rule), otherwise the
    /// game ends on disc count.
    fn advance_from(&mut self, mover: Seat) {
        if self.board.is_terminal() {
            let score = self.board.score();
            self.status = if score.black > score.white {
                Status::BlackWins
            } else if score.white > score.black {
                Status::WhiteWins
            } else {
                Status::Draw
            };
        } else if self.board.has_legal_move(mover.opponent()) {
            self.turn = mover.opponent();
        } else {
            self.turn = mover;
        }
    }
}

/// Bounds-check raw client coordinates.
fn coords(row: i64, col: i64) -> Option<(usize, usize)> {
    let r = usize::try_from(row).ok()?;
    let c = usize::try_from(col).ok()?;
    (r < SIZE && c < SIZE).then_some((r, c))
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

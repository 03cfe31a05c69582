//! AI agent — move chooser for the AI seat.
//!
//! DESIGN
//! ======
//! Greedy max-flip: score every legal placement by the number of discs it
//! flips and pick one of the best at random. The only contract is legality;
//! the session passes instead of calling in when no legal move exists.

use rand::Rng;

use crate::game::board::{Board, Seat};

/// Choose a legal move for `seat`, or `None` when `seat` has none.
#[must_use]
pub fn choose_move(board: &Board, seat: Seat) -> Option<(usize, usize)> {
    let moves = board.legal_moves(seat);
    let best = moves
        .iter()
        .map(|&(row, col)| board.flip_count(seat, row, col))
        .max()?;
    let candidates: Vec<(usize, usize)> = moves
        .into_iter()
        .filter(|&(row, col)| board.flip_count(seat, row, col) == best)
        .collect();
    let pick = rand::rng().random_range(0..candidates.len());
    candidates.get(pick).copied()
}

#[cfg(test)]
#[path = "ai_test.rs"]
mod tests;

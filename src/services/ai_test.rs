use super::*;
use crate::game::board::SIZE;

// =============================================================================
// legality
// =============================================================================

#[test]
fn chosen_move_is_always_legal_on_initial_board() {
    let board = Board::initial();
    for _ in 0..20 {
        let (row, col) = choose_move(&board, Seat::Black).unwrap();
        assert!(board.is_legal(Seat::Black, row, col));
        let (row, col) = choose_move(&board, Seat::White).unwrap();
        assert!(board.is_legal(Seat::White, row, col));
    }
}

#[test]
fn returns_none_when_no_legal_move_exists() {
    // No white discs: black has nothing to flip and vice versa.
    let mut grid = [[0_u8; SIZE]; SIZE];
    grid[0][0] = 1;
    grid[0][1] = 1;
    let board = Board::from_grid(grid);
    assert!(choose_move(&board, Seat::Black).is_none());
    assert!(choose_move(&board, Seat::White).is_none());
}

// =============================================================================
// greedy preference
// =============================================================================

#[test]
fn prefers_the_move_with_the_most_flips() {
    // (0, 4) flips three discs, (2, 2) flips one; greedy must take (0, 4).
    let mut grid = [[0_u8; SIZE]; SIZE];
    grid[0][0] = 1;
    grid[0][1] = 2;
    grid[0][2] = 2;
    grid[0][3] = 2;
    grid[2][0] = 1;
    grid[2][1] = 2;
    let board = Board::from_grid(grid);

    for _ in 0..10 {
        assert_eq!(choose_move(&board, Seat::Black), Some((0, 4)));
    }
}

#[test]
fn tie_break_stays_within_the_best_set() {
    // All four opening moves flip exactly one disc; any of them is fine.
    let board = Board::initial();
    let legal = board.legal_moves(Seat::Black);
    for _ in 0..20 {
        let chosen = choose_move(&board, Seat::Black).unwrap();
        assert!(legal.contains(&chosen));
        assert_eq!(board.flip_count(Seat::Black, chosen.0, chosen.1), 1);
    }
}

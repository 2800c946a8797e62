//! Board evaluation helpers used to guide the heuristic search.
use crate::engine::{Board, BOARD_SIZE};

/// Returns the goal cell of a tile value.
///
/// Tile `v` belongs at row `(v - 1) / 3`, column `(v - 1) % 3`; tile 1 sits
/// in the top-left corner and tile 8 immediately left of the blank.
///
/// # Arguments
/// * `value`: A non-blank tile value in `1..=8`.
///
/// # Panics
/// Panics in debug builds if called with the blank (`0`), which has no fixed
/// goal cell of its own.
pub fn goal_position(value: u8) -> (usize, usize) {
    debug_assert!(value != 0, "the blank has no goal cell");
    let index = (value - 1) as usize;
    (index / BOARD_SIZE, index % BOARD_SIZE)
}

/// Sums the Manhattan distances of all non-blank tiles to their goal cells.
///
/// Each move slides exactly one tile by one grid step, so the total can
/// shrink by at most 1 per move: the result never overestimates the number
/// of moves still needed, which makes it an admissible (and consistent)
/// estimate for the A* solver.
///
/// # Arguments
/// * `board`: The board to evaluate.
///
/// # Returns
/// The summed distance as `u32`; `0` exactly when every tile is home.
///
/// # Examples
///
/// ```
/// use eight_puzzle_solver::engine::Board;
/// use eight_puzzle_solver::heuristics::manhattan_distance;
///
/// assert_eq!(manhattan_distance(&Board::goal()), 0);
///
/// // Tile 8 is one column away from home.
/// let one_off = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
/// assert_eq!(manhattan_distance(&one_off), 1);
/// ```
pub fn manhattan_distance(board: &Board) -> u32 {
    let mut distance = 0u32;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let value = board.get_tile(r, c);
            if value != 0 {
                let (goal_r, goal_c) = goal_position(value);
                distance += (r as isize - goal_r as isize).unsigned_abs() as u32;
                distance += (c as isize - goal_c as isize).unsigned_abs() as u32;
            }
        }
    }
    distance
}

//! Core game engine for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Move`: the four directions the blank cell can slide.
//! - `Board`: the 3x3 tile grid, with methods for enumerating and applying
//!   moves, the inversion-parity solvability test, and random generation of
//!   solvable starting boards.
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Defines the width and height of the puzzle grid. The board is always
/// square; a `BOARD_SIZE` of 3 means the classic 8-puzzle on a 3x3 grid.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board, and also the exclusive upper bound of the
/// tile values (`0..CELL_COUNT`, with `0` denoting the blank).
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A single slide of the blank cell in one of the four grid directions.
///
/// A move describes how the *blank* shifts: `Move::Up` moves the blank one
/// row up, which visually slides the tile above it one row down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Blank moves one row up.
    Up,
    /// Blank moves one row down.
    Down,
    /// Blank moves one column left.
    Left,
    /// Blank moves one column right.
    Right,
}

impl Move {
    /// All four moves in the fixed order used for move enumeration.
    ///
    /// The order is deterministic so that repeated searches over the same
    /// board explore successors in the same sequence.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Returns the `(row, column)` displacement the move applies to the
    /// blank's position.
    ///
    /// # Examples
    ///
    /// ```
    /// use eight_puzzle_solver::engine::Move;
    /// assert_eq!(Move::Up.delta(), (-1, 0));
    /// assert_eq!(Move::Right.delta(), (0, 1));
    /// ```
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// Returns the move that undoes this one.
    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// The 8-puzzle board: a 3x3 grid holding each of the values `0..=8` exactly
/// once, where `0` marks the blank cell.
///
/// `Board` is a plain value type. Comparing two boards compares all nine
/// cells, and the derived `Hash` covers the full grid, so boards serve
/// directly as keys in the solvers' visited sets. Applying a move never
/// mutates a board; it returns a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[u8; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Returns the goal configuration: tiles `1..=8` in row-major order with
    /// the blank in the bottom-right cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// let goal = Board::goal();
    /// assert_eq!(goal.get_tile(0, 0), 1);
    /// assert_eq!(goal.get_tile(2, 2), 0);
    /// assert!(goal.is_solved());
    /// ```
    pub fn goal() -> Self {
        Board {
            grid: [[1, 2, 3], [4, 5, 6], [7, 8, 0]],
        }
    }

    /// Creates a board from a raw grid, validating the tile invariant.
    ///
    /// Every value `0..=8` must appear exactly once; `0` is the blank.
    ///
    /// # Arguments
    /// * `grid`: The 3x3 cell values, row-major.
    ///
    /// # Returns
    /// * `Ok(Board)` if the grid is a permutation of `0..=8`.
    /// * `Err(String)` if a value is out of range or appears twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// assert!(Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).is_ok());
    /// assert!(Board::from_grid([[1, 1, 3], [4, 5, 6], [7, 0, 8]]).is_err());
    /// ```
    pub fn from_grid(grid: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, String> {
        let mut seen = [false; CELL_COUNT];
        for row in &grid {
            for &value in row {
                if value as usize >= CELL_COUNT {
                    return Err(format!(
                        "Tile value {} is out of range (expected 0..={})",
                        value,
                        CELL_COUNT - 1
                    ));
                }
                if seen[value as usize] {
                    return Err(format!("Tile value {} appears more than once", value));
                }
                seen[value as usize] = true;
            }
        }
        Ok(Board { grid })
    }

    /// Returns the tile at the specified row (`r`) and column (`c`).
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board dimensions
    /// (`0 <= r < BOARD_SIZE`, `0 <= c < BOARD_SIZE`).
    pub fn get_tile(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    /// Returns an immutable reference to the underlying 3x3 grid.
    ///
    /// This is the board's exchange representation: a 3x3 array of small
    /// integers with `0` for the blank, exactly as clients of the original
    /// game expect to receive it.
    pub fn get_grid(&self) -> &[[u8; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    /// Returns the `(row, column)` of the blank cell.
    ///
    /// The position is recomputed by scanning the grid; it is not cached.
    pub fn blank_position(&self) -> (usize, usize) {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if self.grid[r][c] == 0 {
                    return (r, c);
                }
            }
        }
        unreachable!("Board invariant guarantees exactly one blank cell")
    }

    /// Returns the moves that keep the blank inside the grid, in the fixed
    /// `Move::ALL` order.
    ///
    /// # Examples
    ///
    /// ```
    /// use eight_puzzle_solver::engine::{Board, Move};
    /// // Blank in the bottom-right corner: it can only go up or left.
    /// assert_eq!(Board::goal().legal_moves(), vec![Move::Up, Move::Left]);
    /// ```
    pub fn legal_moves(&self) -> Vec<Move> {
        let (blank_r, blank_c) = self.blank_position();
        Move::ALL
            .iter()
            .copied()
            .filter(|mv| {
                let (dr, dc) = mv.delta();
                let nr = blank_r as isize + dr;
                let nc = blank_c as isize + dc;
                nr >= 0 && nr < BOARD_SIZE as isize && nc >= 0 && nc < BOARD_SIZE as isize
            })
            .collect()
    }

    /// Applies a move to the board, producing a new board.
    ///
    /// The blank cell and the cell it slides onto swap values; the input
    /// board is left untouched.
    ///
    /// # Arguments
    /// * `mv`: The direction to slide the blank.
    ///
    /// # Returns
    /// * `Some(Board)` with the move applied, if the move keeps the blank in
    ///   bounds.
    /// * `None` if the move would push the blank off the grid. The board is
    ///   never partially modified.
    pub fn apply_move(&self, mv: Move) -> Option<Board> {
        let (blank_r, blank_c) = self.blank_position();
        let (dr, dc) = mv.delta();
        let nr = blank_r as isize + dr;
        let nc = blank_c as isize + dc;

        if nr < 0 || nr >= BOARD_SIZE as isize || nc < 0 || nc >= BOARD_SIZE as isize {
            return None;
        }

        let (nr, nc) = (nr as usize, nc as usize);
        let mut next = *self;
        next.grid[blank_r][blank_c] = next.grid[nr][nc];
        next.grid[nr][nc] = 0;
        Some(next)
    }

    /// Returns `true` if the board equals the goal configuration.
    pub fn is_solved(&self) -> bool {
        *self == Self::goal()
    }

    /// Tests whether the board can reach the goal configuration at all.
    ///
    /// Flattens the grid, drops the blank, and counts inversions (pairs that
    /// appear in the wrong relative order). On an odd-width board a
    /// configuration is reachable from the goal exactly when the inversion
    /// count is even; every legal slide preserves that parity, and the goal
    /// itself has zero inversions.
    ///
    /// # Examples
    ///
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// assert!(Board::goal().is_solvable());
    /// // Swapping two adjacent tiles flips the parity.
    /// let twisted = Board::from_grid([[2, 1, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
    /// assert!(!twisted.is_solvable());
    /// ```
    pub fn is_solvable(&self) -> bool {
        let flat: Vec<u8> = self.grid.iter().flatten().copied().collect();
        Self::count_inversions(&flat) % 2 == 0
    }

    fn count_inversions(flat: &[u8]) -> usize {
        flat.iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(i, &value)| {
                flat[i + 1..]
                    .iter()
                    .filter(|&&later| later != 0 && later < value)
                    .count()
            })
            .sum()
    }

    /// Creates a uniformly random solvable board.
    ///
    /// Shuffles the tile values `0..=8` uniformly and retries until the
    /// result passes `is_solvable`. Exactly half of all permutations are
    /// solvable, so this takes two attempts on average. Rejection keeps the
    /// distribution uniform over the solvable boards, which a hand-built
    /// "fixup" construction would not guarantee.
    ///
    /// # Arguments
    /// * `rng`: The randomness source. Pass a seeded generator for
    ///   reproducible boards.
    pub fn new_shuffled(rng: &mut impl Rng) -> Self {
        let mut tiles: Vec<u8> = (0..CELL_COUNT as u8).collect();
        loop {
            tiles.shuffle(rng);

            let mut grid = [[0u8; BOARD_SIZE]; BOARD_SIZE];
            for r in 0..BOARD_SIZE {
                for c in 0..BOARD_SIZE {
                    grid[r][c] = tiles[r * BOARD_SIZE + c];
                }
            }

            let board = Board { grid };
            if board.is_solvable() {
                return board;
            }
        }
    }

    /// Creates a random solvable board from a seed.
    ///
    /// The same seed always produces the same board; different seeds
    /// produce independent shuffles.
    ///
    /// # Arguments
    /// * `seed`: A `u64` value used to seed the random number generator.
    pub fn new_shuffled_with_seed(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::new_shuffled(&mut rng)
    }
}

impl fmt::Display for Board {
    /// Renders the grid as three space-separated rows with `.` for the blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if value == 0 {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", value)?;
                }
            }
            if r < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

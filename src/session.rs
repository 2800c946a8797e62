//! Game session: a shuffled board stepped through its precomputed solution.
//!
//! A `Game` owns everything one running puzzle needs — the current board,
//! the solution path, and the index of the next move to apply — so callers
//! can hold several independent sessions and tests can run in isolation.
//! The session exposes the two operations of the original game surface:
//! `start` (deal a fresh solvable puzzle and plan its solution) and
//! `advance` (apply the next planned move).
use crate::engine::{Board, Move};
use crate::solver::SolverKind;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// The boundary value returned by `start` and `advance`: the board as seen
/// by a client, plus whether the walkthrough has ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    /// The current board. `get_grid` yields the 3x3 small-integer form.
    pub board: Board,
    /// `true` once every planned move has been applied.
    pub finished: bool,
}

/// Manages the state and progression of one 8-puzzle walkthrough.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::session::Game;
/// use eight_puzzle_solver::solver::SolverKind;
///
/// let mut game = Game::with_seed(SolverKind::AStar, 7);
/// let mut snapshot = game.start();
/// while !snapshot.finished {
///     snapshot = game.advance();
/// }
/// assert!(snapshot.board.is_solved());
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    solution: Vec<Move>,
    next_move: usize,
    solver: SolverKind,
    rng: SmallRng,
}

impl Game {
    /// Creates a session with an entropy-seeded randomness source.
    ///
    /// The session idles on the solved goal board until the first `start`;
    /// an early `advance` is a finished no-op rather than an error.
    ///
    /// # Arguments
    /// * `solver`: The strategy used to plan each puzzle's solution. Picked
    ///   once per session; there is no per-move strategy switch.
    pub fn new(solver: SolverKind) -> Self {
        Self::from_rng(solver, SmallRng::from_entropy())
    }

    /// Creates a session whose sequence of puzzles derives from `seed`.
    ///
    /// Two sessions with the same solver and seed deal identical boards and
    /// plan identical solutions.
    pub fn with_seed(solver: SolverKind, seed: u64) -> Self {
        Self::from_rng(solver, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(solver: SolverKind, rng: SmallRng) -> Self {
        Game {
            board: Board::goal(),
            solution: Vec::new(),
            next_move: 0,
            solver,
            rng,
        }
    }

    /// Returns an immutable reference to the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the planned solution path for the current puzzle.
    ///
    /// The path is fixed at `start`; `advance` consumes it positionally
    /// without modifying it.
    pub fn solution(&self) -> &[Move] {
        &self.solution
    }

    /// Returns how many planned moves have not been applied yet.
    pub fn moves_remaining(&self) -> usize {
        self.solution.len() - self.next_move
    }

    /// Returns `true` once the walkthrough has applied every planned move.
    pub fn is_finished(&self) -> bool {
        self.next_move >= self.solution.len()
    }

    /// Deals a fresh solvable puzzle and plans its full solution.
    ///
    /// Any previous puzzle is discarded wholesale: the board is regenerated,
    /// the solution recomputed with the session's strategy, and progress
    /// reset.
    ///
    /// # Returns
    /// A snapshot of the new board. `finished` is `false` except in the
    /// degenerate case where the shuffle happens to deal the goal board
    /// itself (an empty solution).
    ///
    /// # Panics
    /// Panics if the solver reports no solution, which cannot happen for a
    /// generated board — the generator only emits solvable shuffles.
    pub fn start(&mut self) -> GameSnapshot {
        self.board = Board::new_shuffled(&mut self.rng);
        self.solution = self
            .solver
            .solve(&self.board)
            .expect("generated boards are always solvable");
        self.next_move = 0;
        self.snapshot()
    }

    /// Applies the next planned move, if any remain.
    ///
    /// Once the solution is exhausted the call is a no-op that keeps
    /// returning the same finished snapshot, so clients may poll past the
    /// end safely.
    pub fn advance(&mut self) -> GameSnapshot {
        if let Some(&mv) = self.solution.get(self.next_move) {
            // Planned moves are legal for the board they were computed on.
            self.board = self
                .board
                .apply_move(mv)
                .expect("solution moves are legal by construction");
            self.next_move += 1;
        }
        self.snapshot()
    }

    fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            finished: self.is_finished(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_before_start_is_a_finished_default() {
        let mut game = Game::with_seed(SolverKind::Bfs, 0);
        let snapshot = game.advance();
        assert!(snapshot.finished);
        assert!(snapshot.board.is_solved());

        // Repeating changes nothing.
        assert_eq!(game.advance(), snapshot);
    }

    #[test]
    fn test_start_deals_a_solvable_puzzle() {
        let mut game = Game::with_seed(SolverKind::AStar, 3);
        let snapshot = game.start();
        assert!(snapshot.board.is_solvable());
        assert_eq!(snapshot.board, *game.board());
        assert_eq!(snapshot.finished, game.solution().is_empty());
        assert_eq!(game.moves_remaining(), game.solution().len());
    }

    #[test]
    fn test_walkthrough_reaches_the_goal() {
        let mut game = Game::with_seed(SolverKind::AStar, 11);
        let mut snapshot = game.start();
        let planned = game.solution().len();

        let mut steps = 0;
        while !snapshot.finished {
            snapshot = game.advance();
            steps += 1;
        }

        assert_eq!(steps, planned);
        assert!(snapshot.board.is_solved());
        assert!(game.is_finished());

        // One further advance is a no-op on the finished board.
        let after = game.advance();
        assert_eq!(after, snapshot);
    }

    #[test]
    fn test_sessions_with_same_seed_match() {
        let mut a = Game::with_seed(SolverKind::AStar, 99);
        let mut b = Game::with_seed(SolverKind::AStar, 99);
        assert_eq!(a.start(), b.start());
        assert_eq!(a.solution(), b.solution());
        assert_eq!(a.advance(), b.advance());
    }

    #[test]
    fn test_start_resets_progress() {
        let mut game = Game::with_seed(SolverKind::Bfs, 5);
        game.start();
        game.advance();
        game.advance();

        let snapshot = game.start();
        assert_eq!(game.moves_remaining(), game.solution().len());
        assert_eq!(snapshot.board, *game.board());
    }

    #[test]
    fn test_both_strategies_complete_the_same_seeded_puzzle() {
        let mut bfs_game = Game::with_seed(SolverKind::Bfs, 21);
        let mut astar_game = Game::with_seed(SolverKind::AStar, 21);

        let bfs_start = bfs_game.start();
        let astar_start = astar_game.start();
        assert_eq!(bfs_start.board, astar_start.board);
        assert_eq!(bfs_game.solution().len(), astar_game.solution().len());
    }
}

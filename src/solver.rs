//! Shortest-path solvers for the 8-puzzle.
//!
//! Two interchangeable strategies share the same contract: given a starting
//! `Board`, return a shortest sequence of blank slides reaching the goal, or
//! `None` if the goal is unreachable. `solve_bfs` explores the state graph
//! in increasing move-count order; `solve_astar` orders exploration by
//! estimated total cost and reaches the same optimal length while expanding
//! far fewer boards.
use crate::engine::{Board, Move};
use crate::heuristics::manhattan_distance;
use clap::ValueEnum;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::fmt;

/// Counters describing how much of the state space a search touched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards taken off the frontier and expanded.
    pub expanded: usize,
    /// Boards pushed onto the frontier, duplicates included.
    pub generated: usize,
}

/// The available solving strategies.
///
/// Both find optimal (shortest) paths; they differ only in how much of the
/// state space they explore on the way. The strategy is picked once per
/// process by the hosting binary, not per request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SolverKind {
    /// Uninformed breadth-first search.
    Bfs,
    /// A* search guided by the Manhattan-distance heuristic.
    #[value(name = "astar")]
    AStar,
}

impl SolverKind {
    /// Runs the selected strategy on `start`.
    pub fn solve(&self, start: &Board) -> Option<Vec<Move>> {
        match self {
            SolverKind::Bfs => solve_bfs(start),
            SolverKind::AStar => solve_astar(start),
        }
    }

    /// Runs the selected strategy and reports search-effort counters.
    pub fn solve_counted(&self, start: &Board) -> (Option<Vec<Move>>, SearchStats) {
        match self {
            SolverKind::Bfs => solve_bfs_counted(start),
            SolverKind::AStar => solve_astar_counted(start),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            SolverKind::Bfs => "bfs",
            SolverKind::AStar => "astar",
        };
        write!(f, "{}", s)
    }
}

/// Finds a shortest solution path using breadth-first search.
///
/// # Arguments
/// * `start`: The board to solve.
///
/// # Returns
/// * `Some(path)` with a shortest move sequence from `start` to the goal;
///   empty when `start` is already solved.
/// * `None` if the goal is unreachable from `start` (an unsolvable board).
pub fn solve_bfs(start: &Board) -> Option<Vec<Move>> {
    solve_bfs_counted(start).0
}

/// Breadth-first search variant that also reports effort counters.
///
/// The frontier is a FIFO queue of `(board, path)` pairs, so boards are
/// dequeued in non-decreasing path-length order and the first goal dequeued
/// carries a minimal path. Each distinct board is expanded at most once; the
/// visited set is keyed by the full nine-cell grid.
pub fn solve_bfs_counted(start: &Board) -> (Option<Vec<Move>>, SearchStats) {
    let mut stats = SearchStats::default();
    let mut visited: HashSet<Board> = HashSet::new();
    let mut frontier: VecDeque<(Board, Vec<Move>)> = VecDeque::new();

    frontier.push_back((*start, Vec::new()));
    stats.generated += 1;

    while let Some((board, path)) = frontier.pop_front() {
        if board.is_solved() {
            return (Some(path), stats);
        }
        if !visited.insert(board) {
            continue;
        }
        stats.expanded += 1;

        for mv in board.legal_moves() {
            // legal_moves only yields in-bounds slides, so apply_move succeeds.
            if let Some(next) = board.apply_move(mv) {
                let mut next_path = path.clone();
                next_path.push(mv);
                frontier.push_back((next, next_path));
                stats.generated += 1;
            }
        }
    }

    (None, stats)
}

/// A frontier entry ordered by estimated total cost `f = g + h`.
///
/// `BinaryHeap` is a max-heap, so the comparison is reversed to pop the
/// lowest `f` first. Entries with equal `f` pop in insertion order via the
/// monotonically increasing sequence number; the ordering never inspects
/// the board contents.
struct AStarNode {
    f: u32,
    seq: u64,
    g: u32,
    board: Board,
    path: Vec<Move>,
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for AStarNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AStarNode {}

/// Finds a shortest solution path using A* with the Manhattan heuristic.
///
/// Same contract as `solve_bfs`: the heuristic is admissible and consistent,
/// so the first goal popped from the priority frontier carries an optimal
/// path.
///
/// # Arguments
/// * `start`: The board to solve.
///
/// # Returns
/// * `Some(path)` with a shortest move sequence, or `None` if the goal is
///   unreachable.
pub fn solve_astar(start: &Board) -> Option<Vec<Move>> {
    solve_astar_counted(start).0
}

/// A* variant that also reports effort counters.
///
/// Visited-set semantics mirror the breadth-first search: each distinct
/// board is expanded at most once, checked when the board is popped.
pub fn solve_astar_counted(start: &Board) -> (Option<Vec<Move>>, SearchStats) {
    let mut stats = SearchStats::default();
    let mut visited: HashSet<Board> = HashSet::new();
    let mut open: BinaryHeap<AStarNode> = BinaryHeap::new();
    let mut seq = 0u64;

    open.push(AStarNode {
        f: manhattan_distance(start),
        seq,
        g: 0,
        board: *start,
        path: Vec::new(),
    });
    seq += 1;
    stats.generated += 1;

    while let Some(node) = open.pop() {
        if node.board.is_solved() {
            return (Some(node.path), stats);
        }
        if !visited.insert(node.board) {
            continue;
        }
        stats.expanded += 1;

        for mv in node.board.legal_moves() {
            if let Some(next) = node.board.apply_move(mv) {
                let g = node.g + 1;
                let mut path = node.path.clone();
                path.push(mv);
                open.push(AStarNode {
                    f: g + manhattan_distance(&next),
                    seq,
                    g,
                    board: next,
                    path,
                });
                seq += 1;
                stats.generated += 1;
            }
        }
    }

    (None, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_array;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    /// Walks a seeded random path away from the goal. The result is solvable
    /// by construction and its optimal solution is at most `steps` long.
    fn scrambled(seed: u64, steps: usize) -> Board {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::goal();
        for _ in 0..steps {
            let moves = board.legal_moves();
            let mv = moves[rng.gen_range(0..moves.len())];
            board = board.apply_move(mv).unwrap();
        }
        board
    }

    fn replay(start: &Board, path: &[Move]) -> Board {
        let mut board = *start;
        for &mv in path {
            board = board
                .apply_move(mv)
                .expect("solution paths contain only legal moves");
        }
        board
    }

    #[test]
    fn test_single_move_scenario() {
        // Blank one slide left of home; tile 8 slides left as the blank
        // moves right.
        let board = board_from_str_array(&["123", "456", "708"]).unwrap();
        assert_eq!(solve_bfs(&board), Some(vec![Move::Right]));
        assert_eq!(solve_astar(&board), Some(vec![Move::Right]));
    }

    #[test]
    fn test_already_solved_board_yields_empty_path() {
        let goal = Board::goal();
        assert_eq!(solve_bfs(&goal), Some(Vec::new()));
        assert_eq!(solve_astar(&goal), Some(Vec::new()));
    }

    #[test]
    fn test_unsolvable_board_yields_none() {
        // Tiles 7 and 8 swapped: odd inversion count.
        let board = board_from_str_array(&["123", "456", "870"]).unwrap();
        assert!(!board.is_solvable());
        assert_eq!(solve_bfs(&board), None);
        assert_eq!(solve_astar(&board), None);
    }

    #[test]
    fn test_bfs_path_reaches_goal() {
        for seed in 0..8 {
            let board = scrambled(seed, 14);
            let path = solve_bfs(&board).expect("scrambled boards are solvable");
            assert!(replay(&board, &path).is_solved(), "Seed {} path missed the goal", seed);
        }
    }

    #[test]
    fn test_astar_path_reaches_goal() {
        for seed in 0..8 {
            let board = Board::new_shuffled_with_seed(seed);
            let path = solve_astar(&board).expect("shuffled boards are solvable");
            assert!(replay(&board, &path).is_solved(), "Seed {} path missed the goal", seed);
        }
    }

    #[test]
    fn test_solvers_agree_on_optimal_length() {
        for seed in 0..10 {
            let board = scrambled(seed, 12);
            let bfs_path = solve_bfs(&board).unwrap();
            let astar_path = solve_astar(&board).unwrap();
            assert_eq!(
                bfs_path.len(),
                astar_path.len(),
                "Seed {}: both strategies must find paths of minimal length",
                seed
            );
        }
    }

    #[test]
    fn test_path_length_bounded_by_scramble_length() {
        for seed in 0..10 {
            let steps = 10;
            let board = scrambled(seed, steps);
            let path = solve_bfs(&board).unwrap();
            assert!(
                path.len() <= steps,
                "Seed {}: optimal path ({}) longer than the scramble ({})",
                seed,
                path.len(),
                steps
            );
        }
    }

    #[test]
    fn test_astar_expands_no_more_than_bfs() {
        for seed in 0..6 {
            let board = scrambled(seed, 14);
            let (_, bfs_stats) = solve_bfs_counted(&board);
            let (_, astar_stats) = solve_astar_counted(&board);
            assert!(
                astar_stats.expanded <= bfs_stats.expanded,
                "Seed {}: A* expanded {} boards, breadth-first {}",
                seed,
                astar_stats.expanded,
                bfs_stats.expanded
            );
        }
    }

    #[test]
    fn test_astar_is_deterministic() {
        let board = Board::new_shuffled_with_seed(42);
        assert_eq!(solve_astar(&board), solve_astar(&board));
    }

    #[test]
    fn test_solver_kind_dispatch() {
        let board = board_from_str_array(&["123", "456", "708"]).unwrap();
        assert_eq!(SolverKind::Bfs.solve(&board), Some(vec![Move::Right]));
        assert_eq!(SolverKind::AStar.solve(&board), Some(vec![Move::Right]));

        let (path, stats) = SolverKind::AStar.solve_counted(&board);
        assert_eq!(path, Some(vec![Move::Right]));
        assert!(stats.expanded >= 1);
        assert!(stats.generated >= stats.expanded);
    }
}

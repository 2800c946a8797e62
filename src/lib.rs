//! # 8-Puzzle Solver Library
//!
//! This library provides the core game logic for the classic 3x3
//! sliding-tile puzzle and two shortest-path solvers — an uninformed
//! breadth-first search and an A* search guided by the Manhattan-distance
//! heuristic — plus a game session that deals a random solvable puzzle and
//! steps it through its solution one move at a time.
//!
//! It is used by three binaries:
//! - `auto_player`: deals a fresh puzzle and watches it solve itself,
//!   printing each intermediate board.
//! - `ai_solver`: reads a board configuration from a file and outputs an
//!   optimal move sequence.
//! - `solver_benchmark`: runs both strategies over a batch of seeded boards
//!   and compares their search effort.
//!
//! ## Modules
//! - `engine`: the board representation (`Board`), blank slides (`Move`),
//!   the inversion-parity solvability test, and random generation of
//!   solvable boards.
//! - `heuristics`: board evaluation used by the informed solver.
//! - `solver`: the two shortest-path searches behind a common contract.
//! - `session`: a caller-owned game session (`Game`) exposing `start` and
//!   `advance`.
//! - `utils`: parsing board configurations from strings.

pub mod engine;
pub mod heuristics;
pub mod session;
pub mod solver;
pub mod utils;

// Items from sub-modules, if public, are accessed via their full path,
// e.g. `eight_puzzle_solver::solver::solve_astar()`. This keeps the
// top-level library namespace cleaner.

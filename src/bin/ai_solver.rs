use clap::Parser;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::solver::SolverKind;
use eight_puzzle_solver::utils::board_from_str_array;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Solving strategy to use
    #[clap(short, long, value_enum, default_value = "astar")]
    solver: SolverKind,

    /// Path to the board file (three rows of digits, 0 for the blank)
    board_file: PathBuf,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    board_from_str_array(&lines).map_err(|e| format!("Invalid board format: {}", e))
}

fn main() {
    let args = Args::parse();

    let board = read_board_file(&args.board_file).expect(&format!(
        "Failed to read board from file: {}",
        args.board_file.display()
    ));
    println!("Loaded board from {}\n", args.board_file.display());
    println!("Initial board state:\n{}\n", board);
    println!("Searching for a shortest solution with {}...\n", args.solver);

    if let Some(path) = args.solver.solve(&board) {
        println!("Solution found:\n");
        println!("Moves ({}):", path.len());
        if path.is_empty() {
            println!("  Board is already solved.");
        } else {
            let mut current = board;
            for (i, mv) in path.iter().enumerate() {
                current = current
                    .apply_move(*mv)
                    .expect("solution paths contain only legal moves");
                println!("  Move {}: {}\n{}\n", i + 1, mv, current);
            }
        }
    } else {
        println!("No solution found: the board cannot reach the goal.\n");
    }
}

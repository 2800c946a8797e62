use clap::Parser;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::solver::SolverKind;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of random boards to solve with each strategy
    #[clap(long, default_value_t = 20)]
    boards: usize,

    /// Seed of the first board; board i is generated from start_seed + i
    #[clap(long, default_value_t = 0)]
    start_seed: u64,
}

const STRATEGIES: [SolverKind; 2] = [SolverKind::Bfs, SolverKind::AStar];

#[derive(Default)]
struct Totals {
    moves: usize,
    expanded: usize,
    elapsed: Duration,
}

fn main() {
    let args = Args::parse();

    let mut totals = [Totals::default(), Totals::default()];

    println!(
        "Solving {} random boards with each strategy...",
        args.boards
    );

    for board_idx in 0..args.boards {
        let seed = args.start_seed + board_idx as u64;
        let board = Board::new_shuffled_with_seed(seed);

        println!("\nBoard {} (seed {}):", board_idx, seed);

        let mut path_lengths = Vec::new();
        for (strategy_idx, strategy) in STRATEGIES.iter().enumerate() {
            let started = Instant::now();
            let (path, stats) = strategy.solve_counted(&board);
            let elapsed = started.elapsed();

            let path = path.expect("generated boards are always solvable");
            println!(
                "  Strategy: {:<6} Moves: {:<3} Expanded: {:<7} Generated: {:<7} Time: {:.2?}",
                strategy.to_string(),
                path.len(),
                stats.expanded,
                stats.generated,
                elapsed
            );

            let entry = &mut totals[strategy_idx];
            entry.moves += path.len();
            entry.expanded += stats.expanded;
            entry.elapsed += elapsed;

            path_lengths.push(path.len());
        }

        assert_eq!(
            path_lengths[0], path_lengths[1],
            "Both strategies must return paths of minimal length for seed {}",
            seed
        );
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    for (strategy_idx, strategy) in STRATEGIES.iter().enumerate() {
        let entry = &totals[strategy_idx];
        println!(
            "Strategy {:<6}: Average Moves = {:.2}, Average Expanded = {:.1}, Total Time = {:.2?}",
            strategy.to_string(),
            entry.moves as f64 / args.boards as f64,
            entry.expanded as f64 / args.boards as f64,
            entry.elapsed
        );
    }
}

use clap::Parser;
use eight_puzzle_solver::session::Game;
use eight_puzzle_solver::solver::SolverKind;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Solving strategy used to plan the walkthrough
    #[clap(short, long, value_enum, default_value = "astar")]
    solver: SolverKind,

    /// Seed for a reproducible puzzle; omit for a fresh random one
    #[clap(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let mut game = match args.seed {
        Some(seed) => Game::with_seed(args.solver, seed),
        None => Game::new(args.solver),
    };

    let mut snapshot = game.start();
    println!("New puzzle, {} moves to the goal:", game.solution().len());
    println!("{}\n", snapshot.board);

    let mut step = 0;
    while !snapshot.finished {
        let mv = game.solution()[step];
        snapshot = game.advance();
        step += 1;
        println!("Step {}: {}\n{}\n", step, mv, snapshot.board);
    }

    println!("Solved in {} steps.", step);
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cross_solitaire::config::AppConfig;
use cross_solitaire::game::Board;
use cross_solitaire::render::{render_board, render_solution};
use cross_solitaire::search::{SearchOutcome, Solver};

/// Solve the cross peg-solitaire by backtracking search.
#[derive(Parser)]
#[command(name = "cross-solitaire", about = "Solve the cross peg-solitaire")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "solitaire.toml")]
    config: PathBuf,

    /// Override the search node budget
    #[arg(long)]
    max_nodes: Option<u64>,

    /// Print the board after every move of the solution
    #[arg(long)]
    steps: bool,

    /// Log search progress (overridden by RUST_LOG)
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(max_nodes) = cli.max_nodes {
        config.search.max_nodes = Some(max_nodes);
    }
    config.validate().context("invalid configuration")?;

    let mut board = Board::new();
    println!("Initial board ({} pegs):", board.peg_count());
    print!("{}", render_board(&board, &config.render));

    let mut solver = Solver::new(config.search.clone());
    let report = solver.solve(&mut board);

    match report.outcome {
        SearchOutcome::Solved(moves) => {
            println!(
                "Solution in {} moves ({} positions searched):",
                moves.len(),
                report.nodes
            );
            print!("{}", render_solution(&moves));

            for (step, mv) in moves.iter().enumerate() {
                board
                    .try_apply(mv)
                    .with_context(|| format!("replaying step {}", step + 1))?;
                if cli.steps {
                    println!();
                    println!("After step {}: {mv}", step + 1);
                    print!("{}", render_board(&board, &config.render));
                }
            }

            println!();
            println!("Final board:");
            print!("{}", render_board(&board, &config.render));
        }
        SearchOutcome::Exhausted => {
            println!("No solution exists ({} positions searched)", report.nodes);
        }
        SearchOutcome::NodeLimit => {
            println!(
                "Gave up after {} positions without a solution; raise --max-nodes",
                report.nodes
            );
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

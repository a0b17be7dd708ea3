//! Pokédex Entropy - CLI
//!
//! Ranks every Pokémon as a guess by expected information gain and writes the
//! ranking to a CSV file.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{LevelFilter, debug, info};
use pokedex_entropy::{
    commands::{SolveConfig, analyze_pokemon, run_filter, run_rank, solve_pokemon},
    core::{FeedbackSpace, Pokemon},
    output::{
        print_analysis_result, print_candidates, print_rank_result, print_solve_result,
        write_results_csv,
    },
    pokedex::{load_from_file, sample},
    solver::Lookahead,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "pokedex_entropy",
    about = "Rank Pokémon guesses by expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pokédex JSON file: {"Name": [gen, type1, type2, height_m, weight_kg], ...}
    #[arg(short, long, global = true, default_value = "pokedex.json")]
    pokedex: PathBuf,

    /// Guesses simulated per score. Cost grows exponentially: keep it at 1
    /// for a full Pokédex
    #[arg(short, long, global = true, default_value_t = 1)]
    depth: usize,

    /// Only use a random subset of this many Pokémon
    #[arg(long, global = true)]
    sample: Option<usize>,

    /// Seed for --sample
    #[arg(long, global = true, default_value_t = 0)]
    seed: u64,

    /// Log progress at info level (ignores RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank every Pokémon and write the results (default)
    Rank {
        /// CSV file to write
        #[arg(short, long, default_value = "results.csv")]
        output: PathBuf,

        /// Number of entries to print
        #[arg(short = 'n', long, default_value_t = 20)]
        top: usize,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Analyze a single guess
    Analyze {
        /// Pokémon to analyze
        name: String,
    },

    /// Filter candidates by feedback received so far
    ///
    /// Feedback codes list gen, type1, type2, height, weight. Numbers use
    /// < = > (target lower / equal / higher), types use x (absent),
    /// o (same slot) and ~ (other slot).
    Filter {
        /// Observations like "Charmander:=xo<>"
        #[arg(required = true)]
        observations: Vec<String>,

        /// Number of candidates to print
        #[arg(short = 'n', long, default_value_t = 20)]
        top: usize,
    },

    /// Play a game against a specific target
    Solve {
        /// The hidden Pokémon
        target: String,

        /// Give up after this many guesses
        #[arg(short, long, default_value_t = 10)]
        max_guesses: usize,
    },
}

fn init_logging(verbose: bool) {
    if verbose {
        env_logger::builder().filter_level(LevelFilter::Info).init();
        info!("Verbose output enabled (ignoring RUST_LOG environment variable)");
    } else {
        env_logger::init();
        debug!("Logging configured from environment variables");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let universe = load_from_file(&cli.pokedex)
        .with_context(|| format!("Failed to load {}", cli.pokedex.display()))?;
    info!(
        "Loaded {} Pokémon from {}",
        universe.len(),
        cli.pokedex.display()
    );

    let pool: Vec<&Pokemon> = match cli.sample {
        Some(count) => {
            info!("Sampling {count} Pokémon with seed {}", cli.seed);
            sample(&universe, count, cli.seed)
        }
        None => universe.iter().collect(),
    };
    if pool.is_empty() {
        bail!("No Pokémon to score in {}", cli.pokedex.display());
    }

    let lookahead = Lookahead::new(cli.depth)?;
    let space = FeedbackSpace::new();

    // Default to ranking if no command given
    let command = cli.command.unwrap_or(Commands::Rank {
        output: PathBuf::from("results.csv"),
        top: 20,
        no_progress: false,
    });

    match command {
        Commands::Rank {
            output,
            top,
            no_progress,
        } => run_rank_command(&space, &pool, lookahead, &output, top, !no_progress),
        Commands::Analyze { name } => {
            let result = analyze_pokemon(&space, &name, &pool, lookahead)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Filter { observations, top } => {
            let result = run_filter(&space, &pool, &observations, lookahead)?;
            print_candidates(&result, top);
            Ok(())
        }
        Commands::Solve {
            target,
            max_guesses,
        } => {
            let config = SolveConfig {
                max_guesses,
                lookahead,
                ..SolveConfig::new(target)
            };
            let result = solve_pokemon(&space, &pool, &config)?;
            print_solve_result(&result);
            Ok(())
        }
    }
}

fn run_rank_command(
    space: &FeedbackSpace,
    pool: &[&Pokemon],
    lookahead: Lookahead,
    output: &Path,
    top: usize,
    show_progress: bool,
) -> Result<()> {
    let result = run_rank(space, pool, lookahead, show_progress)?;

    write_results_csv(output, &result.results, result.pool_size)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Wrote {} rows to {}", result.results.len(), output.display());

    print_rank_result(&result, top);
    Ok(())
}

//! Crossword Clues - CLI
//!
//! Random clues, answer chains by edit distance, clue lookup, corpus building and
//! an HTTP server, all over one clue snapshot.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossword_clues::{
    commands::{BuildConfig, build_corpus, database_stats, draw_chain, draw_clue},
    output::{print_build_report, print_chain, print_clues, print_random_outcome, print_stats},
    resolver::{DistanceMode, RandomQuery, ThreadRandom, resolve_clues},
    server,
    store::{ClueDatabase, load_from_file},
};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "crossword_clues",
    about = "Crossword clue lookup with edit-distance answer chaining",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Clue snapshot to read (and to write with `build`)
    #[arg(long, global = true, env = "CLUES_DB", default_value = "clues.json")]
    data: PathBuf,

    /// Log level, used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a random answer and one of its clues
    Random {
        /// Answer length (ignored if --previous is given)
        #[arg(short, long)]
        length: Option<usize>,

        /// The answer will be --distance away from this one
        #[arg(short, long)]
        previous: Option<String>,

        /// Distance from --previous
        #[arg(short, long, default_value = "1")]
        distance: usize,

        /// How the answer may differ in length from --previous
        #[arg(short, long, value_enum, default_value_t = DistanceMode::Same)]
        mode: DistanceMode,

        /// Draw a chain of this many answers, each anchored on the last
        #[arg(short, long)]
        chain: Option<usize>,
    },

    /// Print every known clue for an answer
    Clues {
        /// The answer to look up; non-letters are ignored
        answer: String,
    },

    /// Build the clue snapshot from raw puzzle files
    Build {
        /// Directory searched recursively for puzzle *.json files
        #[arg(short, long, default_value = "./nyt_crosswords")]
        input: PathBuf,

        /// Snapshot to write (defaults to --data)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show answer counts per length
    Stats,

    /// Serve the HTTP API
    Serve {
        /// Bind address
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,

        /// HTTP port
        #[arg(long, env = "CLUES_PORT", default_value = "8000")]
        port: u16,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Random {
            length,
            previous,
            distance,
            mode,
            chain,
        } => {
            let query = RandomQuery {
                length,
                previous,
                distance,
                mode,
            };
            run_random_command(&cli.data, &query, chain)
        }
        Commands::Clues { answer } => run_clues_command(&cli.data, &answer),
        Commands::Build {
            input,
            output,
            quiet,
        } => run_build_command(input, output.unwrap_or(cli.data), quiet),
        Commands::Stats => run_stats_command(&cli.data),
        Commands::Serve { host, port } => run_serve_command(&cli.data, SocketAddr::new(host, port)),
    }
}

fn load_database(path: &Path) -> Result<ClueDatabase> {
    let db = load_from_file(path)
        .with_context(|| format!("clue data unavailable at {}", path.display()))?;
    let stats = db.stats();
    info!(
        path = %path.display(),
        lengths = stats.buckets,
        answers = stats.answers,
        "loaded clue snapshot"
    );
    Ok(db)
}

fn run_random_command(data: &Path, query: &RandomQuery, chain: Option<usize>) -> Result<()> {
    let db = load_database(data)?;
    let mut rng = ThreadRandom;

    match chain {
        Some(steps) => print_chain(&draw_chain(&db, query, steps, &mut rng)),
        None => print_random_outcome(&draw_clue(&db, query, &mut rng)),
    }
    Ok(())
}

fn run_clues_command(data: &Path, answer: &str) -> Result<()> {
    let db = load_database(data)?;
    print_clues(&resolve_clues(&db, answer));
    Ok(())
}

fn run_build_command(input: PathBuf, output: PathBuf, quiet: bool) -> Result<()> {
    let mut config = BuildConfig::new(input, output);
    config.show_progress = !quiet;

    let report = build_corpus(&config)?;
    print_build_report(&report);
    Ok(())
}

fn run_stats_command(data: &Path) -> Result<()> {
    let db = load_database(data)?;
    print_stats(&database_stats(&db));
    Ok(())
}

fn run_serve_command(data: &Path, addr: SocketAddr) -> Result<()> {
    let db = load_database(data)?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime
        .block_on(server::serve(db, addr))
        .with_context(|| format!("server on {addr} failed"))
}

//! Hangman - CLI
//!
//! Word-guessing game with TUI and console modes, a best-score ledger and a
//! seeded simulation mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{run_simple, run_simulation, summarize_ledger},
    core::{Difficulty, Word},
    ledger::{DEFAULT_LEDGER_PATH, ScoreLedger},
    logging::init_tracing,
    output::{print_ledger_summary, print_simulation_result},
    round::{DEFAULT_MAX_PENALTY, RoundConfig, Session},
    wordlists::load_words,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word letter by letter before the penalties run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Difficulty: easy (<= 5 letters), medium (any), hard (>= 7 letters)
    #[arg(short, long, global = true, default_value = "medium")]
    difficulty: Difficulty,

    /// Time limit per round in seconds, 0 for none (default: no limit)
    #[arg(short, long, global = true)]
    timer: Option<u64>,

    /// Penalty at which a round is lost
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MAX_PENALTY,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_penalty: u32,

    /// Score ledger file
    #[arg(short, long, global = true, default_value = DEFAULT_LEDGER_PATH)]
    ledger: PathBuf,

    /// Seed for reproducible secrets and hints
    #[arg(long, global = true)]
    seed: Option<u64>,
}

impl Cli {
    /// Per-round time limit; `--timer 0` turns the timer off
    fn time_limit(&self) -> Option<Duration> {
        self.timer.filter(|&secs| secs > 0).map(Duration::from_secs)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode (line-based, no TUI)
    Simple,

    /// Play seeded rounds with an automated guesser and report statistics
    Simulate {
        /// Number of rounds to simulate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Show the best score and recent records
    Best {
        /// Number of recent records to list
        #[arg(short = 'r', long, default_value = "5")]
        recent: usize,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = RoundConfig::new(cli.difficulty)
        .with_max_penalty(cli.max_penalty)
        .with_time_limit(cli.time_limit());
    let ledger = ScoreLedger::new(&cli.ledger);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let session = build_session(cli.wordlist.as_deref(), config, ledger, cli.seed)?;
            run_play_command(session)
        }
        Commands::Simple => {
            let mut session = build_session(cli.wordlist.as_deref(), config, ledger, cli.seed)?;
            run_simple(&mut session)
        }
        Commands::Simulate { count } => {
            let words = load_wordlist(cli.wordlist.as_deref())?;
            let first_seed = cli.seed.unwrap_or_else(|| rand::rng().random());
            println!("Simulating {count} rounds from seed {first_seed}...");

            let result = run_simulation(&words, &config, first_seed, count, true);
            print_simulation_result(&result, &config);
            Ok(())
        }
        Commands::Best { recent } => {
            let summary =
                summarize_ledger(&ledger, recent).context("failed to read the score ledger")?;
            print_ledger_summary(&summary, ledger.path());
            Ok(())
        }
    }
}

fn load_wordlist(path: Option<&Path>) -> Result<Vec<Word>> {
    let words = load_words(path).context("failed to load the word list")?;
    Ok(words)
}

fn build_session(
    wordlist: Option<&Path>,
    config: RoundConfig,
    ledger: ScoreLedger,
    seed: Option<u64>,
) -> Result<Session<StdRng>> {
    let words = load_wordlist(wordlist)?;
    let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let session = Session::new(words, config, ledger, rng)?;
    Ok(session)
}

fn run_play_command(session: Session<StdRng>) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(session)?;
    run_tui(app)
}

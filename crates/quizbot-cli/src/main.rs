//! quizbot CLI — the console front end for the quiz engine.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "quizbot", version, about = "Console trivia quiz")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play quiz rounds in the terminal
    Play {
        /// Question file (.json or .toml)
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Only ask questions from this category (skips the prompt)
        #[arg(long)]
        category: Option<String>,

        /// Only ask questions of this difficulty (skips the prompt)
        #[arg(long)]
        difficulty: Option<String>,

        /// Ask questions in file order
        #[arg(long)]
        no_shuffle: bool,

        /// Shuffle seed, for a reproducible question order
        #[arg(long)]
        seed: Option<u64>,

        /// Score log to append results to
        #[arg(long)]
        score_log: Option<PathBuf>,

        /// Do not append results to the score log
        #[arg(long)]
        no_record: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a question file
    Validate {
        /// Question file (.json or .toml)
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List categories and difficulties with question counts
    Facets {
        /// Question file (.json or .toml)
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show recorded scores
    Scores {
        /// Score log to read
        #[arg(long)]
        score_log: Option<PathBuf>,

        /// Show only the most recent N sessions
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and question file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizbot=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            questions,
            category,
            difficulty,
            no_shuffle,
            seed,
            score_log,
            no_record,
            config,
        } => commands::play::execute(commands::play::PlayArgs {
            questions,
            category,
            difficulty,
            no_shuffle,
            seed,
            score_log,
            no_record,
            config,
        }),
        Commands::Validate { questions, config } => commands::validate::execute(questions, config),
        Commands::Facets { questions, config } => commands::facets::execute(questions, config),
        Commands::Scores {
            score_log,
            limit,
            config,
        } => commands::scores::execute(score_log, limit, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

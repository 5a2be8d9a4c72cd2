//! Tactoe - terminal front end.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tactoe::{Difficulty, GameMode, GameSession, Matchup, SessionConfig, run_terminal_session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            difficulty,
            player1,
            player2,
            seed,
        } => run_play(config, mode, difficulty, player1, player2, seed),
        Command::Matchup {
            x,
            o,
            games,
            seed,
            json,
        } => run_matchup(x, o, games, seed, json),
    }
}

/// Run an interactive session on stdin/stdout
#[instrument]
fn run_play(
    config: Option<PathBuf>,
    mode: Option<GameMode>,
    difficulty: Option<Difficulty>,
    player1: Option<String>,
    player2: Option<String>,
    seed: Option<u64>,
) -> Result<()> {
    let mut settings = match config {
        Some(path) => SessionConfig::from_file(path)?,
        None => SessionConfig::default(),
    };
    if let Some(mode) = mode {
        settings = settings.with_mode(mode);
    }
    if let Some(difficulty) = difficulty {
        settings = settings.with_difficulty(difficulty);
    }
    if let Some(seed) = seed {
        settings = settings.with_seed(seed);
    }
    let settings = settings.with_names(player1, player2);

    info!(?settings, "Starting play session");
    let mut session = GameSession::new(&settings);
    let stdin = std::io::stdin();
    run_terminal_session(&mut session, stdin.lock(), std::io::stdout().lock())
}

/// Run a computer-vs-computer series and print the tally
#[instrument]
fn run_matchup(
    x: Difficulty,
    o: Difficulty,
    games: u32,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let mut matchup = Matchup::new(x, o);
    if let Some(seed) = seed {
        matchup = matchup.seeded(seed);
    }

    let tally = matchup.play_many(games);
    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{} (X) vs {} (O) over {} games", x, o, tally.games());
        println!("{}", tally);
    }
    Ok(())
}

//! Command-line interface for tactoe.

use clap::{Parser, Subcommand};
use tactoe::{Difficulty, GameMode};

/// Tactoe - tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tactoe")]
#[command(about = "Tic-tac-toe with selectable computer opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive session in the terminal
    Play {
        /// Path to a session config file (TOML)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Game mode: two-player or vs-computer
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Computer difficulty: random, heuristic, heuristic-blocking, minimax-optimal
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Name for the X player
        #[arg(long)]
        player1: Option<String>,

        /// Name for the O player
        #[arg(long)]
        player2: Option<String>,

        /// Seed for the random opponent
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit two computer difficulties against each other
    Matchup {
        /// Difficulty playing X
        #[arg(short = 'x', long)]
        x: Difficulty,

        /// Difficulty playing O
        #[arg(short = 'o', long)]
        o: Difficulty,

        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: u32,

        /// Seed for random opponents
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}

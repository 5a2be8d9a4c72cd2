//! Line-based terminal front end for a play session.

use crate::games::tictactoe::{Mark, Position};
use crate::session::{GameMode, GameSession};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// A line typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play(Position),
    Restart,
    Record,
    Moves,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "q" | "quit" | "exit" => Some(Command::Quit),
            "r" | "restart" => Some(Command::Restart),
            "record" | "score" => Some(Command::Record),
            "m" | "moves" => Some(Command::Moves),
            "?" | "h" | "help" => Some(Command::Help),
            other => Position::from_label_or_number(other).map(Command::Play),
        }
    }
}

const HELP: &str = "Enter a cell number (1-9) or a name like 'center' or 'top-left'.\n\
                    Other commands: moves, restart, record, help, quit.";

/// Runs a session until the input ends or the player quits, then prints
/// the session record.
#[instrument(skip_all, fields(mode = %session.mode()))]
pub fn run_terminal_session<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    mut out: W,
) -> Result<()> {
    writeln!(
        out,
        "X | {}\nO | {}\n{}",
        session.name_of(Mark::X),
        session.name_of(Mark::O),
        HELP
    )?;
    show_board(session, &mut out)?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = Command::parse(&line) else {
            writeln!(out, "Unrecognised input '{}'. Type 'help' for options.", line.trim())?;
            continue;
        };
        debug!(?command, "Terminal command");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Record => show_record(session, &mut out)?,
            Command::Moves => show_moves(session, &mut out)?,
            Command::Restart => {
                session.restart();
                show_board(session, &mut out)?;
            }
            Command::Play(position) => match session.play(position.to_index()) {
                Ok(report) => {
                    if session.mode() == GameMode::VsComputer {
                        for mv in report.moves.iter().skip(1) {
                            let name = session.name_of(mv.player());
                            writeln!(out, "{} plays {}", name, mv.position())?;
                        }
                    }
                    if let Some(finished) = &report.finished {
                        writeln!(out, "Game over: {}", finished.message())?;
                    }
                    show_board(session, &mut out)?;
                }
                Err(e) => {
                    warn!(error = %e, "Move rejected");
                    writeln!(out, "{}", e)?;
                }
            },
        }
    }

    show_record(session, &mut out)?;
    Ok(())
}

fn show_board<W: Write>(session: &GameSession, out: &mut W) -> Result<()> {
    let player = session.state().current_player();
    writeln!(
        out,
        "\n{}\n\nCurrent Player: {} ({})",
        session.state().board().display(),
        player,
        session.name_of(player)
    )?;
    Ok(())
}

fn show_moves<W: Write>(session: &GameSession, out: &mut W) -> Result<()> {
    let open: Vec<String> = Position::valid_moves(session.state().board())
        .into_iter()
        .map(|pos| format!("{} ({})", pos.to_index() + 1, pos))
        .collect();
    writeln!(out, "Open cells: {}", open.join(", "))?;
    Ok(())
}

fn show_record<W: Write>(session: &GameSession, out: &mut W) -> Result<()> {
    writeln!(out, "Record:")?;
    for game in session.record() {
        writeln!(out, "  {}", game.message())?;
    }
    writeln!(out, "{}", session.tally())?;
    Ok(())
}

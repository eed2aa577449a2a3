//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI

use crate::output::{print_finish, print_outcome, print_round_state};
use crate::round::{Round, Session};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

/// Input that requests a hint
pub const HINT_COMMAND: &str = "?";

/// Run the console game on stdin/stdout
///
/// # Errors
///
/// Returns an error on terminal I/O failure or if the score ledger cannot be
/// read or written.
pub fn run_simple<R: Rng>(session: &mut Session<R>) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    play_console(session, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the console game on arbitrary streams
///
/// Ends at the replay prompt on any answer other than `y`, or at end of input.
///
/// # Errors
///
/// Returns an error on I/O failure or if the score ledger cannot be read or written.
pub fn play_console<R: Rng, I: BufRead, W: Write>(
    session: &mut Session<R>,
    input: &mut I,
    out: &mut W,
) -> Result<()> {
    writeln!(
        out,
        "\n╔══════════════════════════════════════════════════════════════╗"
    )?;
    writeln!(
        out,
        "║                     Hangman - Console Mode                   ║"
    )?;
    writeln!(
        out,
        "╚══════════════════════════════════════════════════════════════╝\n"
    )?;
    writeln!(
        out,
        "Guess the hidden word one letter at a time, or type the whole word."
    )?;
    writeln!(
        out,
        "Wrong letters cost 1 penalty, wrong words cost 5. Type '{HINT_COMMAND}' for a hint."
    )?;
    if let Some(best) = session.best_attempts()? {
        writeln!(out, "Current record: {best} attempts")?;
    }

    loop {
        let mut round = session.new_round()?;
        let finished = play_round(session, &mut round, input, out)?;
        if !finished {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }

        let record = session
            .settle(&round)
            .context("failed to update the score ledger")?;
        print_finish(out, &round, record)?;

        match read_line(input, out, "Do you want to play again? (y/n)")? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => {
                writeln!(out, "\n🔄 New round!\n")?;
            }
            _ => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
        }
    }
}

/// Feed input lines to `round` until it finishes
///
/// Returns `false` if input ended first.
fn play_round<R: Rng, I: BufRead, W: Write>(
    session: &mut Session<R>,
    round: &mut Round,
    input: &mut I,
    out: &mut W,
) -> Result<bool> {
    let time_limit = session.config().time_limit;
    let started = Instant::now();

    writeln!(
        out,
        "You must guess the word ({} letters, {} difficulty):",
        round.secret().len(),
        session.config().difficulty
    )?;

    while !round.is_finished() {
        print_round_state(out, round, time_left(time_limit, started.elapsed()))?;

        let Some(line) = read_line(input, out, "Enter a letter or a word")? else {
            return Ok(false);
        };

        // Time is checked after the blocking read
        if time_left(time_limit, started.elapsed()) == Some(Duration::ZERO) {
            print_outcome(out, &round.force_loss())?;
            break;
        }

        let outcome = if line == HINT_COMMAND {
            session.hint(round)
        } else {
            round.submit_guess(&line)
        };
        print_outcome(out, &outcome)?;
    }

    Ok(true)
}

fn time_left(limit: Option<Duration>, elapsed: Duration) -> Option<Duration> {
    limit.map(|limit| limit.saturating_sub(elapsed))
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<I: BufRead, W: Write>(
    input: &mut I,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{}: ", prompt.bold())?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

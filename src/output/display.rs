//! Display functions for rounds and command results

use super::formatters::{best_label, create_progress_bar, lives_bar, used_letters_list};
use crate::commands::{LedgerSummary, SimulationResult};
use crate::ledger::RecordOutcome;
use crate::round::{Outcome, Round, RoundConfig, Status};
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Print the board: masked word, lives, attempts, used letters
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_round_state<W: Write>(
    out: &mut W,
    round: &Round,
    time_left: Option<Duration>,
) -> io::Result<()> {
    writeln!(out, "\n  {}", round.masked().bright_white().bold())?;
    writeln!(
        out,
        "  Lives:    [{}] {}/{}",
        lives_bar(round, 12).green(),
        round.remaining_lives(),
        round.max_penalty()
    )?;
    writeln!(out, "  Attempts: {}", round.attempts())?;
    writeln!(out, "  Tried:    {}", used_letters_list(round))?;
    if let Some(left) = time_left {
        writeln!(out, "  Time:     {}s left", left.as_secs())?;
    }
    Ok(())
}

/// Print the message for one engine call
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    let text = outcome.to_string();
    let styled = match outcome {
        Outcome::LetterFound { .. } | Outcome::WordFound => text.green(),
        Outcome::WrongLetter { .. } | Outcome::WrongWord { .. } | Outcome::TimeExpired => {
            text.red()
        }
        Outcome::HintRevealed { .. } => text.cyan(),
        Outcome::InvalidInput | Outcome::RoundFinished | Outcome::AlreadyTried(_) => text.yellow(),
    };
    writeln!(out, "  {styled}")
}

/// Print the end-of-round banner
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_finish<W: Write>(
    out: &mut W,
    round: &Round,
    record: Option<RecordOutcome>,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    match round.status() {
        Status::Won => {
            writeln!(
                out,
                "  {}",
                format!(
                    "You win! The word was '{}'. Attempts: {}",
                    round.secret(),
                    round.attempts()
                )
                .bright_green()
                .bold()
            )?;
            match record {
                Some(RecordOutcome::NewBest { previous: Some(old) }) => writeln!(
                    out,
                    "  {} (previous record: {old})",
                    "🏆 Best ever!".bright_yellow().bold()
                )?,
                Some(RecordOutcome::NewBest { previous: None }) => {
                    writeln!(out, "  {}", "🏆 First record set!".bright_yellow().bold())?;
                }
                Some(RecordOutcome::NoImprovement { best }) => {
                    writeln!(out, "  Record to beat: {best} attempts")?;
                }
                None => {}
            }
        }
        Status::Lost => writeln!(
            out,
            "  {}",
            format!("Game over! The word was '{}'.", round.secret())
                .bright_red()
                .bold()
        )?,
        Status::InProgress => {}
    }
    writeln!(out, "{}", "═".repeat(60).bright_cyan())
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult, config: &RoundConfig) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Difficulty:       {}", config.difficulty);
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!("   Average attempts: {:.2}", result.average_attempts);
    println!(
        "   Best case:        {}",
        best_label(result.min_attempts).green()
    );
    println!(
        "   Worst case:       {}",
        best_label(result.max_attempts).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Final penalty:".bright_cyan().bold());
    let mut penalties: Vec<_> = result.penalty_distribution.iter().collect();
    penalties.sort_unstable();
    for (penalty, &count) in penalties {
        let pct = count as f64 / result.rounds.max(1) as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {penalty:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

/// Print the ledger summary
pub fn print_ledger_summary(summary: &LedgerSummary, path: &Path) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Score ledger: {}",
        path.display().to_string().bright_white()
    );
    println!("{}", "─".repeat(60).cyan());

    let Some(best) = &summary.best else {
        println!("\nNo records yet. Win a round to set one!");
        return;
    };

    println!(
        "\n🏆 Best: {} attempts ({}, {})",
        best.attempts.to_string().bright_yellow().bold(),
        best.word.to_uppercase(),
        best.timestamp
    );
    println!("   Records: {}", summary.total_records);

    if !summary.recent.is_empty() {
        println!("\n   Recent:");
        for record in &summary.recent {
            println!("   • {record}");
        }
    }
}

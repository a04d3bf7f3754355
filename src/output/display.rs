//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar};
use crate::commands::ReplayResult;
use crate::game::{Phase, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Write the result of a replay
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_replay_result<W: Write>(out: &mut W, result: &ReplayResult) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Secret word: {} ({} letters)",
        result.target.bright_yellow().bold(),
        result.target.chars().count()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    for (i, step) in result.steps.iter().enumerate() {
        let summary = if step.feedback.is_perfect() {
            "solved".green().to_string()
        } else {
            format!(
                "{} exact, {} present",
                step.feedback.count_exact(),
                step.feedback.count_present()
            )
            .bright_black()
            .to_string()
        };
        writeln!(
            out,
            "\nGuess {}/{}: {}  {}  {summary}",
            i + 1,
            result.max_guesses,
            colored_row(&step.guess, &step.feedback),
            step.feedback.to_emoji()
        )?;
    }

    if !result.skipped.is_empty() {
        writeln!(out, "\n{}", "Skipped:".bright_black())?;
        for skipped in &result.skipped {
            writeln!(
                out,
                "  {} {}",
                format!("'{}'", skipped.input).bright_black(),
                format!("({})", skipped.reason).bright_black()
            )?;
        }
    }

    writeln!(out)?;
    let guesses = result.steps.len();
    match result.outcome {
        Phase::Won => writeln!(
            out,
            "{}",
            format!("✅ Guessed in {guesses} of {} tries!", result.max_guesses)
                .green()
                .bold()
        ),
        Phase::Lost => writeln!(
            out,
            "{}",
            format!("❌ Out of guesses. The word was: {}", result.target)
                .red()
                .bold()
        ),
        Phase::Setting | Phase::Playing => writeln!(
            out,
            "{}",
            format!(
                "… Still playing: {} of {} tries left",
                result.max_guesses.saturating_sub(guesses),
                result.max_guesses
            )
            .yellow()
        ),
    }
}

/// Write session statistics with a win distribution chart
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "📊 {}", "Statistics:".bright_cyan().bold())?;
    writeln!(out, "   Played:       {}", stats.games_played)?;
    writeln!(out, "   Win rate:     {:.0}%", stats.win_rate())?;
    writeln!(
        out,
        "   Streak:       {} (best {})",
        stats.current_streak, stats.best_streak
    )?;

    if stats.games_won > 0 {
        writeln!(out, "\n📈 {}", "Distribution:".bright_cyan().bold())?;
        for (i, &count) in stats.guess_distribution.iter().enumerate() {
            let bar = create_progress_bar(count as f64, stats.games_won as f64, 20);
            writeln!(out, "   {}: {} {count}", i + 1, bar.green())?;
        }
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{ReplayConfig, replay_guesses};

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn replay_output_won() {
        let result = replay_guesses(ReplayConfig::new(
            "raton",
            vec!["ratas".into(), "raton".into()],
        ))
        .unwrap();
        let text = render(|out| write_replay_result(out, &result));

        assert!(text.contains("Secret word: RATON (5 letters)"));
        assert!(text.contains("Guess 1/5"));
        assert!(text.contains("🟩🟩🟩🟨⬜  3 exact, 1 present"));
        assert!(text.contains("🟩🟩🟩🟩🟩  solved"));
        assert!(text.contains("Guessed in 2 of 5 tries!"));
    }

    #[test]
    fn replay_output_lists_skipped() {
        let result =
            replay_guesses(ReplayConfig::new("sol", vec!["so".into()])).unwrap();
        let text = render(|out| write_replay_result(out, &result));

        assert!(text.contains("'so' (guess has 2 of 3 letters)"));
        assert!(text.contains("Still playing: 5 of 5 tries left"));
    }

    #[test]
    fn replay_output_counts_misses() {
        let result = replay_guesses(ReplayConfig::new("raton", vec!["perro".into()])).unwrap();
        let text = render(|out| write_replay_result(out, &result));

        assert!(text.contains("⬜⬜🟨🟨🟨  0 exact, 3 present"));
        assert!(!text.contains("solved"));
    }

    #[test]
    fn statistics_output() {
        let mut stats = Statistics::default();
        stats.record(Phase::Won, 2);
        stats.record(Phase::Lost, 5);
        let text = render(|out| write_statistics(out, &stats));

        assert!(text.contains("Played:       2"));
        assert!(text.contains("Win rate:     50%"));
        assert!(text.contains("2: ████████████████████ 1"));
    }
}

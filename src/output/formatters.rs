//! Formatting utilities for terminal output

use crate::core::{Clue, ClueVector, Word};
use colored::Colorize;

/// Render a guess as a row of colored letter tiles
///
/// Green and yellow tiles use black text on the clue color; gray tiles use
/// white text on bright black.
#[must_use]
pub fn clue_row(guess: &Word, clues: &ClueVector) -> String {
    guess
        .letters()
        .iter()
        .zip(clues.clues())
        .map(|(&letter, clue)| {
            let tile = format!(" {} ", letter.to_ascii_uppercase() as char);
            match clue {
                Clue::Green => tile.black().on_green().bold().to_string(),
                Clue::Yellow => tile.black().on_yellow().bold().to_string(),
                Clue::Gray => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to `max_bits`
#[must_use]
pub fn entropy_bar(entropy: f64, max_bits: f64, width: usize) -> String {
    create_progress_bar(entropy, max_bits, width)
}

/// Histogram bar; any nonzero count shows at least one block
#[must_use]
pub fn histogram_bar(count: usize, max_count: usize, width: usize) -> String {
    let filled = if max_count == 0 {
        0
    } else {
        (count * width / max_count).max(usize::from(count > 0))
    };

    format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(width.saturating_sub(filled)).bright_black()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps_and_handles_zero_max() {
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn clue_row_keeps_letters_in_order() {
        colored::control::set_override(false);
        let guess = Word::new("aloes").unwrap();
        let clues = ClueVector::parse("Y--G-").unwrap();

        assert_eq!(clue_row(&guess, &clues), " A  L  O  E  S ");
    }

    #[test]
    fn histogram_bar_shows_small_counts() {
        colored::control::set_override(false);
        assert_eq!(histogram_bar(1, 100, 10), "█░░░░░░░░░");
        assert_eq!(histogram_bar(0, 100, 4), "░░░░");
        assert_eq!(histogram_bar(0, 0, 3), "░░░");
    }
}

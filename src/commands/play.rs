//! Play mode
//!
//! The human guesses a hidden answer. Each typed line is erased and replaced
//! by the colored clue row for that guess.

use crate::core::{ClueVector, ConstraintState, Word};
use crate::output::formatters::clue_row;
use crate::wordlists::Vocabulary;
use crossterm::{
    cursor::MoveToPreviousLine,
    queue,
    terminal::{Clear, ClearType},
};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::io::{self, BufRead, Write};

/// Guesses allowed in play mode when none are configured
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Settings for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayConfig {
    pub max_guesses: usize,
    /// Reject guesses that ignore revealed letters
    pub hard_mode: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            hard_mode: false,
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Won { guesses: usize },
    Lost,
    /// Input ran out before the game finished
    Abandoned { guesses: usize },
}

/// Pick a hidden answer uniformly from the answer list
///
/// # Panics
/// Never in practice: a `Vocabulary` always has at least one answer.
pub fn random_answer<R: Rng + ?Sized>(vocabulary: &Vocabulary, rng: &mut R) -> Word {
    *vocabulary
        .answers()
        .choose(rng)
        .expect("vocabulary answers are non-empty")
}

/// Run one game against `answer`, reading guesses line by line from `input`
///
/// Lines that are not valid words, words outside the guess list and (in hard
/// mode) guesses that ignore revealed letters are rejected without using up
/// a guess.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play<R: BufRead, W: Write>(
    answer: &Word,
    vocabulary: &Vocabulary,
    config: &PlayConfig,
    mut input: R,
    output: &mut W,
) -> io::Result<PlayOutcome> {
    let mut state = ConstraintState::new();
    let mut guesses = 0;
    let mut line = String::new();

    while guesses < config.max_guesses {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(PlayOutcome::Abandoned { guesses });
        }

        queue!(output, MoveToPreviousLine(1), Clear(ClearType::CurrentLine))?;

        let guess = match Word::new(line.trim()) {
            Ok(guess) => guess,
            Err(e) => {
                writeln!(output, "{}: {e}", line.trim())?;
                continue;
            }
        };

        if !vocabulary.is_guess(&guess) {
            writeln!(output, "{guess}: not in the word list")?;
            continue;
        }

        if config.hard_mode && !state.allows_hard_mode_guess(&guess) {
            writeln!(output, "{guess}: hard mode requires every revealed letter")?;
            continue;
        }

        let clues = ClueVector::compute(answer, &guess);
        state = state.combine(&ConstraintState::from_clues(&guess, &clues));
        guesses += 1;
        log::debug!("play: guess {guesses} {guess} -> {clues}");

        writeln!(output, "{}", clue_row(&guess, &clues))?;
        output.flush()?;

        if clues.is_solved() {
            writeln!(output, "🎉🎉🎉🎉🎉")?;
            return Ok(PlayOutcome::Won { guesses });
        }
    }

    writeln!(output, "too bad, the answer was: {answer}")?;
    Ok(PlayOutcome::Lost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn vocabulary() -> Vocabulary {
        let words = |list: &[&str]| -> Vec<Word> {
            list.iter().map(|w| Word::new(w).unwrap()).collect()
        };
        Vocabulary::new(
            words(&["crate", "grate", "irate", "slate", "aloes", "magic", "fiber"]),
            words(&["crate", "grate", "irate", "slate"]),
        )
        .unwrap()
    }

    fn run(answer: &str, config: PlayConfig, typed: &str) -> (PlayOutcome, String) {
        colored::control::set_override(false);
        let mut output = Vec::new();
        let outcome = play(
            &Word::new(answer).unwrap(),
            &vocabulary(),
            &config,
            Cursor::new(typed.to_string()),
            &mut output,
        )
        .unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn win_on_correct_guess() {
        let (outcome, output) = run("grate", PlayConfig::default(), "aloes\ncrate\ngrate\n");

        assert_eq!(outcome, PlayOutcome::Won { guesses: 3 });
        assert!(output.contains("🎉🎉🎉🎉🎉"));
        assert!(output.contains(" G  R  A  T  E "));
    }

    #[test]
    fn loss_reveals_answer() {
        let config = PlayConfig {
            max_guesses: 2,
            ..PlayConfig::default()
        };
        let (outcome, output) = run("grate", config, "aloes\ncrate\ngrate\n");

        assert_eq!(outcome, PlayOutcome::Lost);
        assert!(output.contains("too bad, the answer was: grate"));
        assert!(!output.contains("🎉"));
    }

    #[test]
    fn invalid_words_do_not_count() {
        let (outcome, output) = run("irate", PlayConfig::default(), "toolong\nzebra\n\nirate\n");

        assert_eq!(outcome, PlayOutcome::Won { guesses: 1 });
        assert!(output.contains("toolong: Word must be exactly 5 letters"));
        assert!(output.contains("zebra: not in the word list"));
    }

    #[test]
    fn hard_mode_rejects_guess_missing_revealed_letters() {
        let config = PlayConfig {
            hard_mode: true,
            ..PlayConfig::default()
        };
        // slate reveals a, t, e; magic drops t and e, fiber drops a and t
        let (outcome, output) = run("crate", config, "slate\nmagic\nfiber\ncrate\n");

        assert_eq!(outcome, PlayOutcome::Won { guesses: 2 });
        assert!(output.contains("magic: hard mode"));
        assert!(output.contains("fiber: hard mode"));
    }

    #[test]
    fn soft_mode_accepts_any_listed_word() {
        let (outcome, _) = run("crate", PlayConfig::default(), "slate\nmagic\ncrate\n");
        assert_eq!(outcome, PlayOutcome::Won { guesses: 3 });
    }

    #[test]
    fn running_out_of_input_abandons() {
        let (outcome, _) = run("crate", PlayConfig::default(), "slate\n");
        assert_eq!(outcome, PlayOutcome::Abandoned { guesses: 1 });
    }

    #[test]
    fn random_answer_comes_from_answers() {
        let vocabulary = vocabulary();
        let mut rng = rand::rng();
        for _ in 0..20 {
            assert!(vocabulary.is_answer(&random_answer(&vocabulary, &mut rng)));
        }
    }
}

//! Wordle Solver - CLI
//!
//! With no arguments, evaluates the solver over every answer. With one word,
//! shows how the solver reaches that answer round by round.

use anyhow::{Context, Result, anyhow};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use wordle_solver::{
    commands::{
        PlayConfig, PlayOutcome, analyze, play, play::DEFAULT_MAX_GUESSES, random_answer,
        run_batch, solve_verbose,
    },
    core::Word,
    output::{print_analysis_report, print_batch_statistics, print_solve_transcript},
    solver::{DEFAULT_MAX_ATTEMPTS, DEFAULT_OPENING, Solver, SolverConfig, StrategyType},
    wordlists::{ANSWERS, GUESSES, Vocabulary, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_solver",
    about = "Wordle solver with entropy-heuristic and minimax guess selection",
    version,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer to solve with per-round diagnostics (omit to evaluate every answer)
    word: Option<Word>,

    /// Strategy: minimax (default) or entropy
    #[arg(
        short,
        long,
        global = true,
        default_value = "minimax",
        value_parser = StrategyType::NAMES
    )]
    strategy: String,

    /// Only allow guesses that use every revealed letter
    #[arg(long, global = true)]
    hard: bool,

    /// Rounds before the solver gives up
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    max_attempts: usize,

    /// First guess of every solve (default: aloes)
    #[arg(long, global = true)]
    opening: Option<Word>,

    /// Evaluate only the first N answers
    #[arg(short, long)]
    limit: Option<usize>,

    /// Guess list file, one word per line (default: embedded list)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Answer list file, one word per line (default: embedded list)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess a random answer yourself
    Play {
        /// Guesses before the game is lost
        #[arg(
            long,
            default_value_t = DEFAULT_MAX_GUESSES,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..)
        )]
        max_guesses: usize,
    },

    /// Rank every guess by exact entropy over the answers
    Analyze {
        /// Number of guesses to show
        #[arg(short, long, default_value_t = 20)]
        top: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let vocabulary = load_vocabulary(cli.guesses.as_deref(), cli.answers.as_deref())?;

    match cli.command {
        Some(Commands::Play { max_guesses }) => {
            let config = PlayConfig {
                max_guesses,
                hard_mode: cli.hard,
            };
            run_play_command(&vocabulary, &config)
        }
        Some(Commands::Analyze { top }) => {
            print_analysis_report(&analyze(&vocabulary, top));
            Ok(())
        }
        None => {
            let strategy = StrategyType::from_name(&cli.strategy)
                .ok_or_else(|| anyhow!("unknown strategy '{}'", cli.strategy))?;
            let config = SolverConfig {
                opening: cli.opening.unwrap_or(DEFAULT_OPENING),
                max_attempts: cli.max_attempts,
                hard_mode: cli.hard,
            };
            if !vocabulary.is_guess(&config.opening) {
                log::warn!("opening guess {} is not in the guess list", config.opening);
            }

            let solver = Solver::new(strategy, vocabulary.guesses(), vocabulary.answers(), config);
            match cli.word {
                Some(word) => {
                    let transcript = solve_verbose(&solver, &word)?;
                    print_solve_transcript(&transcript);
                }
                None => {
                    let stats = run_batch(&solver, vocabulary.answers(), cli.limit)?;
                    print_batch_statistics(&stats);
                }
            }
            Ok(())
        }
    }
}

/// Load the guess and answer lists, falling back to the embedded ones
fn load_vocabulary(guesses: Option<&Path>, answers: Option<&Path>) -> Result<Vocabulary> {
    if guesses.is_none() && answers.is_none() {
        return Ok(Vocabulary::embedded());
    }

    let guesses = match guesses {
        Some(path) => loader::load_from_file(path)?,
        None => loader::words_from_slice(GUESSES)?,
    };
    let answers = match answers {
        Some(path) => loader::load_from_file(path)?,
        None => loader::words_from_slice(ANSWERS)?,
    };

    Vocabulary::new(guesses, answers).context("invalid word lists")
}

fn run_play_command(vocabulary: &Vocabulary, config: &PlayConfig) -> Result<()> {
    let answer = random_answer(vocabulary, &mut rand::rng());
    log::debug!("play: answer is {answer}");

    println!(
        "Guess the 5-letter word in {} tries{}",
        config.max_guesses,
        if config.hard_mode { " (hard mode)" } else { "" }
    );

    let outcome = play(
        &answer,
        vocabulary,
        config,
        io::stdin().lock(),
        &mut io::stdout().lock(),
    )?;

    if let PlayOutcome::Abandoned { guesses } = outcome {
        log::info!("play: input closed after {guesses} guesses");
    }
    Ok(())
}

//! Display functions for command results

use super::formatters::{clue_row, entropy_bar, histogram_bar};
use crate::commands::{AnalysisReport, BatchStatistics, SolveTranscript};
use crate::core::Word;
use crate::solver::SolveState;
use colored::Colorize;

/// Print a verbose solve, one block per round
pub fn print_solve_transcript(transcript: &SolveTranscript) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({})",
        transcript.answer.text().to_uppercase().bright_yellow().bold(),
        transcript.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in transcript.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            clue_row(&step.guess, &step.clues),
            step.clues.to_emoji()
        );
        println!("  Constraints: {}", step.constraints);
        println!("  Remaining:   {}", step.remaining);

        if let Some(words) = &step.remaining_words {
            let listed: Vec<&str> = words.iter().map(Word::text).collect();
            println!("  Candidates:  {}", listed.join(" ").bright_black());
        }
    }

    println!();
    match transcript.state {
        SolveState::Solved => println!(
            "{}",
            format!("✅ Solved in {} attempts", transcript.attempts())
                .green()
                .bold()
        ),
        SolveState::Failed | SolveState::Guessing => println!(
            "{}",
            format!("❌ Failed after {} attempts", transcript.attempts())
                .red()
                .bold()
        ),
    }
}

/// Print batch statistics with the attempts histogram
pub fn print_batch_statistics(stats: &BatchStatistics) {
    let histogram = &stats.histogram;
    let total = histogram.total();

    println!("\n{}", "═".repeat(70));
    println!(" Batch Results ({}) ", stats.strategy);
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Answers evaluated:   {total}");
    println!(
        "  Solved:              {} {}",
        histogram.solved(),
        format!("({:.1}%)", percent(histogram.solved(), total)).green()
    );
    if histogram.failures() > 0 {
        println!(
            "  Failed:              {} {}",
            histogram.failures(),
            format!("({:.1}%)", percent(histogram.failures(), total)).red()
        );
    }
    println!(
        "  Average attempts:    {}",
        format!("{:.3}", histogram.average_attempts())
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.1}ms",
        stats.per_word().as_secs_f64() * 1000.0
    );

    println!("\n📈 {}", "Attempts Distribution".bright_cyan().bold());
    let max_count = histogram.max_count();
    for (attempts, &count) in histogram.buckets().iter().enumerate().skip(1) {
        println!(
            "  {attempts}: {} {count:4} ({:5.1}%)",
            histogram_bar(count, max_count, 40),
            percent(count, total)
        );
    }
    println!(
        "  {}: {:>44} ({:5.1}%)",
        "X".red(),
        histogram.failures(),
        percent(histogram.failures(), total)
    );

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, attempts) in stats.hardest_words.iter().take(5) {
            println!(
                "  {} ({attempts} attempts)",
                word.text().to_uppercase().yellow()
            );
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Unsolved".red().bold());
        let listed: Vec<&str> = stats.failed_words.iter().map(Word::text).collect();
        println!("  {}", listed.join(" "));
    }
}

/// Print the entropy ranking
pub fn print_analysis_report(report: &AnalysisReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ENTROPY ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} guesses against {} answers ({:.2}s)",
        report.guesses_scored,
        report.answers,
        report.duration.as_secs_f64()
    );

    let max_bits = report.max_bits();
    for (rank, ranked) in report.ranking.iter().enumerate() {
        let metrics = &ranked.metrics;
        println!(
            "  {:3}. {} [{}] {}  expected {:6.1}  worst {:4}",
            rank + 1,
            ranked.word.text().to_uppercase().bright_white().bold(),
            entropy_bar(metrics.entropy, max_bits, 20).green(),
            format!("{:.4} bits", metrics.entropy).bright_yellow(),
            metrics.expected_remaining,
            metrics.max_partition
        );
    }
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

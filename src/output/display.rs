//! Display functions for command results

use super::formatters::{count_noun, grid_cells, proportion_bar};
use crate::commands::{BuildReport, ChainResult, StatsReport};
use crate::resolver::{CluesResult, RandomOutcome};
use colored::Colorize;

/// Print a single random draw
pub fn print_random_outcome(outcome: &RandomOutcome) {
    match outcome {
        RandomOutcome::Found(pick) => {
            println!("\n{}", "─".repeat(60).cyan());
            println!(
                "{}  {}",
                grid_cells(&pick.answer).bright_yellow().bold(),
                format!("({})", pick.answer.chars().count()).bright_black()
            );
            println!("{}", "─".repeat(60).cyan());
            println!("\n  {}\n", pick.clue);
        }
        RandomOutcome::Empty(reason) => {
            println!("\n{}\n", format!("❌ {reason}").red().bold());
        }
    }
}

/// Print a chained draw, one step per line
pub fn print_chain(chain: &ChainResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ANSWER CHAIN".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if let Some(start) = &chain.start {
        println!("\n   Start: {}", start.to_uppercase().bright_yellow());
    }
    println!();

    for (i, step) in chain.steps.iter().enumerate() {
        println!(
            "   {:>2}. {:<16} {}",
            i + 1,
            step.answer.bright_yellow().bold(),
            step.clue
        );
    }

    if let Some(RandomOutcome::Empty(reason)) = &chain.stopped {
        println!(
            "\n{}",
            format!("⚠ Chain stopped after {}: {reason}", count_noun(chain.steps.len(), "step"))
                .yellow()
        );
    }
    println!();
}

/// Print every clue for an answer
pub fn print_clues(result: &CluesResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "CLUES FOR".bright_cyan().bold(),
        result.answer.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.clues.is_empty() {
        println!("\n   {}\n", "No known clues.".bright_black());
        return;
    }

    println!("\n📚 {}:", count_noun(result.clues.len(), "clue"));
    for clue in &result.clues {
        println!("   • {clue}");
    }
    println!();
}

/// Print the result of a corpus build
pub fn print_build_report(report: &BuildReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CORPUS BUILT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Contents:".bright_cyan().bold());
    println!("   Puzzle files:  {}", report.files);
    println!("   Lengths:       {}", report.stats.buckets);
    println!(
        "   Answers:       {}",
        format!("{}", report.stats.answers).bright_yellow().bold()
    );
    println!("   Clues:         {}", report.stats.clues);
    println!("   Time taken:    {:.2}s", report.duration.as_secs_f64());
    println!(
        "\n{}",
        format!("✅ Snapshot written to {}", report.output.display())
            .green()
            .bold()
    );
}

/// Print answer counts per length
pub fn print_stats(report: &StatsReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CLUE DATABASE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📈 {}", "Answers by length:".bright_cyan().bold());
    let max = report.max_answers();
    for row in &report.rows {
        let bar = proportion_bar(row.answers, max, 30);
        println!(
            "   {:>2}: {} {:>7} ({})",
            row.length,
            bar.green(),
            row.answers,
            count_noun(row.clues, "clue")
        );
    }

    println!(
        "\n   Total: {}, {}\n",
        count_noun(report.totals.answers, "answer").bright_yellow(),
        count_noun(report.totals.clues, "clue")
    );
}

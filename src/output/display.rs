//! Display functions for command results

use super::formatters::{entropy_bar, feedback_to_symbols};
use crate::commands::{AnalysisResult, FilterResult, RankResult, SolveResult};
use colored::Colorize;

/// Number of members listed per feedback group in an analysis
const GROUP_PREVIEW: usize = 4;

/// Print the top `top` entries of a ranking
pub fn print_rank_result(result: &RankResult, top: usize) {
    println!("\n{}", "═".repeat(70).cyan());
    println!(
        " {} (lookahead {}, {} Pokémon) ",
        "ENTROPY RANKING".bright_cyan().bold(),
        result.lookahead,
        result.pool_size
    );
    println!("{}", "═".repeat(70).cyan());

    println!("\n   {:>4}  {:<24} {:>10}  {:>10}", "#", "Pokémon", "Bits", "Remaining");
    for (i, entry) in result.results.iter().take(top).enumerate() {
        let rank = format!("{:>4}", i + 1);
        let name = format!("{:<24}", entry.name);
        println!(
            "   {}  {} {:>10.4}  {:>10.1}",
            if i == 0 { rank.green().bold() } else { rank.normal() },
            if i == 0 { name.bright_yellow().bold() } else { name.normal() },
            entry.entropy,
            entry.expected_remaining(result.pool_size)
        );
    }

    if result.results.len() > top {
        println!("   … {} more", result.results.len() - top);
    }
    println!(
        "\n⏱  Entropy calculation took {:.2}s",
        result.duration.as_secs_f64()
    );
}

/// Print the result of analyzing one guess
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.name.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible Pokémon:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    if result.lookahead.depth() > 1 {
        println!(
            "   One guess:   {:.3} bits (lookahead {} adds {:.3})",
            result.metrics.entropy,
            result.lookahead,
            result.entropy - result.metrics.entropy
        );
    }
    println!(
        "   Expected:    {:.1} Pokémon remain",
        result.metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} Pokémon remain",
        result.metrics.max_partition
    );
    println!("   Outcomes:    {}", result.metrics.outcomes);

    println!("\n🧩 {}", "Largest feedback groups:".bright_cyan().bold());
    for group in result.groups.iter().take(10) {
        let preview: Vec<&str> = group
            .members
            .iter()
            .take(GROUP_PREVIEW)
            .map(String::as_str)
            .collect();
        let more = group.members.len().saturating_sub(GROUP_PREVIEW);
        println!(
            "   {:>4} × {}  {}{}",
            group.members.len(),
            feedback_to_symbols(group.feedback),
            preview.join(", ").bright_black(),
            if more > 0 {
                format!(" (+{more})")
            } else {
                String::new()
            }
        );
    }
}

/// Print the remaining candidates and next-guess suggestions
pub fn print_candidates(result: &FilterResult<'_>, top: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {}",
        "Remaining candidates:".bright_cyan().bold(),
        result.remaining.len()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.remaining.is_empty() {
        println!("{}", "No Pokémon matches every observation".red().bold());
        return;
    }

    for pokemon in result.remaining.iter().take(top) {
        println!(
            "   {:<24} gen {:<2} {:>9}/{:<9} {:>6.1} m {:>7.1} kg",
            pokemon.name(),
            pokemon.generation(),
            pokemon.type1(),
            pokemon.type2(),
            f64::from(pokemon.height()) / 10.0,
            f64::from(pokemon.weight()) / 10.0
        );
    }
    if result.remaining.len() > top {
        println!("   … {} more", result.remaining.len() - top);
    }

    println!("\n💡 {}", "Best next guesses:".bright_cyan().bold());
    for entry in result.suggestions.iter().take(5) {
        println!(
            "   {:<24} {}",
            entry.name,
            format!("{:.3} bits", entry.entropy).bright_yellow()
        );
    }
}

/// Print the result of solving a target
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let feedback = step
            .feedback
            .map_or_else(|| "all exact".to_string(), feedback_to_symbols);
        println!("\nTurn {}: {}  {}", i + 1, step.name.bold(), feedback);
        println!(
            "  Candidates: {} → {}",
            step.candidates_before, step.candidates_after
        );
        println!("  Entropy:    {:.3} bits", step.entropy);
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

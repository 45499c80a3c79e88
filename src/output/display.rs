//! Display functions for command results

use super::formatters::{create_progress_bar, entropy_bar, format_predicates};
use crate::commands::{AnalysisResult, TopEntropies};
use crate::core::{ConstraintPredicate, Word};
use crate::solver::{HardModeReport, NOTABLE_COST, Recommendation, ScoredGuess, WorstCase};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for the full-corpus scoring pass
#[must_use]
pub fn scoring_progress(hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | eta {eta}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Print a suggested guess with the metrics it was selected on
pub fn print_recommendation(recommendation: &Recommendation) {
    let metrics = &recommendation.metrics;
    let entropy = recommendation.entropy();

    println!("────────────────────────────────────────────────────────────");
    println!("{} candidates remaining", recommendation.candidates);
    println!("────────────────────────────────────────────────────────────");
    println!(
        "\n📊 Suggested guess: {}",
        recommendation.guess.text().to_uppercase().bright_yellow().bold()
    );
    println!(
        "   Entropy:          [{}] {:.3} / {:.3} bits",
        entropy_bar(entropy, recommendation.max_entropy, 20).green(),
        entropy,
        recommendation.max_entropy
    );
    println!(
        "   Expected remain:  {:.1} candidates",
        metrics.expected_remaining
    );
    println!(
        "   Worst case:       {} candidates\n",
        metrics.max_partition
    );
}

/// Print a short candidate list
pub fn print_candidates(candidates: &[Word]) {
    println!("Remaining candidates:");
    for candidate in candidates {
        println!("  • {}", candidate.text().to_uppercase());
    }
    println!();
}

/// Print the single word left standing
pub fn print_solved(word: &Word, predicates: &[ConstraintPredicate]) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "  {} {}",
        "✅ The answer is".green().bold(),
        word.text().to_uppercase().bright_yellow().bold()
    );
    println!("  Constraints: {}", format_predicates(predicates).bright_black());
    println!("{}\n", "═".repeat(60).bright_cyan());
}

/// Print the dead end reached when nothing fits
pub fn print_exhausted(predicates: &[ConstraintPredicate]) {
    println!(
        "\n{}",
        "❌ No word in the list satisfies every constraint."
            .red()
            .bold()
    );
    println!("   Constraints: {}", format_predicates(predicates));
    println!("   Check the feedback, or the word list may be missing the answer.\n");
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, result.max_entropy, 30);

    println!("\n📊 Against {} words:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {} of {:.3}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow(),
        result.max_entropy
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates remain",
        result.max_partition
    );
    println!("   Patterns:    {} of 243 possible", result.patterns_seen);

    println!("\n📈 {}", "Largest buckets:".bright_cyan().bold());
    for (pattern, count) in &result.largest_buckets {
        println!("   {} {count:5}", pattern.to_emoji());
    }
}

/// Print the best checkpointed words and the score histogram
pub fn print_top_entropies(top: &TopEntropies) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TOP ENTROPIES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if top.total == 0 {
        println!("\nNo scores recorded yet; run the advisor once to fill the checkpoint.");
        return;
    }

    let best = top.words.first().map_or(0.0, |&(_, entropy)| entropy);
    println!();
    for (rank, (word, entropy)) in top.words.iter().enumerate() {
        println!(
            "   {:>3}. {} [{}] {entropy:.4}",
            rank + 1,
            word.to_uppercase().bright_white().bold(),
            entropy_bar(*entropy, best, 30).green()
        );
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&bits, &count) in &top.histogram {
        let pct = (count as f64 / top.total as f64) * 100.0;
        println!(
            "   {bits:2}-{:<2} bits: {} {count:6} ({pct:5.1}%)",
            bits + 1,
            create_progress_bar(pct, 100.0, 40).green()
        );
    }
}

/// Print the outcome of a worst-case search
pub fn print_worst_case(opening: &Recommendation, result: &WorstCase) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORST CASE FROM".bright_cyan().bold(),
        opening.guess.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Worst case:       {}",
        format!("{} guesses", result.depth).yellow().bold()
    );
    if let Some(word) = &result.word {
        println!("   Hardest secret:   {}", word.text().to_uppercase());
    }
    println!("   Average guesses:  {:.3}", result.average_depth());
    println!("   Nodes explored:   {}", result.nodes_explored);
    if result.unresolved > 0 {
        println!(
            "   {}",
            format!("{} secrets could not be separated", result.unresolved).red()
        );
    }

    let solved: usize = result.distribution.values().sum();
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&depth, &count) in &result.distribution {
        let pct = (count as f64 / solved as f64) * 100.0;
        println!(
            "   {depth}: {} {count:6} ({pct:5.1}%)",
            create_progress_bar(pct, 100.0, 40).green()
        );
    }
}

/// Print the hard-mode cost of every bucket the opening leaves
pub fn print_hard_mode(opening: &Recommendation, report: &HardModeReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "HARD MODE AFTER".bright_cyan().bold(),
        opening.guess.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Buckets:          {} ({} resumed)",
        report.partitions.len(),
        report.resumed
    );
    println!(
        "   Expected cost:    {}",
        format!("{:.4} bits", report.expected_cost()).yellow().bold()
    );

    let mut notable: Vec<_> = report.notable().collect();
    if notable.is_empty() {
        println!(
            "\n   Hard mode never costs more than {NOTABLE_COST} bits after this opening."
        );
        return;
    }
    notable.sort_by(|a, b| b.cost().total_cmp(&a.cost()).then(a.pattern.cmp(&b.pattern)));

    let name = |guess: &Option<ScoredGuess>| {
        guess.as_ref().map_or_else(
            || "-".to_string(),
            |g| format!("{} {:.3}", g.word.to_uppercase(), g.entropy),
        )
    };
    println!("\n📈 {}", "Buckets where hard mode loses:".bright_cyan().bold());
    for diff in notable {
        println!(
            "   {} {:5}  hard {:<14} free {:<14} {}",
            diff.feedback().to_emoji(),
            diff.size,
            name(&diff.constrained),
            name(&diff.unconstrained),
            format!("-{:.3}", diff.cost()).red()
        );
    }
}

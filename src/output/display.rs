//! Display functions for command results

use super::formatters::{honeycomb_diagram, score_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::report::{Report, ReportGroup};
use colored::Colorize;

/// Print the result of a best-honeycomb search
pub fn print_solve_result(result: &SolveResult, report: Option<&Report>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BEST HONEYCOMB".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n{}\n",
        honeycomb_diagram(&result.best.honeycomb).bright_yellow().bold()
    );
    println!(
        "   Score:        {}",
        format!("{}", result.best.score).bright_yellow().bold()
    );
    println!("   Letters:      {}", result.best.honeycomb.letters());
    println!("   Center:       {}", result.best.honeycomb.center());

    println!("\n📊 {}", "Search:".bright_cyan().bold());
    println!("   Words:        {}", result.word_count);
    println!("   Letter sets:  {}", result.table_size);
    println!("   Pangram sets: {}", result.pangram_sets);
    println!(
        "   Candidates:   {}",
        result.pangram_sets * 7
    );
    println!("   Table build:  {:.2?}", result.build_time);
    println!("   Search:       {:.2?}", result.search_time);

    if let Some(report) = report {
        print_report(report);
    }
}

/// Print the result of analyzing a specific honeycomb
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "HONEYCOMB ANALYSIS:".bright_cyan().bold(),
        result.report.honeycomb.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n{}",
        honeycomb_diagram(&result.report.honeycomb).bright_yellow().bold()
    );
    println!(
        "\n   Score:  {}",
        format!("{}", result.table_score).bright_yellow().bold()
    );

    print_report(&result.report);
}

/// Print the grouped word report for a honeycomb
pub fn print_report(report: &Report) {
    println!("\n📖 {}", "Playable words:".bright_cyan().bold());
    println!(
        "   {} words, {} points",
        report.word_count, report.total_score
    );

    let best_group = report
        .groups
        .iter()
        .map(ReportGroup::score)
        .max()
        .unwrap_or(0);

    for group in &report.groups {
        let is_pangram_group = group.letters.len() == 7;
        let key = if is_pangram_group {
            format!("{} ★", group.letters).bright_yellow().bold()
        } else {
            group.letters.to_string().normal()
        };

        let bar = score_bar(group.score(), best_group, 20);
        println!("\n   {key}  [{}] {} pts", bar.green(), group.score());

        for word in &group.words {
            println!("      {:<16} {:>3}", word.text, word.score);
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Pipeline:".bright_cyan().bold());
    println!("   Words:            {}", result.word_count);
    println!("   Letter sets:      {}", result.table_size);
    println!("   Pangram sets:     {}", result.pangram_sets);
    println!("   Candidates:       {}", result.candidates);
    println!("   Best score:       {}", format!("{}", result.best_score).bright_yellow());

    println!("\n⏱  {}", "Timing:".bright_cyan().bold());
    println!("   Table build:      {:.2?}", result.build_time);
    println!("   Search:           {:.2?}", result.search_time);
    println!("   Candidates/sec:   {:.0}", result.candidates_per_second);

    println!("\n🔍 {}", "Cross-check:".bright_cyan().bold());
    println!("   Verified:         {}", result.verified);
    if result.mismatches == 0 {
        println!("   {}", "All sampled candidates match the naive scan".green());
    } else {
        println!(
            "   {}",
            format!("{} mismatches against the naive scan", result.mismatches)
                .red()
                .bold()
        );
    }
}

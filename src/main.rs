//! Honeycomb Solver - CLI
//!
//! Finds the best spelling-bee honeycomb for a word list, analyzes specific
//! honeycombs, and benchmarks the points-table search.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use honeycomb_solver::{
    commands::{analyze_honeycomb, run_benchmark, solve_wordlist},
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    report::Report,
    wordlists::{DEMO_WORDS, FilterOptions, loader},
};

#[derive(Parser)]
#[command(
    name = "honeycomb_solver",
    about = "Spelling-bee honeycomb optimizer using letter-set aggregation and subset sums",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'demo' (default, embedded list) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "demo")]
    wordlist: String,

    /// Letter excluded from play ('none' to allow all letters)
    #[arg(long, global = true, default_value = "S")]
    forbidden: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the best honeycomb for the word list (default)
    Solve {
        /// Show the full grouped word report for the winner
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score a specific honeycomb and list its playable words
    Analyze {
        /// The honeycomb's 7 letters, e.g. ACEIORT
        letters: String,

        /// The center letter
        center: char,
    },

    /// Benchmark the points-table search against the naive word scan
    Benchmark {
        /// Number of random candidates to cross-check
        #[arg(short = 'n', long, default_value = "200")]
        sample: usize,
    },
}

/// Build filter options from the --forbidden flag
fn parse_forbidden(raw: &str) -> Result<FilterOptions> {
    let forbidden = match raw {
        "none" | "" => None,
        s if s.len() == 1 && s.chars().all(|c| c.is_ascii_alphabetic()) => {
            s.chars().next().map(|c| c.to_ascii_uppercase())
        }
        other => bail!("--forbidden must be a single letter or 'none', got {other:?}"),
    };

    Ok(FilterOptions {
        forbidden,
        ..FilterOptions::default()
    })
}

/// Load and filter the word list selected by the -w flag
fn load_words(wordlist_mode: &str, options: &FilterOptions) -> Result<Vec<Word>> {
    match wordlist_mode {
        "demo" => Ok(loader::words_from_slice(DEMO_WORDS, options)),
        path => Ok(loader::load_from_file(path, options)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = parse_forbidden(&cli.forbidden)?;
    let words = load_words(&cli.wordlist, &options)?;

    // Default to Solve mode if no command given
    let command = cli.command.unwrap_or(Commands::Solve { verbose: false });

    match command {
        Commands::Solve { verbose } => run_solve_command(&words, verbose),
        Commands::Analyze { letters, center } => run_analyze_command(&letters, center, &words),
        Commands::Benchmark { sample } => run_benchmark_command(&words, sample),
    }
}

fn run_solve_command(words: &[Word], verbose: bool) -> Result<()> {
    let result = solve_wordlist(words)?;

    let report = verbose.then(|| Report::build(words, &result.best.honeycomb));
    print_solve_result(&result, report.as_ref());
    Ok(())
}

fn run_analyze_command(letters: &str, center: char, words: &[Word]) -> Result<()> {
    let result = analyze_honeycomb(letters, center, words).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(words: &[Word], sample: usize) -> Result<()> {
    println!(
        "Benchmarking on {} words, cross-checking {sample} random candidates...",
        words.len()
    );

    let result = run_benchmark(words, sample)?;
    print_benchmark_result(&result);
    Ok(())
}

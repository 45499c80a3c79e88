//! Wordle Advisor - CLI
//!
//! Suggests the guess with the most expected information, then narrows the
//! word list as feedback is entered.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::io;
use std::path::{Path, PathBuf};
use wordle_advisor::{
    commands::{analyze_hard_mode, analyze_word, analyze_worst_case, run_advise, top_entropies},
    output::{
        print_analysis_result, print_hard_mode, print_top_entropies, print_worst_case,
        scoring_progress,
    },
    solver::{
        CheckpointPolicy, EntropyCache, JsonCheckpoint, Phase, PoolMode, Session, SessionConfig,
    },
    wordlists::{Corpus, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Recommends Wordle guesses by maximizing expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess list: whitespace-separated words; only five-letter words are used
    #[arg(short = 'w', long, global = true, default_value = "words.txt")]
    wordlist: PathBuf,

    /// Possible secrets, same format; defaults to the guess list
    #[arg(short, long, global = true)]
    answers: Option<PathBuf>,

    /// Checkpoint file for first-guess scores
    #[arg(short, long, global = true, default_value = "entropy.checkpoint.json")]
    cache: PathBuf,

    /// Neither read nor write the checkpoint
    #[arg(long, global = true)]
    no_cache: bool,

    /// Words scored between checkpoint saves
    #[arg(long, global = true, default_value_t = CheckpointPolicy::default().every)]
    checkpoint_every: usize,

    /// Words eligible as follow-up guesses
    #[arg(long, global = true, value_enum, default_value_t = Pool::Candidates)]
    pool: Pool,

    /// Show debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only show warnings and errors; hides the progress bar
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive advisor (default)
    Advise,

    /// Analyze the entropy of a specific word against the word list
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// List the best words recorded in the checkpoint
    Top {
        /// Number of words to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Hide words scoring below this many bits
        #[arg(long, default_value = "0.0")]
        min_bits: f64,
    },

    /// Find the most guesses the advisor could need
    WorstCase,

    /// Measure what hard mode costs after the opening guess
    HardMode {
        /// Progress file, resumed if the run was interrupted
        #[arg(long, default_value = "hard_mode.checkpoint.json")]
        progress_file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Pool {
    /// Only words still consistent with the feedback
    Candidates,
    /// Any word in the list
    Corpus,
}

impl From<Pool> for PoolMode {
    fn from(pool: Pool) -> Self {
        match pool {
            Pool::Candidates => Self::Candidates,
            Pool::Corpus => Self::Corpus,
        }
    }
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }

    /// The guess list and the answer list
    fn load_lists(&self) -> Result<(Corpus, Corpus)> {
        let guesses = load_from_file(&self.wordlist)?;
        let answers = match &self.answers {
            Some(path) => load_from_file(path)?,
            None => guesses.clone(),
        };
        Ok((guesses, answers))
    }

    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            cache: (!self.no_cache).then(|| EntropyCache::new(&self.cache)),
            checkpoint: CheckpointPolicy::new(self.checkpoint_every),
            pool: self.pool.into(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still overrides the flags
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    match cli.command.as_ref().unwrap_or(&Commands::Advise) {
        Commands::Advise => run_advise_command(&cli),
        Commands::Analyze { word } => run_analyze_command(&cli, word),
        Commands::Top { count, min_bits } => run_top_command(&cli, *count, *min_bits),
        Commands::WorstCase => run_worst_case_command(&cli),
        Commands::HardMode { progress_file } => run_hard_mode_command(&cli, progress_file),
    }
}

fn run_advise_command(cli: &Cli) -> Result<()> {
    let (guesses, answers) = cli.load_lists()?;
    let mut session = Session::with_answers(guesses, answers, cli.session_config());

    let progress = scoring_progress(cli.quiet);
    match run_advise(&mut session, io::stdin().lock(), &progress)? {
        Phase::Exhausted => bail!("no possible answer matches the feedback"),
        _ => Ok(()),
    }
}

fn run_analyze_command(cli: &Cli, word: &str) -> Result<()> {
    let (guesses, answers) = cli.load_lists()?;
    let result = analyze_word(word, &guesses, answers.words())?;
    print_analysis_result(&result);
    Ok(())
}

fn run_top_command(cli: &Cli, count: usize, min_bits: f64) -> Result<()> {
    let top = top_entropies(&EntropyCache::new(&cli.cache), count, min_bits)?;
    print_top_entropies(&top);
    Ok(())
}

fn run_worst_case_command(cli: &Cli) -> Result<()> {
    let (guesses, answers) = cli.load_lists()?;
    println!("Searching every branch of {} answers...", answers.len());

    let progress = scoring_progress(cli.quiet);
    let (opening, result) = analyze_worst_case(guesses, answers, cli.session_config(), &progress)
        .context("worst-case search failed")?;
    print_worst_case(&opening, &result);
    Ok(())
}

fn run_hard_mode_command(cli: &Cli, progress_file: &Path) -> Result<()> {
    let (guesses, answers) = cli.load_lists()?;
    println!(
        "Comparing hard mode over {} answers and {} guesses...",
        answers.len(),
        guesses.len()
    );

    let store = (!cli.no_cache).then(|| JsonCheckpoint::new(progress_file));
    let (opening, report) = analyze_hard_mode(
        guesses,
        answers,
        cli.session_config(),
        store.as_ref(),
        || scoring_progress(cli.quiet),
    )
    .context("hard-mode comparison failed")?;
    print_hard_mode(&opening, &report);
    Ok(())
}

//! Command-line and environment configuration.

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use dictation_core::{ExportFormat, SelectorConfig, View, DEFAULT_LANG};
use std::path::PathBuf;

use crate::speech::DEFAULT_TTS;

#[derive(Debug, Parser)]
#[command(name = "dictation", version, about = "Vocabulary dictation trainer")]
pub struct Cli {
    /// SQLite database holding learning history.
    #[arg(long, global = true, env = "DICTATION_DB")]
    pub db: Option<PathBuf>,

    /// JSON word list (array of {word, rank, sentence}).
    #[arg(long, global = true, env = "DICTATION_CORPUS", default_value = "data/words.json")]
    pub corpus: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a dictation session.
    Practice(PracticeArgs),
    /// Show learning history and overall progress.
    Progress {
        /// Show every record instead of the latest ten.
        #[arg(long)]
        all: bool,
    },
    /// Write learning history to a file (or stdout).
    Export {
        #[arg(long, value_enum, default_value_t = FormatArg::Json)]
        format: FormatArg,
        /// Output file; defaults to stdout.
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Replace learning history with a JSON snapshot.
    Import {
        file: PathBuf,
    },
    /// Erase all learning history.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Args)]
pub struct PracticeArgs {
    /// Only quiz words with frequency rank at or below this value (0 = no limit).
    #[arg(long, default_value_t = 1000)]
    pub rank_limit: u32,

    /// Questions per session (at least one).
    #[arg(
        long,
        default_value_t = 10,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub max_questions: usize,

    /// Correct answers needed before a word is retired.
    #[arg(long, default_value_t = 2)]
    pub mastery_threshold: u32,

    /// Also quiz words that have no example sentence.
    #[arg(long)]
    pub allow_missing_sentence: bool,

    /// Retire words skipped `mastery_threshold` times as well.
    #[arg(long)]
    pub exclude_repeated_skips: bool,

    /// Seed for reproducible question order.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Language tag passed to the speech program.
    #[arg(long, default_value = DEFAULT_LANG)]
    pub lang: String,

    /// Text-to-speech program.
    #[arg(long, env = "DICTATION_TTS", default_value = DEFAULT_TTS)]
    pub tts: String,

    /// Do not speak prompts.
    #[arg(long)]
    pub no_speech: bool,

    /// Print the prompt text instead of relying on audio only.
    #[arg(long)]
    pub show_prompt: bool,
}

impl PracticeArgs {
    pub fn selector_config(&self) -> SelectorConfig {
        SelectorConfig {
            rank_limit: (self.rank_limit > 0).then_some(self.rank_limit),
            max_questions: self.max_questions,
            mastery_threshold: self.mastery_threshold,
            require_sentence: !self.allow_missing_sentence,
            exclude_repeated_skips: self.exclude_repeated_skips,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Csv,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Csv => ExportFormat::Csv,
        }
    }
}

pub fn view(all: bool) -> View {
    if all {
        View::All
    } else {
        View::Latest
    }
}

/// Default database location under the platform data directory.
pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dictation-trainer")
        .join("dictation.db")
}

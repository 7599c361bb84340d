//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Command`] - The `analyze`, `export` and `context` subcommands
//! - [`OutputFormat`] - Event export format options
//!
//! The argument structs convert into library configuration, so the binary
//! holds no parsing or analysis logic of its own:
//!
//! ```rust
//! use chatlens::cli::{Args, Command};
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatlens", "analyze", "chat.txt", "--top-words", "5"]);
//! let Command::Analyze(analyze) = args.command else { unreachable!() };
//! assert_eq!(analyze.analysis_config().top_tokens, 5);
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{AnalysisConfig, DEFAULT_SAMPLE_SIZE, ParserConfig};
use crate::core::tokens::WordChars;
use crate::stopwords::StopWordSource;

/// Analyze exported chat logs: who talks, when, and about what.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens analyze chat.txt
    chatlens analyze team.txt family.txt --top-words 50 --json -o summary.json
    chatlens analyze chat.txt --stop-words stopwords.txt
    chatlens export chat.txt -f jsonl -o events.jsonl
    chatlens context chat.txt --sample 50")]
pub struct Args {
    /// Log debug output (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Default log filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print activity, word and emoji statistics
    Analyze(AnalyzeArgs),

    /// Write the normalized event stream
    Export(ExportArgs),

    /// Print a sampled context block for downstream prompts
    Context(ContextArgs),
}

/// Options shared by every subcommand.
#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
    /// Exported chat logs to read
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Drop app notices that look like messages
    #[arg(long)]
    pub skip_notices: bool,

    /// Do not warn about malformed message lines
    #[arg(long)]
    pub quiet_malformed: bool,
}

impl InputArgs {
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new()
            .with_skip_system_notices(self.skip_notices)
            .with_warn_on_malformed(!self.quiet_malformed)
    }
}

/// Options that control the aggregation.
#[derive(clap::Args, Debug, Clone)]
pub struct StatsArgs {
    /// Stop-word list: a file path, an http(s) URL, or "builtin"
    #[arg(long, value_name = "LOCATION", default_value = "builtin")]
    pub stop_words: StopWordSource,

    /// Number of authors to rank
    #[arg(long, value_name = "N", default_value_t = AnalysisConfig::default().top_authors)]
    pub top_authors: usize,

    /// Number of words to rank
    #[arg(long, value_name = "N", default_value_t = AnalysisConfig::default().top_tokens)]
    pub top_words: usize,

    /// Number of emojis to rank
    #[arg(long, value_name = "N", default_value_t = AnalysisConfig::default().top_emojis)]
    pub top_emojis: usize,

    /// Keep non-ASCII letters in words (default keeps ASCII only)
    #[arg(long)]
    pub unicode_words: bool,
}

impl StatsArgs {
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::new()
            .with_top_authors(self.top_authors)
            .with_top_tokens(self.top_words)
            .with_top_emojis(self.top_emojis)
            .with_word_chars(if self.unicode_words {
                WordChars::Unicode
            } else {
                WordChars::Ascii
            })
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub stats: StatsArgs,

    /// Print the summary as JSON instead of a text report
    #[arg(long)]
    pub json: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl AnalyzeArgs {
    pub fn analysis_config(&self) -> AnalysisConfig {
        self.stats.analysis_config()
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (detected from the output extension when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to output file (stdout when omitted)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ContextArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub stats: StatsArgs,

    /// Maximum number of sampled messages
    #[arg(long, value_name = "N", default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample: usize,
}

/// Event export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of events
    Json,

    /// JSON Lines - one JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

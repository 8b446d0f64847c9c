//! Command line argument parsing for the textmetrics CLI using clap.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// textmetrics - lexical metrics for plain text
#[derive(Parser, Debug, Clone)]
#[command(name = "textmetrics")]
#[command(about = "Word count, sentiment, keywords, complexity and reading time for plain text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TextMetricsArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Engine configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "TEXTMETRICS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TextMetricsArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Full report: every metric plus keywords and readability statistics
    Analyze(InputArgs),

    /// Count normalized words
    #[command(name = "word-count")]
    WordCount(InputArgs),

    /// Sentiment score and label
    Sentiment(InputArgs),

    /// Most frequent content words
    Keywords(KeywordsArgs),

    /// Readability-based complexity
    Complexity(InputArgs),

    /// Estimated reading time in minutes
    #[command(name = "reading-time")]
    ReadingTime(InputArgs),
}

impl Command {
    /// The input source shared by every command.
    pub fn input(&self) -> &InputArgs {
        match self {
            Command::Analyze(input)
            | Command::WordCount(input)
            | Command::Sentiment(input)
            | Command::Complexity(input)
            | Command::ReadingTime(input) => input,
            Command::Keywords(args) => &args.input,
        }
    }
}

/// Where the text comes from
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Text file to analyze; reads standard input when omitted
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

/// Arguments for keyword extraction
#[derive(Args, Debug, Clone)]
pub struct KeywordsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Maximum number of keywords (defaults to the configured value)
    #[arg(short, long, value_name = "N")]
    pub max: Option<usize>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_from_stdin() {
        let args = TextMetricsArgs::try_parse_from(["textmetrics", "analyze"]).unwrap();
        assert!(matches!(args.command, Command::Analyze(_)));
        assert!(args.command.input().file().is_none());
        assert_eq!(args.output_format, OutputFormat::Human);
    }

    #[test]
    fn test_keywords_command() {
        let args = TextMetricsArgs::try_parse_from([
            "textmetrics",
            "keywords",
            "notes.txt",
            "--max",
            "5",
        ])
        .unwrap();

        if let Command::Keywords(keyword_args) = &args.command {
            assert_eq!(keyword_args.max, Some(5));
            assert_eq!(keyword_args.input.file(), Some(Path::new("notes.txt")));
        } else {
            panic!("Expected Keywords command");
        }
    }

    #[test]
    fn test_global_options() {
        let args = TextMetricsArgs::try_parse_from([
            "textmetrics",
            "-f",
            "json",
            "--pretty",
            "--config",
            "engine.json",
            "reading-time",
            "essay.txt",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        assert_eq!(args.config, Some(PathBuf::from("engine.json")));
        assert!(matches!(args.command, Command::ReadingTime(_)));
    }

    #[test]
    fn test_verbosity_levels() {
        let args = TextMetricsArgs::try_parse_from(["textmetrics", "word-count"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = TextMetricsArgs::try_parse_from(["textmetrics", "-vvv", "word-count"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args =
            TextMetricsArgs::try_parse_from(["textmetrics", "-vv", "-q", "word-count"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(TextMetricsArgs::try_parse_from(["textmetrics", "-f", "yaml", "analyze"]).is_err());
    }
}

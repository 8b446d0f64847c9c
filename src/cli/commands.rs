//! Command implementations for the textmetrics CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::EngineConfig;
use crate::engine::AnalysisEngine;
use crate::error::Result;
use crate::scoring::sentiment::SentimentLabel;

/// Execute a CLI command, reading its input and printing the result.
pub fn execute_command(args: TextMetricsArgs) -> Result<()> {
    let engine = build_engine(&args)?;
    let text = read_input(args.command.input().file())?;
    let rendered = run_command(&args, &engine, &text)?;
    println!("{rendered}");
    Ok(())
}

/// Build the engine from `--config` when given, else from the defaults.
pub fn build_engine(args: &TextMetricsArgs) -> Result<AnalysisEngine> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading engine configuration from {}", path.display());
            EngineConfig::from_json_file(path)
                .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    AnalysisEngine::with_config(config)
}

/// Read the text to analyze from `file`, or from standard input.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    let bytes = match file {
        Some(path) => {
            debug!("Reading input from {}", path.display());
            fs::read(path)?
        }
        None => {
            debug!("Reading input from standard input");
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Run the command in `args` over `text` and render its result.
pub fn run_command(args: &TextMetricsArgs, engine: &AnalysisEngine, text: &str) -> Result<String> {
    match &args.command {
        Command::Analyze(_) => render_result("Analysis", &engine.report(text), args),
        Command::WordCount(_) => word_count(text, engine, args),
        Command::Sentiment(_) => sentiment(text, engine, args),
        Command::Keywords(keyword_args) => keywords(text, keyword_args, engine, args),
        Command::Complexity(_) => complexity(text, engine, args),
        Command::ReadingTime(_) => reading_time(text, engine, args),
    }
}

fn word_count(text: &str, engine: &AnalysisEngine, cli_args: &TextMetricsArgs) -> Result<String> {
    let result = WordCountResult {
        word_count: engine.word_count(text),
    };
    render_result("Word count", &result, cli_args)
}

fn sentiment(text: &str, engine: &AnalysisEngine, cli_args: &TextMetricsArgs) -> Result<String> {
    let score = engine.sentiment_score(text);
    let result = SentimentResult {
        sentiment: score,
        label: SentimentLabel::from_score(score, engine.config().label_threshold),
    };
    render_result("Sentiment", &result, cli_args)
}

fn keywords(
    text: &str,
    args: &KeywordsArgs,
    engine: &AnalysisEngine,
    cli_args: &TextMetricsArgs,
) -> Result<String> {
    let max = args.max.unwrap_or(engine.config().max_keywords);
    let result = KeywordsResult {
        keywords: engine.ranked_keywords(text, max),
    };
    render_result("Keywords", &result, cli_args)
}

fn complexity(text: &str, engine: &AnalysisEngine, cli_args: &TextMetricsArgs) -> Result<String> {
    let readability = engine.readability(text);
    let result = ComplexityResult {
        complexity: readability.as_ref().map_or(0.0, |stats| stats.complexity()),
        readability: if cli_args.verbosity() > 1 {
            readability
        } else {
            None
        },
    };
    render_result("Complexity", &result, cli_args)
}

fn reading_time(text: &str, engine: &AnalysisEngine, cli_args: &TextMetricsArgs) -> Result<String> {
    let result = ReadingTimeResult {
        reading_time: engine.reading_time(text),
        word_count: engine.word_count(text),
    };
    render_result("Reading time", &result, cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn parse(argv: &[&str]) -> TextMetricsArgs {
        let mut full = vec!["textmetrics"];
        full.extend_from_slice(argv);
        TextMetricsArgs::try_parse_from(full).unwrap()
    }

    fn run(argv: &[&str], text: &str) -> String {
        let args = parse(argv);
        let engine = build_engine(&args).unwrap();
        run_command(&args, &engine, text).unwrap()
    }

    #[test]
    fn test_word_count() {
        assert_eq!(run(&["word-count"], "Hello world, it's me!"), "Word count: 3");
    }

    #[test]
    fn test_sentiment_json() {
        let out = run(&["-f", "json", "sentiment"], "very good");
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["label"], "POSITIVE");
        assert!((value["sentiment"].as_f64().unwrap() - 0.45).abs() < 1e-6);
    }

    #[test]
    fn test_keywords_respects_max() {
        let out = run(
            &["-f", "json", "keywords", "--max", "1"],
            "testing testing coding coding coding",
        );
        assert_eq!(out, r#"{"keywords":[{"word":"coding","count":3}]}"#);
    }

    #[test]
    fn test_complexity_stats_only_when_verbose() {
        let out = run(&["-f", "json", "complexity"], "happy people.");
        assert!(!out.contains("readability"));

        let out = run(&["-f", "json", "-vv", "complexity"], "happy people.");
        assert!(out.contains("\"sentence_count\":1"));
    }

    #[test]
    fn test_reading_time_of_empty_input() {
        let out = run(&["-f", "json", "reading-time"], "");
        assert_eq!(out, r#"{"reading_time":0,"word_count":0}"#);
    }

    #[test]
    fn test_analyze_report() {
        let out = run(&["-f", "json", "analyze"], "This is an absolutely amazing product");
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["word_count"], 4);
        assert_eq!(value["sentiment"], 1.0);
        assert_eq!(value["sentiment_label"], "POSITIVE");
        assert_eq!(value["reading_time"], 1);
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, b"caf\xff text").unwrap();

        let text = read_input(Some(path.as_path())).unwrap();
        assert_eq!(text, "caf\u{FFFD} text");
        assert!(read_input(Some(dir.path().join("missing.txt").as_path())).is_err());
    }

    #[test]
    fn test_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("engine.json");
        fs::write(&path, r#"{"max_keywords": 1}"#).unwrap();

        let config = path.to_str().unwrap();
        let out = run(&["-f", "json", "--config", config, "keywords"], "rust rust code");
        assert_eq!(out, r#"{"keywords":[{"word":"rust","count":2}]}"#);

        fs::write(&path, r#"{"words_per_minute": 0}"#).unwrap();
        let args = parse(&["--config", config, "analyze"]);
        let err = build_engine(&args).unwrap_err();
        assert!(err.to_string().contains("engine.json"));
        assert!(err.to_string().contains("words_per_minute"));
    }

    #[test]
    fn test_config_error_message() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("engine.json");
        fs::write(&path, r#"{"words_per_minute": 0}"#).unwrap();

        let args = parse(&["--config", path.to_str().unwrap(), "analyze"]);
        let message = build_engine(&args).unwrap_err().to_string();
        assert!(message.starts_with(&format!("{}: Invalid configuration:", path.display())));
    }
}

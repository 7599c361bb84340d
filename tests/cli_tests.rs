//! Argument parsing tests for the CLI module

use chatlens::cli::{Args, Command, OutputFormat};
use chatlens::config::{AnalysisConfig, DEFAULT_SAMPLE_SIZE};
use chatlens::core::WordChars;
use chatlens::stopwords::StopWordSource;
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("chatlens").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_output_format_values() {
    for (value, expected) in [
        ("csv", OutputFormat::Csv),
        ("json", OutputFormat::Json),
        ("jsonl", OutputFormat::Jsonl),
        ("ndjson", OutputFormat::Jsonl),
    ] {
        let Command::Export(export) = parse(&["export", "a.txt", "-f", value]).command else {
            panic!("expected export");
        };
        assert_eq!(export.format, Some(expected), "{value}");
    }
}

#[test]
fn test_output_format_errors() {
    for value in ["", "xml", "yaml", "txt"] {
        assert!(Args::try_parse_from(["chatlens", "export", "a.txt", "-f", value]).is_err());
    }
}

#[test]
fn test_output_format_conversion() {
    assert_eq!(
        chatlens::format::OutputFormat::from(OutputFormat::Csv),
        chatlens::format::OutputFormat::Csv
    );
    assert_eq!(
        chatlens::format::OutputFormat::from(OutputFormat::Json),
        chatlens::format::OutputFormat::Json
    );
    assert_eq!(
        chatlens::format::OutputFormat::from(OutputFormat::Jsonl),
        chatlens::format::OutputFormat::Jsonl
    );
    assert_eq!(OutputFormat::default(), OutputFormat::Csv);
    assert_eq!(OutputFormat::Csv.to_string(), "CSV");
}

#[test]
fn test_export_without_format_or_output() {
    let Command::Export(export) = parse(&["export", "a.txt"]).command else {
        panic!("expected export");
    };
    assert_eq!(export.format, None);
    assert_eq!(export.output, None);
}

#[test]
fn test_analyze_all_flags() {
    let args = parse(&[
        "--verbose",
        "analyze",
        "a.txt",
        "b.txt",
        "--skip-notices",
        "--quiet-malformed",
        "--stop-words",
        "stop.txt",
        "--top-authors",
        "3",
        "--top-words",
        "7",
        "--top-emojis",
        "2",
        "--unicode-words",
        "--json",
        "-o",
        "out.json",
    ]);
    assert!(args.verbose);

    let Command::Analyze(analyze) = args.command else {
        panic!("expected analyze");
    };
    assert_eq!(analyze.input.files, [PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    assert!(analyze.json);
    assert_eq!(analyze.output, Some(PathBuf::from("out.json")));
    assert_eq!(analyze.stats.stop_words, StopWordSource::file("stop.txt"));

    let parser = analyze.input.parser_config();
    assert!(parser.skip_system_notices);
    assert!(!parser.warn_on_malformed);

    let config = analyze.analysis_config();
    assert_eq!(config.top_authors, 3);
    assert_eq!(config.top_tokens, 7);
    assert_eq!(config.top_emojis, 2);
    assert_eq!(config.word_chars, WordChars::Unicode);
}

#[test]
fn test_default_configs() {
    let Command::Context(context) = parse(&["context", "a.txt"]).command else {
        panic!("expected context");
    };
    assert_eq!(context.sample, DEFAULT_SAMPLE_SIZE);
    assert_eq!(context.stats.analysis_config(), AnalysisConfig::default());

    let parser = context.input.parser_config();
    assert!(!parser.skip_system_notices);
    assert!(parser.warn_on_malformed);
}

#[test]
fn test_builtin_stop_words_keyword() {
    let Command::Analyze(analyze) = parse(&["analyze", "a.txt", "--stop-words", "builtin"]).command
    else {
        panic!("expected analyze");
    };
    assert_eq!(analyze.stats.stop_words, StopWordSource::Builtin);
}

#[test]
fn test_invalid_numbers_rejected() {
    assert!(Args::try_parse_from(["chatlens", "analyze", "a.txt", "--top-words", "-1"]).is_err());
    assert!(Args::try_parse_from(["chatlens", "context", "a.txt", "--sample", "many"]).is_err());
}

#[test]
fn test_subcommand_required() {
    assert!(Args::try_parse_from(["chatlens"]).is_err());
    assert!(Args::try_parse_from(["chatlens", "a.txt"]).is_err());
}

//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use clap::Parser as ClapParser;
use env_logger::Env;
use log::debug;

use chatlens::ChatlensError;
use chatlens::cli::{AnalyzeArgs, Args, Command, ContextArgs, ExportArgs, InputArgs, StatsArgs};
use chatlens::core::output::summary_to_json;
use chatlens::core::{Aggregator, InsightContext, merged_events};
use chatlens::format::{OutputFormat, events_to_string, write_events};
use chatlens::parser::{LogParser, ParsedSource};
use chatlens::report::render_text;
use chatlens::stopwords::StopWordCache;

fn main() {
    let args = <Args as ClapParser>::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level())).init();

    if let Err(e) = run(args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), ChatlensError> {
    match args.command {
        Command::Analyze(analyze) => run_analyze(&analyze),
        Command::Export(export) => run_export(&export),
        Command::Context(context) => run_context(&context),
    }
}

fn run_analyze(args: &AnalyzeArgs) -> Result<(), ChatlensError> {
    let sources = parse_inputs(&args.input)?;
    let summary = aggregator(&args.stats).analyze(&sources);

    let rendered = if args.json {
        summary_to_json(&summary)?
    } else {
        render_text(&summary)
    };
    emit(&rendered, args.output.as_deref())
}

fn run_export(args: &ExportArgs) -> Result<(), ChatlensError> {
    let sources = parse_inputs(&args.input)?;
    let events = merged_events(&sources);

    let format = match (args.format, &args.output) {
        (Some(format), _) => format.into(),
        (None, Some(path)) => OutputFormat::from_path(&path.to_string_lossy())?,
        (None, None) => OutputFormat::default(),
    };

    match &args.output {
        Some(path) => {
            write_events(&events, &path.to_string_lossy(), format)?;
            eprintln!("✅ {} events written to {} ({format})", events.len(), path.display());
            Ok(())
        }
        None => emit(&events_to_string(&events, format)?, None),
    }
}

fn run_context(args: &ContextArgs) -> Result<(), ChatlensError> {
    let sources = parse_inputs(&args.input)?;
    let summary = aggregator(&args.stats).analyze(&sources);
    let events = merged_events(&sources);

    let context = InsightContext::build(&summary, &events, args.sample);
    emit(&context.render(), None)
}

/// Parses every file concurrently and keeps the ones that worked.
///
/// Per-file failures are reported on stderr; the run fails only when no
/// file yields events.
fn parse_inputs(input: &InputArgs) -> Result<Vec<ParsedSource>, ChatlensError> {
    let parser = LogParser::with_config(input.parser_config());
    let mut sources = Vec::with_capacity(input.files.len());
    let mut last_error = None;

    for (path, result) in input.files.iter().zip(parser.parse_files(&input.files)) {
        match result {
            Ok(source) => {
                debug!("{}: {} events", path.display(), source.len());
                sources.push(source);
            }
            Err(e) => {
                eprintln!("⚠️  Skipping {}: {}", path.display(), e);
                last_error = Some(e);
            }
        }
    }

    match (sources.is_empty(), last_error) {
        (true, Some(e)) => Err(e),
        (true, None) => Err(ChatlensError::no_valid_messages(None, 0)),
        (false, _) => Ok(sources),
    }
}

fn aggregator(stats: &StatsArgs) -> Aggregator {
    let cache = StopWordCache::new(stats.stop_words.clone());
    Aggregator::with_cache(stats.analysis_config(), &cache)
}

fn emit(text: &str, output: Option<&Path>) -> Result<(), ChatlensError> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            eprintln!("✅ Output saved to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

//! Punygen - homoglyph punycode variant generator
//!
//! Generates punycode variants of homoglyph substitutions for a letter, a
//! word, or every line of standard input.

use anyhow::Context;
use clap::{CommandFactory, Parser};
use punygen::{GeneratorSettings, InputSource, OutputFormat, PunygenError, Reporter};
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = "\
FORMATS:
  simple       Just the punycode results (default)
  detailed     Pretty formatted with headers and counts
  json         Structured JSON output

SUPPORTED CHARACTERS:
  a-z (lowercase letters with extensive Unicode homoglyph support)
  Includes: Cyrillic, Greek, Armenian, Mathematical symbols, Accented characters,
  Regional variants, and more

ENVIRONMENT VARIABLES:
  PUNYGEN_FORMAT             Default output format
  PUNYGEN_MAX_COMBINATIONS   Default for --max
  PUNYGEN_TIMEOUT_SECS       Default for --timeout
  RUST_LOG                   Log filter for diagnostics on stderr (default: warn)";

#[derive(Parser, Debug)]
#[command(
    name = "punygen",
    version = punygen::VERSION,
    about = "Generate punycode variants of homoglyphs for wordlist generation",
    after_help = AFTER_HELP
)]
struct Cli {
    /// Single letter to generate variants for
    #[arg(short, long, value_name = "LETTER")]
    letter: Option<String>,

    /// Word to generate all possible homoglyph combinations for
    #[arg(short, long, value_name = "WORD")]
    word: Option<String>,

    /// Read input from stdin
    #[arg(short, long)]
    stdin: bool,

    /// Output format [default: simple]
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Maximum number of combinations to generate for words [default: 1000]
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    max: Option<i64>,

    /// Stop each word enumeration after this many seconds
    #[arg(short, long, value_name = "SECS")]
    timeout: Option<u64>,
}

fn main() {
    // Initialize the library
    if let Err(e) = punygen::init() {
        eprintln!("Failed to initialize: {}", e);
        process::exit(1);
    }

    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            // Help and version go to stdout, real errors to stderr
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = run(&cli) {
        match e.downcast_ref::<PunygenError>() {
            Some(err) if err.is_usage() => usage_error(err),
            Some(err) => eprintln!("{}", err.user_message()),
            None => eprintln!("Error: {:#}", e),
        }
        process::exit(1);
    }
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the `warn` default
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Environment defaults overridden by explicit flags
fn resolve_settings(cli: &Cli) -> punygen::Result<GeneratorSettings> {
    let mut settings = GeneratorSettings::from_env()?;
    if let Some(format) = cli.format {
        settings.format = format;
    }
    if let Some(max) = cli.max {
        settings.max_combinations = max;
    }
    if let Some(secs) = cli.timeout {
        settings.timeout = Some(Duration::from_secs(secs));
    }
    Ok(settings)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let source = InputSource::select(cli.letter.clone(), cli.word.clone(), cli.stdin)?;
    let settings = resolve_settings(cli)?;

    tracing::debug!(
        format = %settings.format,
        max_combinations = %settings.max_combinations,
        timeout_secs = ?settings.timeout.map(|t| t.as_secs()),
        "Settings resolved"
    );

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    let mut reporter = Reporter::new(out, io::stderr(), settings);

    let stdin = io::stdin();
    reporter
        .run(source, stdin.lock())
        .context("generation aborted")?;

    Ok(())
}

/// Print `error` followed by usage on stderr and exit with status 1
fn usage_error(error: &PunygenError) -> ! {
    let mut stderr = io::stderr();
    let _ = writeln!(stderr, "{}\n", error.user_message());
    let _ = writeln!(stderr, "{}", Cli::command().render_help());
    process::exit(1);
}

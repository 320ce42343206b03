//! matcalc - evaluate matrix expressions line by line
//!
//! Reads expressions from `-e` arguments, a file, or standard input, and
//! prints each resulting matrix followed by a blank line.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::{debug, info};
use matcalc::prelude::evaluate;

/// matcalc - dense matrix expression calculator
#[derive(Parser)]
#[command(
    name = "matcalc",
    version,
    about = "Evaluate matrix expressions such as ([1 2;3 4] + E2)^-1 * 2",
    long_about = r#"
Each input line holds one expression over matrix literals ([1 2;3 4]),
identities (E3 or I3), real scalars, + - *, parentheses, and postfix
powers (^k, ^-1, ^T). Every line must evaluate to a matrix.

Examples:
  matcalc                               # read expressions from stdin
  matcalc input.txt                     # read expressions from a file
  matcalc -e '[1 2;3 4]^-1'             # evaluate a single expression
  matcalc --keep-going input.txt        # report every failing line
"#,
    after_help = r#"
Environment Variables:
  MATCALC_LOG=debug            env_logger filter (default: warn)
  MATCALC_LOG_LEVEL=debug      Set log level (error, warn, info, debug, trace)
  MATCALC_DEBUG=1              Enable debug logging
  MATCALC_KEEP_GOING=1         Continue after a failing line
"#
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, env = "MATCALC_DEBUG")]
    debug: bool,

    /// Set log level, overriding MATCALC_LOG
    #[arg(long, value_enum, env = "MATCALC_LOG_LEVEL")]
    log_level: Option<LogLevel>,

    /// Continue with the next line after an error
    #[arg(long, env = "MATCALC_KEEP_GOING")]
    keep_going: bool,

    /// Expression to evaluate (repeatable); stdin and FILE are ignored
    #[arg(short = 'e', long = "expr", value_name = "EXPR")]
    exprs: Vec<String>,

    /// File with one expression per line (default: stdin)
    #[arg(conflicts_with = "exprs")]
    file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);
    info!("matcalc v{} starting", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(Summary { failed: 0, .. }) => ExitCode::SUCCESS,
        Ok(summary) => {
            debug!(
                "{} of {} expressions failed",
                summary.failed, summary.evaluated
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let mut builder = env_logger::Builder::from_env(Env::new().filter_or("MATCALC_LOG", "warn"));
    let level = if cli.debug {
        Some(log::LevelFilter::Debug)
    } else {
        cli.log_level.map(Into::into)
    };
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
}

/// Outcome of a session.
#[derive(Debug, Default)]
struct Summary {
    evaluated: usize,
    failed: usize,
}

fn run(cli: &Cli) -> Result<Summary> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.exprs.is_empty() {
        let lines = cli.exprs.iter().map(|e| Ok(e.clone()));
        return evaluate_lines(lines, &mut out, cli.keep_going);
    }

    match &cli.file {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            evaluate_lines(BufReader::new(file).lines(), &mut out, cli.keep_going)
        }
        None => evaluate_lines(io::stdin().lock().lines(), &mut out, cli.keep_going),
    }
}

/// Evaluate every non-blank line, writing results to `out` and errors to
/// stderr. Stops at the first failing line unless `keep_going` is set.
fn evaluate_lines<L, W>(lines: L, out: &mut W, keep_going: bool) -> Result<Summary>
where
    L: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let mut summary = Summary::default();
    for (number, line) in lines.into_iter().enumerate() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }
        summary.evaluated += 1;
        debug!("line {}: {line}", number + 1);
        match evaluate(&line) {
            Ok(m) => {
                writeln!(out, "{m}")?;
                writeln!(out)?;
                out.flush()?;
            }
            Err(e) => {
                summary.failed += 1;
                eprintln!("error: {e}");
                if !keep_going {
                    break;
                }
            }
        }
    }
    Ok(summary)
}

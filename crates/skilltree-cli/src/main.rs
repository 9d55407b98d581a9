//! Skilltree CLI.
//!
//! Scaffolds one folder per catalog record, each holding an `index.js`
//! whose header is the sanitized record. A bare `skilltree` run uses the
//! compiled-in defaults; every input is overridable by flag.
//!
//! # Examples
//!
//! ```bash
//! # Scaffold with the defaults
//! # (data/skills-detailed-technical-javascript.json -> javascript/)
//! skilltree
//!
//! # Scaffold a different catalog into a different tree
//! skilltree --catalog fixtures/python.json \
//!     --category skills.detailed.technical.python \
//!     --destination python
//!
//! # Log and skip failing records instead of aborting
//! skilltree --keep-going
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use skilltree_core::cli::ExitCode;
use skilltree_core::{
    CategoryPath, DEFAULT_CATALOG_PATH, DEFAULT_CATEGORY_PATH, DEFAULT_DESTINATION,
    DEFAULT_EXCLUDED_FIELD, Error, FailurePolicy, ScaffoldConfig,
};
use skilltree_generator::{RunReport, generate};

/// Skilltree - scaffold skill snippet folders from a JSON catalog.
///
/// Reads a catalog of skill records, strips the excluded metadata field
/// from each record, and writes one `<id>-<title>` folder with an
/// `index.js` header file per record. Re-running overwrites in place.
#[derive(Parser, Debug)]
#[command(name = "skilltree")]
#[command(version, about, long_about = None)]
#[command(author = "Skilltree Team")]
struct Cli {
    /// JSON catalog file to read records from
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,

    /// Directory that receives one folder per record
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DESTINATION)]
    destination: PathBuf,

    /// Dotted key path selecting the record array inside the catalog
    #[arg(long, value_name = "DOTTED.PATH", default_value = DEFAULT_CATEGORY_PATH)]
    category: String,

    /// Metadata field stripped from every record before output
    #[arg(long, value_name = "NAME", default_value = DEFAULT_EXCLUDED_FIELD)]
    exclude_field: String,

    /// Log and skip records that fail instead of aborting the run
    #[arg(long)]
    keep_going: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let exit_code = run(&cli);
    std::process::exit(exit_code.as_i32());
}

/// Initializes logging infrastructure.
///
/// Sets up tracing with appropriate log levels based on verbosity flag.
///
/// # Errors
///
/// Returns an error if logging initialization fails.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}

/// Builds the scaffold configuration from parsed flags.
fn build_config(cli: &Cli) -> skilltree_core::Result<ScaffoldConfig> {
    let category = CategoryPath::new(&cli.category)?;
    let failure_policy = if cli.keep_going {
        FailurePolicy::Continue
    } else {
        FailurePolicy::Abort
    };

    Ok(ScaffoldConfig::builder()
        .catalog_path(cli.catalog.clone())
        .destination(cli.destination.clone())
        .category(category)
        .excluded_field(cli.exclude_field.clone())
        .failure_policy(failure_policy)
        .build())
}

/// Runs the scaffold and maps the outcome onto an exit code.
fn run(cli: &Cli) -> ExitCode {
    let config = match build_config(cli) {
        Ok(config) => config,
        Err(error) => {
            report_error(&error);
            return ExitCode::from_error(&error);
        }
    };

    match generate(config) {
        Ok(report) => {
            print_summary(&report);
            if report.is_clean() {
                ExitCode::SUCCESS
            } else {
                ExitCode::ERROR
            }
        }
        Err(error) => {
            report_error(&error);
            ExitCode::from_error(&error)
        }
    }
}

/// Prints the human-readable run summary to stdout.
fn print_summary(report: &RunReport) {
    if report.is_clean() {
        println!(
            "{} {} snippet files written",
            "✓".green().bold(),
            report.written_count()
        );
    } else {
        println!(
            "{} {} written, {} failed",
            "⚠".yellow().bold(),
            report.written_count(),
            report.failure_count()
        );
        for failure in report.failures() {
            eprintln!(
                "  {} record {} ({}): {}",
                "✗".red(),
                failure.id,
                failure.folder,
                failure.error
            );
        }
    }
}

/// Prints an error and its cause chain to stderr.
fn report_error(error: &Error) {
    tracing::error!("Scaffold run failed: {error}");
    eprintln!("{} {error}", "error:".red().bold());

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("  {} {cause}", "caused by:".red());
        source = cause.source();
    }
}

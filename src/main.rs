//! Enum-Scribe main entry point
//!
//! This is the command-line interface for the Enum-Scribe listing generator.

use anyhow::Context;
use clap::Parser;
use enum_scribe::config::{load_config_with_hash, Config};
use enum_scribe::output::{deliver, standard_sinks, ClipboardCopier};
use enum_scribe::{generate, parse_document, GeneratedListing, ScribeError};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Enum-Scribe: error-code enumerations from documentation pages
///
/// Enum-Scribe reads a saved documentation page (by default the SQLite result
/// code reference), picks the headings naming one code each, and generates a
/// C++ enum class with the descriptions as doc comments.
#[derive(Parser, Debug)]
#[command(name = "enum-scribe")]
#[command(version = "1.0.0")]
#[command(about = "Generate error-code enumerations from documentation pages", long_about = None)]
struct Cli {
    /// HTML document to read ("-" for stdin)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also write the listing to this file (replaced on every run)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Copy the listing to the system clipboard
    #[arg(long)]
    copy: bool,

    /// Print the matched entries instead of the listing
    #[arg(long, conflicts_with = "no_stdout")]
    list: bool,

    /// Do not print the listing to stdout
    #[arg(long)]
    no_stdout: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load_configuration(cli.config.as_deref())?;

    let html = read_input(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    tracing::info!("Read {} bytes from {}", html.len(), cli.input.display());

    let document = parse_document(&html);
    let listing = match generate(&document, &config) {
        Ok(listing) => listing,
        Err(e) => {
            tracing::error!("Generation failed: {}", e);
            return Err(e.into());
        }
    };

    if listing.is_empty() {
        tracing::warn!(
            "No <{}> headings with codes found; the enumeration is empty",
            config.selector.heading_tag
        );
    }

    if cli.list {
        print_entries(&listing);
    }

    // The output file is written before stdout
    let mut sinks = standard_sinks(cli.output.as_deref(), !cli.list && !cli.no_stdout);
    deliver(&listing, &mut sinks)
        .map_err(ScribeError::from)
        .context("Failed to write listing")?;

    if cli.copy {
        handle_copy(&config, &listing).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries only the listing.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("enum_scribe=info,warn"),
            1 => EnvFilter::new("enum_scribe=debug,info"),
            2 => EnvFilter::new("enum_scribe=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file, or the defaults when none is given
fn load_configuration(path: Option<&Path>) -> enum_scribe::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    match load_config_with_hash(path) {
        Ok((config, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            Ok(config)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            Err(e.into())
        }
    }
}

/// Reads the whole HTML document from a file or stdin
fn read_input(path: &Path) -> enum_scribe::Result<String> {
    if path == Path::new("-") {
        let mut html = String::new();
        std::io::stdin().read_to_string(&mut html)?;
        Ok(html)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Handles --list: one line per matched entry
fn print_entries(listing: &GeneratedListing) {
    for entry in &listing.entries {
        let documented = if entry.doc.is_some() { "" } else { "  (undocumented)" };
        println!("{:>6}  {}{}", entry.code, entry.name, documented);
    }
    println!("\n{} entries", listing.entries.len());
}

/// Handles --copy: pipes the listing to the clipboard tool
async fn handle_copy(config: &Config, listing: &GeneratedListing) -> enum_scribe::Result<()> {
    let copier = ClipboardCopier::from_config(&config.clipboard)?;
    tracing::debug!("Clipboard command: {}", copier.command().join(" "));

    match copier.copy(&listing.code).await {
        Ok(()) => {
            tracing::info!("Listing copied to the clipboard");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Clipboard copy failed: {}", e);
            Err(e.into())
        }
    }
}

//! league-table - football league standings from match results
//!
//! Reads a season document and writes the ranked standings table as JSON
//! or Markdown.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Invalid arguments, unreadable or malformed input, config errors

mod cli;
mod config;

use anyhow::{Context, Result};
use cli::{Args, OutputFormat};
use config::{Config, CONFIG_FILE};
use league_table::analysis::summarize_season;
use league_table::report::{generate_json_report, generate_markdown_report};
use league_table::{build_league_table, parse_season};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    init_logging(&args);

    info!("league-table v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(&args) {
        error!("Table generation failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .league-table.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() {
        eprintln!("{} already exists. Remove it first or edit it manually.", CONFIG_FILE);
        std::process::exit(1);
    }

    let content = Config::default_toml()?;
    std::fs::write(path, &content).with_context(|| format!("Failed to write {}", CONFIG_FILE))?;

    println!("Created {} with default settings.", CONFIG_FILE);
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr so stdout carries only the table.
fn init_logging(args: &Args) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Load input, build the table and write it out.
fn run(args: &Args) -> Result<()> {
    let mut config = load_config(args)?;
    config.merge_with_args(args);
    let rules = config.table_rules();
    debug!("Rules: {:?}", rules);

    let raw = read_input(args.input_path())?;
    let season = parse_season(&raw).context("Failed to parse season document")?;
    info!(
        "Season `{}`: {} rounds, {} matches",
        season.name.as_deref().unwrap_or(""),
        season.rounds.len(),
        season.match_count()
    );

    let table = build_league_table(&season, &rules)?;
    info!("Ranked {} teams", table.table.len());

    let output = match config.general.format {
        OutputFormat::Json => generate_json_report(&table, config.general.pretty)?,
        OutputFormat::Markdown => {
            let summary = summarize_season(&season.rounds);
            generate_markdown_report(&table, &summary)
        }
    };

    match config.general.output {
        Some(ref path) => {
            let path = PathBuf::from(path);
            std::fs::write(&path, &output)
                .with_context(|| format!("Failed to write table to {}", path.display()))?;
            info!("Table saved to {}", path.display());
        }
        None => {
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
        }
    }

    Ok(())
}

/// Read the season document from a file or standard input.
fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading season from {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            debug!("Reading season from stdin");
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read season from stdin")?;
            Ok(raw)
        }
    }
}

/// Load configuration from file or use defaults.
///
/// A config file that exists but does not parse stops the run.
fn load_config(args: &Args) -> Result<Config> {
    match args.config {
        Some(ref config_path) => info!("Loading config from: {}", config_path.display()),
        None if Path::new(CONFIG_FILE).exists() => {
            info!("Loading default config from {}", CONFIG_FILE)
        }
        None => debug!("No config file found, using defaults"),
    }

    Config::resolve(args.config.as_deref(), Path::new("."))
}

//! share-sweep - spreadsheet-driven cleanup of files shared with you.
//!
//! Two passes over a Google spreadsheet used as both display and control
//! surface: `scan` inventories every file shared with the account, one row
//! per file; the user marks rows in the `RemoveMe` column; `revoke` then
//! drops the account's editor permission on each marked file and writes a
//! completion marker back.

mod application;
mod cli;
mod domain;
mod infrastructure;

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use application::{RevokeService, ScanService, TabularStore};
use cli::{Cli, Commands};
use domain::{AppConfig, Cell, CANONICAL_HEADER};
use infrastructure::{DriveDirectory, SheetsStore, TermNotifier};

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(cli: Cli) -> domain::Result<()> {
    match cli.command {
        Commands::Scan => {
            let config = infrastructure::load_config(cli.config.as_deref())?;
            cmd_scan(&config)?;
        }
        Commands::Revoke => {
            let config = infrastructure::load_config(cli.config.as_deref())?;
            cmd_revoke(&config)?;
        }
        Commands::Init => {
            cmd_init(cli.config.as_deref())?;
        }
        Commands::Paths => {
            let config = infrastructure::load_config(cli.config.as_deref())?;
            cmd_paths(&config);
        }
    }

    Ok(())
}

/// Scan pass: rewrite the sheet from a fresh Drive query.
fn cmd_scan(config: &AppConfig) -> domain::Result<()> {
    config.require_spreadsheet()?;

    let directory = DriveDirectory::connect(&config.drive)?;
    let store = SheetsStore::connect(&config.spreadsheet, &config.drive)?;
    let notifier = TermNotifier;

    let count = ScanService::new(&directory, &store, &notifier).scan()?;

    println!(
        "{} Inventoried {} shared files into '{}'",
        "✓".green().bold(),
        count,
        config.spreadsheet.sheet
    );

    Ok(())
}

/// Revoke pass: act on the flags the user left in the sheet.
fn cmd_revoke(config: &AppConfig) -> domain::Result<()> {
    config.require_spreadsheet()?;

    let directory = DriveDirectory::connect(&config.drive)?;
    let store = SheetsStore::connect(&config.spreadsheet, &config.drive)?;
    let notifier = TermNotifier;

    let count = RevokeService::new(&directory, &store, &notifier).revoke()?;

    println!(
        "{} Removed your editor permission on {} files",
        "✓".green().bold(),
        count
    );

    Ok(())
}

/// Create the default config and write the canonical header row.
fn cmd_init(config_path: Option<&Path>) -> domain::Result<()> {
    infrastructure::ensure_config_exists()?;
    println!(
        "{} Config file at {}",
        "✓".green(),
        AppConfig::config_file_path().display()
    );

    let config = infrastructure::load_config(config_path)?;
    if config.spreadsheet.id.trim().is_empty() {
        println!(
            "{} spreadsheet.id is empty; set it and re-run `share-sweep init` to write the header row",
            "!".yellow().bold()
        );
        return Ok(());
    }

    let store = SheetsStore::connect(&config.spreadsheet, &config.drive)?;
    let header: Vec<Cell> = CANONICAL_HEADER.iter().map(|name| Cell::text(*name)).collect();
    store.write_rows(1, &[header])?;

    println!(
        "{} Header row written to '{}'",
        "✓".green(),
        config.spreadsheet.sheet
    );

    Ok(())
}

/// Show what a run would touch.
fn cmd_paths(config: &AppConfig) {
    let config_path = AppConfig::config_file_path();
    let marker = if config_path.exists() { "exists" } else { "missing" };

    println!("{}", "share-sweep paths".bold());
    println!();
    println!("  config:      {} ({marker})", config_path.display());
    println!("  credentials: {}", config.drive.credentials.display());
    println!(
        "  spreadsheet: {}",
        if config.spreadsheet.id.is_empty() {
            "(not set)".to_string()
        } else {
            config.spreadsheet.id.clone()
        }
    );
    println!("  sheet:       {}", config.spreadsheet.sheet);
    if let Some(subject) = &config.drive.impersonate {
        println!("  impersonate: {subject}");
    }
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

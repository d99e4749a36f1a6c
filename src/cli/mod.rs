//! CLI interface using clap.
//!
//! The two passes are subcommands; `init` and `paths` cover setup and
//! inspection.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// share-sweep - inventory files shared with your Google account and
/// bulk-revoke your own editor access via a spreadsheet.
#[derive(Parser, Debug)]
#[command(name = "share-sweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inventory files shared with you into the spreadsheet.
    ///
    /// Overwrites all data rows; mark rows for removal by typing anything
    /// into the RemoveMe column afterwards.
    Scan,

    /// Revoke your editor permission on every marked row.
    ///
    /// Acts on rows whose RemoveMe cell is filled in and whose MeEdit cell
    /// is TRUE, then writes a completion marker back into the sheet.
    Revoke,

    /// Create the default config file and write the header row to the sheet.
    Init,

    /// Show the config file location and the configured spreadsheet.
    Paths,
}

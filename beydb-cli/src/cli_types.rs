//! CLI type definitions: argument structs for both binaries.

use std::path::PathBuf;

use clap::{Args, Parser};

/// Flags shared by both front ends.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Path to the SQLite database (overrides BEYDB_DATABASE and settings.toml)
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Save the database path in use to settings.toml for later sessions
    #[arg(long)]
    pub remember_db: bool,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long)]
    pub logfile: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(name = "beydb-admin")]
#[command(about = "Manage the Beyblade database as an administrator", long_about = None)]
pub struct AdminCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Register the first administrator account before logging in
    #[arg(long)]
    pub bootstrap_admin: bool,
}

#[derive(Parser, Debug)]
#[command(name = "beydb-client")]
#[command(about = "Browse the Beyblade database and manage your collection", long_about = None)]
pub struct ClientCli {
    #[command(flatten)]
    pub global: GlobalArgs,
}

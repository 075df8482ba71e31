use std::process::ExitCode;

use beydb_cli::ClientCli;
use beydb_core::Role;
use clap::Parser;

fn main() -> ExitCode {
    let cli = ClientCli::parse();
    beydb_cli::run(Role::Client, &cli.global, false)
}

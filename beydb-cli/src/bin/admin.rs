use std::process::ExitCode;

use beydb_cli::AdminCli;
use beydb_core::Role;
use clap::Parser;

fn main() -> ExitCode {
    let cli = AdminCli::parse();
    beydb_cli::run(Role::Admin, &cli.global, cli.bootstrap_admin)
}

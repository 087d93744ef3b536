//! Entry point of the `ccgen` command-line tool.

use std::{io, process::ExitCode};

use ccgen_cli::{Cli, CliError};
use clap::Parser as _;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("ccgen {}", ccgen_cli::version::build_version());

    match ccgen_cli::run(cli.command, &mut io::stdout().lock()) {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(CliError::EXIT_CODE)
        }
    }
}

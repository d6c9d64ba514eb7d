//! progressionctl - generate XP curve and fishing progression tables

use clap::Parser;
use progression_common::ProgressionError;
use progressionctl::cli::Cli;
use progressionctl::{commands, logging};
use std::io::{self, Write};
use std::process;

/// Exit code for failures that are not table errors
const EXIT_GENERAL_ERROR: i32 = 1;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = execute(&cli) {
        eprintln!("Error: {:#}", err);
        let code = err
            .downcast_ref::<ProgressionError>()
            .map(ProgressionError::exit_code)
            .unwrap_or(EXIT_GENERAL_ERROR);
        process::exit(code);
    }
}

fn execute(cli: &Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(cli, &mut out)?;
    out.flush()?;
    Ok(())
}

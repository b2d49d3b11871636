//! Entry point for the `randcycle` binary.
//!
//! Parses the CLI, reads the input (file or stdin), dispatches to the
//! command modules, and maps [`CliError`] values to their stable exit
//! codes: 0 = success, 1 = no qualifying cycle, 2 = input failure.
use clap::Parser;

mod cli;
mod cmd;
mod error;
mod format;
mod io;

use cli::{Cli, Command};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Dispatches the parsed CLI to the matching command module.
fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Sample {
            file,
            start,
            min_len,
            max_len,
            attempts,
            seed,
        } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::sample::run(
                &content,
                start,
                *min_len,
                *max_len,
                *attempts,
                *seed,
                &cli.format,
            )
        }
        Command::Inspect { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::inspect::run(&content, &cli.format)
        }
        Command::Version => {
            println!("{}", randcycle_core::version());
            Ok(())
        }
    }
}

mod cli;

use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let args = cli::pdb2seq::Args::parse();

    // Diagnostics go to stderr so they never mix with sequence output
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();

    match cli::pdb2seq::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

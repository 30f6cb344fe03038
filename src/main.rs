use std::process::ExitCode;

use bar_graph::cli::{self, Cli, logging};
use clap::Parser;

fn main() -> ExitCode {
    let args = Cli::parse();
    let subscriber = logging::subscriber(args.verbose);

    match tracing::subscriber::with_default(subscriber, || cli::run(&args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

use std::process::ExitCode;

use colornote::cli::{self, Invocation};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("COLORNOTE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = match cli::parse_args(std::env::args_os()) {
        Ok(Invocation::Help(text)) => {
            println!("{text}");
            return ExitCode::SUCCESS;
        }
        Ok(Invocation::Version(text)) => {
            println!("{text}");
            return ExitCode::SUCCESS;
        }
        Ok(Invocation::Run(config)) => config,
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match cli::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "conversion failed");
            eprintln!("ERROR:  {err}");
            ExitCode::FAILURE
        }
    }
}

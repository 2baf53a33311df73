use std::{io, process::ExitCode};

use clap::Parser;
use token_scripts::{
    cli::Cli, commands::exit_status, constants::DEFAULT_LOG_FILTER, utils::check_env_file,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let env_file = dotenvy::dotenv();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = check_env_file(env_file) {
        warn!("{e}");
    }

    let res = cli.run(&mut io::stdout()).await;
    ExitCode::from(exit_status(&res))
}

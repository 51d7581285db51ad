//! Bikeshare CLI
//!
//! Parses options, resolves the config, then hands stdin/stdout to the
//! interactive session.

use anyhow::Context;
use clap::Parser;
use std::io;

use bikeshare::cli::{Args, Session, EXIT_CONFIG_ERROR, EXIT_FAILURE, EXIT_SUCCESS};
use bikeshare::config::Config;
use bikeshare::logging::init_logging;

fn main() {
    let args = Args::parse();
    init_logging();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    match run_session(&config, &args) {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config =
        Config::resolve(args.config.as_deref()).context("failed to load configuration")?;
    args.apply_overrides(&mut config);
    tracing::debug!(data_dir = %config.data_dir.display(), cities = config.cities.len(), "configuration ready");
    Ok(config)
}

fn run_session(config: &Config, args: &Args) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, stdin.lock(), stdout.lock(), args.output_format());
    let completed = session.run().context("session aborted")?;
    tracing::info!(completed, "session finished");
    Ok(())
}

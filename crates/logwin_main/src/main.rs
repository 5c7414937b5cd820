use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use logwin_config::ConfigReader;
use logwin_main::{App, Cli, UiError, init_tracing};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => match error.downcast_ref::<UiError>() {
            Some(warning) => {
                eprintln!("{} {warning}", "warning:".yellow().bold());
                ExitCode::from(2)
            }
            None => {
                eprintln!("{} {error:#}", "error:".red().bold());
                ExitCode::FAILURE
            }
        },
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut reader = ConfigReader::new();
    if let Some(path) = &cli.config {
        reader = reader.file(path);
    }
    let config = reader.read().context("Invalid configuration")?;

    App::new(config).run(cli.command).await
}

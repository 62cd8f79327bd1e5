//! clinic - front-end core CLI
//!
//! # Examples
//!
//! ```bash
//! # Sign in; the credential lands in .clinic/storage.json
//! clinic login --username doc1 --password secret
//!
//! # Would the doctor-only pages render?
//! clinic gate doctor --pretty
//!
//! # Type "g", "gr", "gre" into the doctor picker
//! clinic search doctor g gr gre
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use clinic_cli::{App, CliResult, logger};
use clinic_config::Config;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let app = App::from_config(&config, cli.server.as_deref())?;

    let value = match cli.command {
        Commands::Login { username, password } => app.login(&username, &password).await?,
        Commands::Logout => app.logout(),
        Commands::Whoami => app.whoami().await,
        Commands::Gate { target } => app.gate(target).await,
        Commands::Search {
            directory,
            keystrokes,
        } => app.search(directory, &keystrokes).await?,
    };

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{output}");

    Ok(())
}

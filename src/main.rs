//! ecloudctl - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use ecloudctl::{
    log_completion, run_resource_task_command, run_task_command, Cli, Command, CommandOutcome,
    EcloudClient, Result, Settings, SettingsStore,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting ecloudctl v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli).await {
        Ok(outcome) => {
            log_completion(&outcome);
            if outcome.has_failures() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<CommandOutcome> {
    cli.command.parse_status()?;

    let file = SettingsStore::new().load()?;
    let settings = Settings::resolve(cli, &file)?;
    debug!("Resolved wait policy: {:?}", settings.wait);

    let client = EcloudClient::new(settings.api_key.clone(), settings.api_uri.clone());

    if let Command::Task { action } = &cli.command {
        return run_task_command(&client, cli, &settings, action).await;
    }

    match cli.command.resource() {
        Some((kind, action)) => {
            run_resource_task_command(&client, cli, &settings, kind, action).await
        }
        None => Ok(CommandOutcome::success()),
    }
}

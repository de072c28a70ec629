use clap::Parser;
use dotenvy::dotenv;
use school_records::{
    cli::{self, Cli},
    config,
    errors::Result,
};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // 1. Initialize tracing (as early as possible). Stdout is reserved for command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file, non-fatal since env vars can be set externally
    dotenv().ok();
    debug!("Attempted to load .env file.");

    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    // 3. Load the main application configuration
    let app_config = config::load_app_configuration(cli.config.as_deref())?;
    info!("Successfully processed application configuration.");

    // 4. Open the record store (data directory may be overridden on the command line)
    let store = config::storage::open_store(&app_config, cli.data_dir.as_deref());

    // 5. Dispatch
    cli::run_command(cli.command, &store, &app_config.academic_year)
}

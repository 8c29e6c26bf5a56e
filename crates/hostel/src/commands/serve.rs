//! `hostel serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use hostel_config::{CliSettings, Config};
use hostel_server::{ServerConfig, run_server};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover hostel.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Path to the SQLite database (overrides config).
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Default content language (overrides config).
    #[arg(short = 'l', long)]
    default_language: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            database: self.database,
            default_language: self.default_language,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        // Print startup info
        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Database: {}",
            config.database_resolved.path.display()
        ));
        output.info(&format!(
            "Default language: {}",
            config.content.default_language
        ));

        // Build server config and run
        let server_config = ServerConfig {
            host: config.server.host.clone(),
            port: config.server.port,
            database_path: config.database_resolved.path.clone(),
            default_language: config.content.default_language.clone(),
        };
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}

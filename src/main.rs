use clap::Parser;
use std::env;
use tokio::io;

use packsync::error::SyncError;
use packsync::sync::run_web;
use packsync::utils::inputs::get_input;
use packsync::utils::logger::{LogLevel, Logger};

#[derive(Parser)]
#[command(name = "packsync")]
#[command(version)]
#[command(about = "Pushes a pack project's web artifacts to the pack backend")]
struct Cli {
    /// Top-level action. Falls back to the `action` pipeline input.
    action: Option<String>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let cwd = env::current_dir()
        .map_err(|e| io::Error::other(format!("Failed to get current dir: {}", e)))?;

    let action = cli
        .action
        .or_else(|| get_input("action"))
        .ok_or_else(|| SyncError::MissingInput("action".to_string()));

    let result = match action {
        Ok(action) => match action.as_str() {
            // The build flow is handled by a separate tool; only the web
            // sync lives here.
            "web" => run_web(&cwd).await,
            other => Err(SyncError::UnknownAction(other.to_string())),
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        let logger = Logger::new();
        match &e {
            SyncError::Api { path, body, .. } => {
                let endpoint = format!("endpoint: {}", path);
                let response = format!("response: {}", body);
                logger.log_message_with_trace(
                    LogLevel::Error,
                    "Request to the pack backend failed",
                    vec![endpoint.as_str(), response.as_str()],
                );
            }
            other => {
                logger.log_message(LogLevel::Error, &other.to_string());
            }
        }
        return Err(io::Error::other(e.to_string()));
    }

    Ok(())
}

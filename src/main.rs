//! tracker-gateway - REST facade for step-progress tracking

#![allow(missing_docs)]

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracker_gateway::{Config, server, utils::logging};

/// Command line options; flags override the config file and environment
#[derive(Debug, Parser)]
#[command(name = "tracker-gateway", version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "GATEWAY_CONFIG", default_value = "config/gateway.yaml")]
    config: PathBuf,

    /// Bind address
    #[arg(long)]
    host: Option<String>,

    /// Listen port
    #[arg(short, long)]
    port: Option<u16>,
}

async fn load_config(cli: &Cli) -> tracker_gateway::Result<Config> {
    let mut config = Config::load(&cli.config).await?;
    if let Some(host) = &cli.host {
        config.gateway.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.gateway.server.port = port;
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Missing .env is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let result = async {
        let config = load_config(&cli).await?;
        logging::init_logging(config.logging())?;
        server::run_server(config).await
    }
    .await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

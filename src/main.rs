//! Tour of Heroes API entry point.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tour_of_heroes::infrastructure::logging::LoggerImpl;
use tour_of_heroes::infrastructure::setup::build_server;
use tour_of_heroes::{Config, ConfigLoader};

#[derive(Parser, Debug)]
#[command(name = "tour-of-heroes", version, about = "Hero CRUD API")]
struct Cli {
    /// Configuration file (defaults to ./config.yaml and ./local.yaml)
    #[arg(long, global = true, env = "HEROES_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server until Ctrl-C
    Serve {
        /// Override the bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the bind port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the effective configuration as YAML
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            ConfigLoader::validate(&config)?;
            serve(config).await
        }
        Commands::Config => {
            print!("{}", serde_yaml::to_string(&config)?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

async fn serve(config: Config) -> Result<()> {
    let _logger = LoggerImpl::init(&config.logging)?;

    let server = build_server(&config).await?;
    server
        .serve_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
            }
            tracing::info!("Shutdown signal received");
        })
        .await
        .map_err(|e| anyhow::anyhow!(e))
        .context("HTTP server failed")
}

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
mod config;
mod logging;
mod signals;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fake_migration::FakeMigrationModule;
use tokio::net::TcpListener;

use crate::config::{AppConfig, CliOverrides};

/// Fake user-migration server: synthetic profiles driven by email tags
#[derive(Parser)]
#[command(name = "fake-migration-server")]
#[command(version, about)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for the HTTP server (overrides config and env)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(CliOverrides {
        port: cli.port,
        verbose: cli.verbose,
    });

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    logging::init_logging(&config.logging)?;

    let module = FakeMigrationModule::new(&config.generator, config.auth);
    let app = module.router();

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Fake migration server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = signals::wait_for_shutdown().await {
                tracing::error!(error = %e, "Shutdown signal handling failed");
            }
        })
        .await
        .context("server error")?;

    tracing::info!("Fake migration server stopped");
    Ok(())
}

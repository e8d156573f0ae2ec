use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use api_gateway::ApiGateway;
use calc_bootstrap::{AppConfig, CliOverrides};
use calculator::{Calculator, Service};
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

/// Calculator Server - arithmetic operations over a REST API
#[derive(Parser)]
#[command(name = "calculator-server")]
#[command(about = "Calculator Server - arithmetic operations over a REST API")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
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
    /// Print the API schema as JSON and exit
    Openapi,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (CALCULATOR__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(CliOverrides {
        port: cli.port,
        verbose: cli.verbose,
    });

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    calc_bootstrap::init_logging(&config.logging)?;

    // Dispatch subcommands (default: run)
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(&config).await,
        Commands::Check => check_config(&config),
        Commands::Openapi => print_openapi(&config),
    }
}

fn build_gateway(config: &AppConfig) -> ApiGateway {
    let mut gateway = ApiGateway::new(config.api_gateway.clone());
    gateway.register_module(Arc::new(Calculator::new(Arc::new(Service::new()))));
    gateway
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    build_gateway(config).build_router()?;
    println!("Configuration is valid");
    println!("{}", config.to_json()?);
    Ok(())
}

fn print_openapi(config: &AppConfig) -> Result<()> {
    let doc = build_gateway(config).build_openapi();
    println!("{}", doc.to_pretty_json()?);
    Ok(())
}

async fn run_server(config: &AppConfig) -> Result<()> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Calculator Server starting"
    );

    let gateway = build_gateway(config);
    let listener = ApiGateway::bind(&config.server.bind_addr()).await?;

    let cancel = CancellationToken::new();
    let signals = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if let Err(e) = calc_bootstrap::wait_for_shutdown().await {
                tracing::error!(error = %e, "Signal handling failed; shutting down");
            }
            cancel.cancel();
        }
    });

    let result = gateway.serve(listener, cancel).await;
    signals.abort();

    tracing::info!("Calculator Server stopped");
    result
}

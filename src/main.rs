//! OpenMesh AASA server entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use openmesh_aasa::aasa::build_document;
use openmesh_aasa::api::create_router;
use openmesh_aasa::config::{AasaConfig, Config};
use openmesh_aasa::utils::shutdown_signal;
use openmesh_aasa::Result;

/// OpenMesh AASA server.
#[derive(Parser, Debug)]
#[command(name = "openmesh-aasa")]
#[command(about = "Serves the Apple App Site Association file for OpenMesh Universal Links")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port.
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the AASA server (default).
    Run {
        /// HTTP server port.
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the AASA document that would be served, then exit.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("openmesh_aasa=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config()?,
        Some(Command::Run { port }) => cmd_run(port).await?,
        None => cmd_run(args.port).await?,
    }

    Ok(())
}

/// Print the effective configuration and document, then exit.
fn cmd_check_config() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = AasaConfig::from_env().unwrap_or_default();
    let document = build_document(&config);

    println!("appID: {}", document.applinks.details[0].app_id);
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

/// Run the HTTP server until ctrl-c or SIGTERM.
async fn cmd_run(port_override: Option<u16>) -> Result<()> {
    // Load configuration
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.port = port;
    }

    // Log the AASA settings that will be served. These are re-read from the
    // environment on every request, so this is informational only.
    let aasa_config = AasaConfig::from_env().unwrap_or_default();
    info!("Team ID: {}", aasa_config.ios_team_id.trim());
    info!("Bundle ID: {}", aasa_config.ios_bundle_id.trim());
    info!("UL paths: {}", aasa_config.ul_paths);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("AASA server listening on {}", addr);
    info!("  - GET http://{}/.well-known/apple-app-site-association", addr);
    info!("  - GET http://{}/apple-app-site-association", addr);
    info!("  - GET http://{}/api/health", addr);

    let router = create_router();

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

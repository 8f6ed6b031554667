//! `salesightd` — the sales analytics server binary.
//!
//! Usage:
//!   salesightd [--data <ledger.csv>] [--listen <addr>]
//!
//! The CSV ledger is loaded once at startup; the server then answers
//! read-only aggregation queries over it until shutdown.

mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use sales::SalesModule;
use sales::service::SalesService;
use salesight_core::Module;
use salesight_dataset::SalesTable;
use tracing::info;

/// Sales analytics server.
#[derive(Parser, Debug)]
#[command(name = "salesightd", about = "Sales analytics server")]
struct Cli {
    /// Path to the CSV sales ledger loaded at startup.
    #[arg(long = "data", default_value = "data.csv")]
    data: PathBuf,

    /// Listen address.
    #[arg(long = "listen", default_value = "0.0.0.0:8080")]
    listen: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load the ledger. The table is immutable for the process lifetime;
    // there is no reload path.
    info!("Loading sales ledger from {}", cli.data.display());
    let table = Arc::new(
        SalesTable::load_csv(&cli.data)
            .map_err(|e| anyhow::anyhow!("failed to load sales ledger: {}", e))?,
    );
    info!("Loaded {} sale records", table.len());

    let sales_module = SalesModule::new(SalesService::new(table));
    info!("Sales module initialized");

    let module_routes = vec![(sales_module.name(), sales_module.routes())];
    let app = routes::build_router(module_routes);

    // Start server.
    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    info!("salesightd listening on {}", cli.listen);
    axum::serve(listener, app).await?;

    Ok(())
}

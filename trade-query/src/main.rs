use anyhow::Context;
use trade_query::{ServerConfig, ServiceConfig, TradeQueryService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        r#"Trade Query Service - read-only REST API over an in-memory trade store

USAGE:
    trade-query [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    HOST                Server host (default: 0.0.0.0)
    PORT                Server port (default: 8000)
    RUST_LOG            Log level filter

EXAMPLES:
    # Run with the built-in sample trades
    trade-query

    # Run with config file
    trade-query --config trades.json

    # Run with custom port
    PORT=9000 trade-query
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trade_query=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = if let Some(path) = config_path {
        tracing::info!("Loading configuration from: {}", path);
        let config = ServiceConfig::from_file(&path)
            .with_context(|| format!("loading configuration from {}", path))?;
        tracing::info!("Service: {}", config.name);
        tracing::info!("Sample data: {}", config.sample_data);
        tracing::info!("Seed trades: {}", config.trades.len());
        config
    } else {
        tracing::info!("Using default configuration");
        ServiceConfig {
            server: ServerConfig::from_env(),
            ..Default::default()
        }
    };

    let service = TradeQueryService::from_config(&config);

    if service.trade_repo.is_empty() {
        tracing::warn!("Trade store is empty; every query will return no results");
    } else {
        tracing::info!("Trades loaded: {}", service.trade_repo.len());
    }
    tracing::info!("REST API: http://{}/trades", service.server.addr());
    tracing::info!("Available endpoints:");
    tracing::info!("  GET  /trades?skip=0&limit=10");
    tracing::info!("  GET  /trades/{{tradeId}}");
    tracing::info!("  GET  /trades/search?search=&counterparty=&instrumentId=&instrumentName=&trader=");
    tracing::info!("  GET  /trades/filter?assetClass=&start=&end=&minPrice=&maxPrice=&tradeType=");
    tracing::info!("  GET  /health");

    service.run().await
}

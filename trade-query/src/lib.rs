//! Trade Query Service
//!
//! A read-only REST service over an in-memory store of executed trades.
//!
//! # Architecture
//!
//! - **Domain**: `Trade`, `TradeDetails` and the composable query predicates
//! - **Application**: the `TradeRepository` port and the list/get/search/filter use cases
//! - **Infrastructure**: `InMemoryTradeRepository`, sample data and JSON configuration
//! - **Presentation**: axum REST API
//!
//! # Endpoints
//!
//! - `GET /trades?skip=&limit=`
//! - `GET /trades/{tradeId}`
//! - `GET /trades/search?search=&counterparty=&instrumentId=&instrumentName=&trader=`
//! - `GET /trades/filter?assetClass=&start=&end=&minPrice=&maxPrice=&tradeType=`
//! - `GET /health`
//!
//! # Example
//!
//! ```ignore
//! use trade_query::{TradeQueryService, ServiceConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     TradeQueryService::from_config(&ServiceConfig::default()).run().await
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::{
    FilterCriteria, Price, SearchCriteria, Timestamp, Trade, TradeDetails, TradePredicate,
};

pub use infrastructure::{ConfigError, InMemoryTradeRepository, ServerConfig, ServiceConfig};

pub use application::{
    FilterTradesUseCase, GetTradeUseCase, ListTradesQuery, ListTradesUseCase, SearchTradesUseCase,
    TradeQueryError, TradeRepository,
};

pub use presentation::{ApiError, AppState, create_router};

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// The query server: a trade store plus the address it is served on
pub struct TradeQueryService {
    pub server: ServerConfig,
    pub trade_repo: Arc<InMemoryTradeRepository>,
}

impl TradeQueryService {
    pub fn new(server: ServerConfig, trade_repo: InMemoryTradeRepository) -> Self {
        TradeQueryService {
            server,
            trade_repo: Arc::new(trade_repo),
        }
    }

    /// Build the store and bind settings from a configuration
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(config.server.clone(), config.build_repository())
    }

    /// Create the REST API router
    pub fn router(&self) -> Router {
        let state = Arc::new(AppState::new(Arc::clone(&self.trade_repo)));
        create_router(state)
    }

    /// Run the server until the listener fails
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self.server.addr();
        let router = self.router();

        tracing::info!("Trade query service listening on {}", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

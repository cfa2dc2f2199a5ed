use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::application::TradeRepository;

/// Application state shared across handlers
pub struct AppState<R: TradeRepository> {
    pub trade_repo: Arc<R>,
}

impl<R: TradeRepository> AppState<R> {
    pub fn new(trade_repo: Arc<R>) -> Self {
        AppState { trade_repo }
    }
}

/// Create the REST API router
pub fn create_router<R: TradeRepository + 'static>(state: Arc<AppState<R>>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::<R>))
        // Static segments win over the `{trade_id}` capture
        .route("/trades", get(handlers::list_trades::<R>))
        .route("/trades/search", get(handlers::search_trades::<R>))
        .route("/trades/filter", get(handlers::filter_trades::<R>))
        .route("/trades/{trade_id}", get(handlers::get_trade::<R>))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

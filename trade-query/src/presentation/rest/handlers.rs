use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use std::sync::Arc;

use crate::application::{
    FilterTradesUseCase, GetTradeUseCase, ListTradesUseCase, SearchTradesUseCase,
    TradeRepository,
};
use crate::domain::Trade;
use crate::presentation::rest::{ApiError, dto::*};

use super::AppState;

/// GET /health
pub async fn health<R: TradeRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        trades: state.trade_repo.count().await?,
    }))
}

/// GET /trades
pub async fn list_trades<R: TradeRepository>(
    State(state): State<Arc<AppState<R>>>,
    query: Result<Query<ListTradesParams>, QueryRejection>,
) -> Result<Json<Vec<Trade>>, ApiError> {
    let Query(params) = query?;

    let use_case = ListTradesUseCase::new(Arc::clone(&state.trade_repo));
    Ok(Json(use_case.execute(params.into()).await?))
}

/// GET /trades/{trade_id}
pub async fn get_trade<R: TradeRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(trade_id): Path<String>,
) -> Result<Json<Trade>, ApiError> {
    let use_case = GetTradeUseCase::new(Arc::clone(&state.trade_repo));
    let trade = use_case.execute(&trade_id).await?;
    Ok(Json(trade))
}

/// GET /trades/search
pub async fn search_trades<R: TradeRepository>(
    State(state): State<Arc<AppState<R>>>,
    query: Result<Query<SearchTradesParams>, QueryRejection>,
) -> Result<Json<Vec<Trade>>, ApiError> {
    let Query(params) = query?;

    let use_case = SearchTradesUseCase::new(Arc::clone(&state.trade_repo));
    Ok(Json(use_case.execute(params.into()).await?))
}

/// GET /trades/filter
pub async fn filter_trades<R: TradeRepository>(
    State(state): State<Arc<AppState<R>>>,
    query: Result<Query<FilterTradesParams>, QueryRejection>,
) -> Result<Json<Vec<Trade>>, ApiError> {
    let Query(params) = query?;

    let use_case = FilterTradesUseCase::new(Arc::clone(&state.trade_repo));
    Ok(Json(use_case.execute(params.into()).await?))
}

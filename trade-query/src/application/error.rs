use thiserror::Error;

/// Errors raised by the trade query use cases
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradeQueryError {
    #[error("Trade not found: {trade_id}")]
    NotFound { trade_id: String },

    #[error("Repository failure: {0}")]
    Repository(String),
}

pub type TradeQueryResult<T> = std::result::Result<T, TradeQueryError>;

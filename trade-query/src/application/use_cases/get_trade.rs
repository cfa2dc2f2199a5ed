use crate::application::error::{TradeQueryError, TradeQueryResult};
use crate::application::ports::TradeRepository;
use crate::domain::Trade;
use std::sync::Arc;

/// Lookup of a single trade by `tradeId`
pub struct GetTradeUseCase<R>
where
    R: TradeRepository,
{
    trade_repo: Arc<R>,
}

impl<R> GetTradeUseCase<R>
where
    R: TradeRepository,
{
    pub fn new(trade_repo: Arc<R>) -> Self {
        Self { trade_repo }
    }

    pub async fn execute(&self, trade_id: &str) -> TradeQueryResult<Trade> {
        match self.trade_repo.find_by_id(trade_id).await? {
            Some(trade) => Ok(trade),
            None => {
                tracing::debug!(trade_id, "Trade lookup missed");
                Err(TradeQueryError::NotFound {
                    trade_id: trade_id.to_string(),
                })
            }
        }
    }
}

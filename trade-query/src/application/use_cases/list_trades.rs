use crate::application::error::TradeQueryResult;
use crate::application::ports::TradeRepository;
use crate::domain::Trade;
use std::sync::Arc;

pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListTradesQuery {
    pub skip: usize,
    pub limit: usize,
}

impl Default for ListTradesQuery {
    fn default() -> Self {
        ListTradesQuery {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Offset/limit listing of the store
pub struct ListTradesUseCase<R>
where
    R: TradeRepository,
{
    trade_repo: Arc<R>,
}

impl<R> ListTradesUseCase<R>
where
    R: TradeRepository,
{
    pub fn new(trade_repo: Arc<R>) -> Self {
        Self { trade_repo }
    }

    pub async fn execute(&self, query: ListTradesQuery) -> TradeQueryResult<Vec<Trade>> {
        let trades = self.trade_repo.page(query.skip, query.limit).await?;
        tracing::debug!(
            skip = query.skip,
            limit = query.limit,
            returned = trades.len(),
            "Listed trades"
        );
        Ok(trades)
    }
}

use crate::application::error::TradeQueryResult;
use crate::application::ports::TradeRepository;
use crate::domain::{FilterCriteria, Trade};
use std::sync::Arc;

/// Conjunction of range and equality filters
pub struct FilterTradesUseCase<R>
where
    R: TradeRepository,
{
    trade_repo: Arc<R>,
}

impl<R> FilterTradesUseCase<R>
where
    R: TradeRepository,
{
    pub fn new(trade_repo: Arc<R>) -> Self {
        Self { trade_repo }
    }

    pub async fn execute(&self, criteria: FilterCriteria) -> TradeQueryResult<Vec<Trade>> {
        let predicate = criteria.into_predicate();
        let trades = self.trade_repo.find_matching(&predicate).await?;
        tracing::debug!(
            checks = predicate.len(),
            matched = trades.len(),
            "Filtered trades"
        );
        Ok(trades)
    }
}

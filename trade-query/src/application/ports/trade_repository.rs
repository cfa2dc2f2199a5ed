use crate::application::error::TradeQueryResult;
use crate::domain::{Trade, TradePredicate};
use async_trait::async_trait;

/// Read access to the ordered trade store
#[async_trait]
pub trait TradeRepository: Send + Sync {
    /// Contiguous page of the store in store order
    async fn page(&self, skip: usize, limit: usize) -> TradeQueryResult<Vec<Trade>>;

    /// First trade in store order carrying the given id
    async fn find_by_id(&self, trade_id: &str) -> TradeQueryResult<Option<Trade>>;

    /// Every trade accepted by the predicate, in store order
    async fn find_matching(&self, predicate: &TradePredicate) -> TradeQueryResult<Vec<Trade>>;

    /// Number of stored trades
    async fn count(&self) -> TradeQueryResult<usize>;
}

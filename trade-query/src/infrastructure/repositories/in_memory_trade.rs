use crate::application::error::TradeQueryResult;
use crate::application::ports::TradeRepository;
use crate::domain::{Trade, TradeDetails, TradePredicate};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::sync::Arc;

/// In-memory trade store preserving insertion order
pub struct InMemoryTradeRepository {
    trades: Arc<RwLock<Vec<Trade>>>,
}

impl InMemoryTradeRepository {
    pub fn new() -> Self {
        InMemoryTradeRepository {
            trades: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn from_trades(trades: Vec<Trade>) -> Self {
        InMemoryTradeRepository {
            trades: Arc::new(RwLock::new(trades)),
        }
    }

    /// Create with the built-in sample trades, stamped with the current time
    pub fn with_sample_data() -> Self {
        Self::from_trades(sample_trades())
    }

    /// Append a trade (startup seeding only)
    pub fn add(&self, trade: Trade) {
        self.trades.write().push(trade);
    }

    pub fn extend(&self, trades: impl IntoIterator<Item = Trade>) {
        self.trades.write().extend(trades);
    }

    /// Number of stored trades (sync)
    pub fn len(&self) -> usize {
        self.trades.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.read().is_empty()
    }
}

impl Default for InMemoryTradeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryTradeRepository {
    fn clone(&self) -> Self {
        InMemoryTradeRepository {
            trades: Arc::clone(&self.trades),
        }
    }
}

#[async_trait]
impl TradeRepository for InMemoryTradeRepository {
    async fn page(&self, skip: usize, limit: usize) -> TradeQueryResult<Vec<Trade>> {
        Ok(self
            .trades
            .read()
            .iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, trade_id: &str) -> TradeQueryResult<Option<Trade>> {
        Ok(self
            .trades
            .read()
            .iter()
            .find(|trade| trade.trade_id.as_deref() == Some(trade_id))
            .cloned())
    }

    async fn find_matching(&self, predicate: &TradePredicate) -> TradeQueryResult<Vec<Trade>> {
        Ok(self
            .trades
            .read()
            .iter()
            .filter(|trade| predicate.matches(trade))
            .cloned()
            .collect())
    }

    async fn count(&self) -> TradeQueryResult<usize> {
        Ok(self.trades.read().len())
    }
}

/// The two mock trades the service boots with
pub fn sample_trades() -> Vec<Trade> {
    let now = Utc::now();
    vec![
        Trade::new(
            "AAPL",
            "Apple Inc",
            now,
            TradeDetails::new("BUY", Decimal::new(1505, 1), 100),
            "John",
        )
        .with_asset_class("Equity")
        .with_counterparty("Counterparty 1")
        .with_trade_id("1"),
        Trade::new(
            "TSLA",
            "Tesla Inc",
            now,
            TradeDetails::new("SELL", Decimal::new(80025, 2), 50),
            "Jane",
        )
        .with_asset_class("Bond")
        .with_counterparty("Counterparty 2")
        .with_trade_id("2"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn trade(id: &str) -> Trade {
        Trade::new(
            "ID",
            "Name",
            Utc::now(),
            TradeDetails::new("BUY", dec!(10), 1),
            "Trader",
        )
        .with_trade_id(id)
    }

    #[tokio::test]
    async fn test_page_is_contiguous_slice() {
        let repo =
            InMemoryTradeRepository::from_trades((0..5).map(|i| trade(&i.to_string())).collect());

        let page = repo.page(1, 3).await.unwrap();
        let ids: Vec<_> = page.iter().filter_map(|t| t.trade_id.clone()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);

        assert!(repo.page(10, 3).await.unwrap().is_empty());
        assert!(repo.page(0, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id_skips_trades_without_id() {
        let repo = InMemoryTradeRepository::new();
        let mut anonymous = trade("x");
        anonymous.trade_id = None;
        repo.add(anonymous);
        repo.add(trade("9"));

        assert!(repo.find_by_id("9").await.unwrap().is_some());
        assert!(repo.find_by_id("x").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clone_shares_storage() {
        let repo = InMemoryTradeRepository::new();
        assert!(repo.is_empty());

        let handle = repo.clone();
        handle.extend(vec![trade("1"), trade("2")]);

        assert!(!repo.is_empty());
        assert_eq!(repo.count().await.unwrap(), 2);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_sample_data() {
        let repo = InMemoryTradeRepository::with_sample_data();
        assert_eq!(repo.len(), 2);

        let trades = sample_trades();
        assert_eq!(trades[0].price(), dec!(150.5));
        assert_eq!(trades[1].price(), dec!(800.25));
        assert_eq!(trades[1].buy_sell_indicator(), "SELL");
    }
}

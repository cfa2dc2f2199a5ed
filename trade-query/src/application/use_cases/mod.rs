mod filter_trades;
mod get_trade;
mod list_trades;
mod search_trades;

pub use filter_trades::FilterTradesUseCase;
pub use get_trade::GetTradeUseCase;
pub use list_trades::{DEFAULT_LIMIT, ListTradesQuery, ListTradesUseCase};
pub use search_trades::SearchTradesUseCase;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::application::error::{TradeQueryError, TradeQueryResult};
    use crate::application::ports::TradeRepository;
    use crate::domain::{Trade, TradeDetails, TradePredicate};
    use crate::infrastructure::InMemoryTradeRepository;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    /// Two-trade store: John buys 150.5, Jane sells 800.25
    pub fn two_trade_repo() -> Arc<InMemoryTradeRepository> {
        Arc::new(InMemoryTradeRepository::from_trades(vec![
            Trade::new(
                "AAPL",
                "Apple Inc",
                Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
                TradeDetails::new("BUY", dec!(150.5), 100),
                "John",
            )
            .with_trade_id("1")
            .with_asset_class("Equity")
            .with_counterparty("Counterparty 1"),
            Trade::new(
                "TSLA",
                "Tesla Inc",
                Utc.with_ymd_and_hms(2024, 3, 2, 14, 0, 0).unwrap(),
                TradeDetails::new("SELL", dec!(800.25), 50),
                "Jane",
            )
            .with_trade_id("2")
            .with_asset_class("Bond")
            .with_counterparty("Counterparty 2"),
        ]))
    }

    pub fn ids(trades: &[Trade]) -> Vec<&str> {
        trades
            .iter()
            .filter_map(|t| t.trade_id.as_deref())
            .collect()
    }

    /// Store whose every read fails
    pub struct UnavailableRepo;

    fn unavailable<T>() -> TradeQueryResult<T> {
        Err(TradeQueryError::Repository("store offline".to_string()))
    }

    #[async_trait]
    impl TradeRepository for UnavailableRepo {
        async fn page(&self, _skip: usize, _limit: usize) -> TradeQueryResult<Vec<Trade>> {
            unavailable()
        }

        async fn find_by_id(&self, _trade_id: &str) -> TradeQueryResult<Option<Trade>> {
            unavailable()
        }

        async fn find_matching(
            &self,
            _predicate: &TradePredicate,
        ) -> TradeQueryResult<Vec<Trade>> {
            unavailable()
        }

        async fn count(&self) -> TradeQueryResult<usize> {
            unavailable()
        }
    }
}

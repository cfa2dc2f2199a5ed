use crate::domain::value_objects::{Price, Timestamp};
use serde::{Deserialize, Serialize};

/// Execution details embedded in every trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeDetails {
    /// "BUY" for buys, "SELL" for sells (not enforced)
    pub buy_sell_indicator: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Price,
    pub quantity: i64,
}

impl TradeDetails {
    pub fn new(buy_sell_indicator: impl Into<String>, price: Price, quantity: i64) -> Self {
        TradeDetails {
            buy_sell_indicator: buy_sell_indicator.into(),
            price,
            quantity,
        }
    }
}

/// A single executed trade as held by the record store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    #[serde(default)]
    pub asset_class: Option<String>,
    #[serde(default)]
    pub counterparty: Option<String>,
    /// ISIN or other instrument identifier
    pub instrument_id: String,
    pub instrument_name: String,
    pub trade_date_time: Timestamp,
    pub trade_details: TradeDetails,
    /// Expected unique across the store, but nothing enforces it
    #[serde(default)]
    pub trade_id: Option<String>,
    pub trader: String,
}

impl Trade {
    pub fn new(
        instrument_id: impl Into<String>,
        instrument_name: impl Into<String>,
        trade_date_time: Timestamp,
        trade_details: TradeDetails,
        trader: impl Into<String>,
    ) -> Self {
        Trade {
            asset_class: None,
            counterparty: None,
            instrument_id: instrument_id.into(),
            instrument_name: instrument_name.into(),
            trade_date_time,
            trade_details,
            trade_id: None,
            trader: trader.into(),
        }
    }

    pub fn with_trade_id(mut self, trade_id: impl Into<String>) -> Self {
        self.trade_id = Some(trade_id.into());
        self
    }

    pub fn with_asset_class(mut self, asset_class: impl Into<String>) -> Self {
        self.asset_class = Some(asset_class.into());
        self
    }

    pub fn with_counterparty(mut self, counterparty: impl Into<String>) -> Self {
        self.counterparty = Some(counterparty.into());
        self
    }

    pub fn price(&self) -> Price {
        self.trade_details.price
    }

    pub fn buy_sell_indicator(&self) -> &str {
        &self.trade_details.buy_sell_indicator
    }

    /// Text fields that take part in free-text search, in schema order.
    /// Numeric and timestamp fields are deliberately absent.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.trade_id.as_deref(),
            self.asset_class.as_deref(),
            self.counterparty.as_deref(),
            Some(self.instrument_id.as_str()),
            Some(self.instrument_name.as_str()),
            Some(self.trader.as_str()),
            Some(self.trade_details.buy_sell_indicator.as_str()),
        ]
        .into_iter()
        .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn sample() -> Trade {
        Trade::new(
            "AAPL",
            "Apple Inc",
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
            TradeDetails::new("BUY", dec!(150.5), 100),
            "John",
        )
        .with_trade_id("1")
        .with_asset_class("Equity")
    }

    #[test]
    fn test_serializes_with_external_field_names() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(
            value,
            json!({
                "assetClass": "Equity",
                "counterparty": null,
                "instrumentId": "AAPL",
                "instrumentName": "Apple Inc",
                "tradeDateTime": "2024-03-01T09:30:00Z",
                "tradeDetails": {
                    "buySellIndicator": "BUY",
                    "price": 150.5,
                    "quantity": 100
                },
                "tradeId": "1",
                "trader": "John"
            })
        );
    }

    #[test]
    fn test_deserializes_without_optional_fields() {
        let trade: Trade = serde_json::from_value(json!({
            "instrumentId": "TSLA",
            "instrumentName": "Tesla Inc",
            "tradeDateTime": "2024-03-01T10:00:00Z",
            "tradeDetails": { "buySellIndicator": "SELL", "price": 800.25, "quantity": 50 },
            "trader": "Jane"
        }))
        .unwrap();

        assert_eq!(trade.trade_id, None);
        assert_eq!(trade.counterparty, None);
        assert_eq!(trade.price(), dec!(800.25));
        assert_eq!(trade.buy_sell_indicator(), "SELL");
    }

    #[test]
    fn test_searchable_fields_skip_absent_values() {
        let trade = sample();
        let fields: Vec<&str> = trade.searchable_fields().collect();
        assert_eq!(fields, vec!["1", "Equity", "AAPL", "Apple Inc", "John", "BUY"]);
    }
}

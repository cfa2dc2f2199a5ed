//! Composable record predicates
//!
//! Every optional query criterion becomes one closure over [`Trade`]. A
//! [`TradePredicate`] holds the closures for the criteria that were supplied
//! and matches a trade only when all of them hold, so an empty predicate
//! matches everything.

use crate::domain::entities::Trade;
use crate::domain::value_objects::{Price, Timestamp};

type Check = Box<dyn Fn(&Trade) -> bool + Send + Sync>;

/// Conjunction of trade checks
#[derive(Default)]
pub struct TradePredicate {
    checks: Vec<Check>,
}

impl TradePredicate {
    /// Predicate that accepts every trade
    pub fn all() -> Self {
        Self::default()
    }

    /// Add a check that must hold
    pub fn and(mut self, check: impl Fn(&Trade) -> bool + Send + Sync + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Add a check only when the criterion value is present
    pub fn and_some<T>(
        self,
        value: Option<T>,
        check: impl Fn(&T, &Trade) -> bool + Send + Sync + 'static,
    ) -> Self
    where
        T: Send + Sync + 'static,
    {
        match value {
            Some(value) => self.and(move |trade| check(&value, trade)),
            None => self,
        }
    }

    pub fn matches(&self, trade: &Trade) -> bool {
        self.checks.iter().all(|check| check(trade))
    }

    /// Number of active checks
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl std::fmt::Debug for TradePredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TradePredicate")
            .field("checks", &self.checks.len())
            .finish()
    }
}

/// Free-text search plus exact-match criteria
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    /// Case-insensitive substring looked up in the searchable text fields
    pub search: Option<String>,
    pub counterparty: Option<String>,
    pub instrument_id: Option<String>,
    pub instrument_name: Option<String>,
    pub trader: Option<String>,
}

impl SearchCriteria {
    pub fn into_predicate(self) -> TradePredicate {
        TradePredicate::all()
            .and_some(self.search.map(|s| s.to_lowercase()), |needle, trade| {
                trade
                    .searchable_fields()
                    .any(|field| field.to_lowercase().contains(needle.as_str()))
            })
            .and_some(self.counterparty, |expected, trade| {
                trade.counterparty.as_deref() == Some(expected.as_str())
            })
            .and_some(self.instrument_id, |expected, trade| {
                trade.instrument_id == *expected
            })
            .and_some(self.instrument_name, |expected, trade| {
                trade.instrument_name == *expected
            })
            .and_some(self.trader, |expected, trade| trade.trader == *expected)
    }
}

/// Range and equality criteria over typed fields. Ranges are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub asset_class: Option<String>,
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
    pub min_price: Option<Price>,
    pub max_price: Option<Price>,
    /// Compared against `tradeDetails.buySellIndicator`
    pub trade_type: Option<String>,
}

impl FilterCriteria {
    pub fn into_predicate(self) -> TradePredicate {
        TradePredicate::all()
            .and_some(self.asset_class, |expected, trade| {
                trade.asset_class.as_deref() == Some(expected.as_str())
            })
            .and_some(self.start, |start, trade| trade.trade_date_time >= *start)
            .and_some(self.end, |end, trade| trade.trade_date_time <= *end)
            .and_some(self.min_price, |min, trade| trade.price() >= *min)
            .and_some(self.max_price, |max, trade| trade.price() <= *max)
            .and_some(self.trade_type, |expected, trade| {
                trade.buy_sell_indicator() == expected.as_str()
            })
    }
}

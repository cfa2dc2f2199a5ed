pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{Trade, TradeDetails};
pub use services::{FilterCriteria, SearchCriteria, TradePredicate};
pub use value_objects::{Price, Timestamp};

mod trade;

pub use trade::{Trade, TradeDetails};

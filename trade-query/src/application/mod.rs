pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{TradeQueryError, TradeQueryResult};
pub use ports::TradeRepository;
pub use use_cases::{
    FilterTradesUseCase, GetTradeUseCase, ListTradesQuery, ListTradesUseCase, SearchTradesUseCase,
};

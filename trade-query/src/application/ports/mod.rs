mod trade_repository;

pub use trade_repository::TradeRepository;

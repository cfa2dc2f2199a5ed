pub mod config;
pub mod repositories;

pub use config::{ConfigError, ServerConfig, ServiceConfig};
pub use repositories::{InMemoryTradeRepository, sample_trades};

use rust_decimal::Decimal;

pub type Price = Decimal;
pub type Timestamp = chrono::DateTime<chrono::Utc>;

mod predicate;

pub use predicate::{FilterCriteria, SearchCriteria, TradePredicate};

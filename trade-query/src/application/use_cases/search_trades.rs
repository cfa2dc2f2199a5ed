use crate::application::error::TradeQueryResult;
use crate::application::ports::TradeRepository;
use crate::domain::{SearchCriteria, Trade};
use std::sync::Arc;

/// Free-text search narrowed by exact-match criteria
pub struct SearchTradesUseCase<R>
where
    R: TradeRepository,
{
    trade_repo: Arc<R>,
}

impl<R> SearchTradesUseCase<R>
where
    R: TradeRepository,
{
    pub fn new(trade_repo: Arc<R>) -> Self {
        Self { trade_repo }
    }

    pub async fn execute(&self, criteria: SearchCriteria) -> TradeQueryResult<Vec<Trade>> {
        let predicate = criteria.into_predicate();
        let trades = self.trade_repo.find_matching(&predicate).await?;
        tracing::debug!(
            checks = predicate.len(),
            matched = trades.len(),
            "Searched trades"
        );
        Ok(trades)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::fixtures::{ids, two_trade_repo};

    #[tokio::test]
    async fn test_no_criteria_returns_everything() {
        let use_case = SearchTradesUseCase::new(two_trade_repo());
        let trades = use_case.execute(SearchCriteria::default()).await.unwrap();
        assert_eq!(ids(&trades), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_trader_exact_match() {
        let use_case = SearchTradesUseCase::new(two_trade_repo());
        let trades = use_case
            .execute(SearchCriteria {
                trader: Some("John".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(ids(&trades), vec!["1"]);
    }

    #[tokio::test]
    async fn test_free_text_combined_with_exact_match() {
        let use_case = SearchTradesUseCase::new(two_trade_repo());

        let matching = use_case
            .execute(SearchCriteria {
                search: Some("COUNTERPARTY".to_string()),
                instrument_id: Some("TSLA".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(ids(&matching), vec!["2"]);

        let conflicting = use_case
            .execute(SearchCriteria {
                search: Some("tesla".to_string()),
                instrument_name: Some("Apple Inc".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(conflicting.is_empty());
    }
}

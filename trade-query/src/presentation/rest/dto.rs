use crate::application::ListTradesQuery;
use crate::application::use_cases::DEFAULT_LIMIT;
use crate::domain::{FilterCriteria, Price, SearchCriteria, Timestamp};
use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

/// GET /trades query params
#[derive(Debug, Clone, Deserialize)]
pub struct ListTradesParams {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_list_limit")]
    pub limit: usize,
}

fn default_list_limit() -> usize {
    DEFAULT_LIMIT
}

impl From<ListTradesParams> for ListTradesQuery {
    fn from(params: ListTradesParams) -> Self {
        ListTradesQuery {
            skip: params.skip,
            limit: params.limit,
        }
    }
}

/// GET /trades/search query params
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTradesParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub counterparty: Option<String>,
    #[serde(default)]
    pub instrument_id: Option<String>,
    #[serde(default)]
    pub instrument_name: Option<String>,
    #[serde(default)]
    pub trader: Option<String>,
}

impl From<SearchTradesParams> for SearchCriteria {
    fn from(params: SearchTradesParams) -> Self {
        SearchCriteria {
            search: params.search,
            counterparty: params.counterparty,
            instrument_id: params.instrument_id,
            instrument_name: params.instrument_name,
            trader: params.trader,
        }
    }
}

/// GET /trades/filter query params
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterTradesParams {
    #[serde(default)]
    pub asset_class: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub start: Option<Timestamp>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub end: Option<Timestamp>,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub min_price: Option<Price>,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub max_price: Option<Price>,
    #[serde(default)]
    pub trade_type: Option<String>,
}

impl From<FilterTradesParams> for FilterCriteria {
    fn from(params: FilterTradesParams) -> Self {
        FilterCriteria {
            asset_class: params.asset_class,
            start: params.start,
            end: params.end,
            min_price: params.min_price,
            max_price: params.max_price,
            trade_type: params.trade_type,
        }
    }
}

/// Accepts RFC 3339, a naive date-time taken as UTC, or a bare date at
/// midnight UTC.
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

// Empty typed params are treated as absent.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => parse_timestamp(raw.trim())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid date-time: {}", raw))),
        _ => Ok(None),
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<Price>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<Price>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid number: {}", raw))),
        _ => Ok(None),
    }
}

/// GET /health response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub trades: usize,
}

/// Error response body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        ErrorResponse {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();

        assert_eq!(parse_timestamp("2024-03-01T09:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01T11:30:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01T09:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01 09:30:00"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-03-01"),
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_timestamp("yesterday"), None);
    }
}

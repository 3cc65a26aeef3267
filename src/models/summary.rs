use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::SummaryError;

/// Summary of a ticker's trailing-year closing prices. Immutable once
/// produced; the serde names match the report keys consumers expect.
#[derive(Clone, Debug, Getters, Serialize, new)]
pub struct QuoteSummary {
    #[serde(rename = "Ticker")]
    ticker: String,
    #[serde(rename = "Start Date")]
    start_date: String,
    #[serde(rename = "Min Price")]
    min_price: Decimal,
    #[serde(rename = "Max Price")]
    max_price: Decimal,
    #[serde(rename = "Avg Price")]
    avg_price: Decimal,
    #[serde(rename = "Median Price")]
    median_price: Decimal,
}

/// Serializable view of an invocation's outcome: either the summary
/// mapping or a single error message, never both.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SummaryRecord {
    Summary(QuoteSummary),
    Failure { error: String },
}

impl From<Result<QuoteSummary, SummaryError>> for SummaryRecord {
    fn from(result: Result<QuoteSummary, SummaryError>) -> Self {
        match result {
            Ok(summary) => SummaryRecord::Summary(summary),
            Err(e) => SummaryRecord::Failure {
                error: e.to_string(),
            },
        }
    }
}

use reqwest::StatusCode;
use thiserror::Error;

/// Terminal failures of the fetch-parse-summarize pipeline. Unparsable
/// individual rows are skipped during parsing and never surface here.
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Error fetching data: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Request failed: {0}")]
    Status(StatusCode),

    #[error("Malformed response from provider: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No data available for {0}")]
    NoData(String),

    #[error("No closing prices available for {0}")]
    EmptySeries(String),
}

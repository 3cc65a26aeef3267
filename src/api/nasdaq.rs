use std::time::Duration;

use chrono::NaiveDate;
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};

use crate::{
    api::{nasdaq_dto::NasdaqHistoricalDto, utils::make_request},
    error::SummaryError,
};

const BASE_URL: &str = "https://api.nasdaq.com";

// The endpoint rejects requests without a browser-like user agent.
const USER_AGENT_VALUE: &str = "Mozilla/5.0";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub fn build_client(timeout: Duration) -> Result<Client, SummaryError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

    Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(SummaryError::Fetch)
}

pub async fn get_historical(
    symbol: &str,
    from_date: &NaiveDate,
    client: &Client,
) -> Result<NasdaqHistoricalDto, SummaryError> {
    let endpoint = format!("api/quote/{}/historical", symbol);
    let params = format!(
        "assetclass=stocks&fromdate={}&limit=9999",
        from_date.format("%Y-%m-%d")
    );
    let res = make_request(client, BASE_URL, &endpoint, &params).await?;

    Ok(serde_json::from_value::<NasdaqHistoricalDto>(res)?)
}

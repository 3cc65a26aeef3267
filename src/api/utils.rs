use reqwest::Client;
use serde_json::Value;

use crate::error::SummaryError;

pub async fn make_request(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    params: &str,
) -> Result<Value, SummaryError> {
    let url = format!("{}/{}?{}", base_url, endpoint, params);
    let res = client.get(&url).send().await?;

    if !res.status().is_success() {
        return Err(SummaryError::Status(res.status()));
    }

    let text = res.text().await?;
    let data = serde_json::from_str::<Value>(&text)?;

    Ok(data)
}

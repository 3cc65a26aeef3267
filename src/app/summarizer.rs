use chrono::{Local, NaiveDate};
use reqwest::Client;
use rust_decimal::Decimal;

use crate::{
    api::{
        nasdaq,
        nasdaq_dto::{NasdaqHistoricalDto, TradeRow},
    },
    app::{calc, utils},
    error::SummaryError,
    models::QuoteSummary,
};

/// Fetches the trailing year of daily closes for `symbol` and summarizes
/// them. The only side effects are the request itself and warn-level logs
/// for rows whose closing price could not be parsed.
pub async fn summarize_ticker(
    symbol: &str,
    client: &Client,
) -> Result<QuoteSummary, SummaryError> {
    let ticker = utils::normalize_ticker(symbol);
    let start = utils::window_start(Local::now().date_naive());

    let response = nasdaq::get_historical(&ticker, &start, client).await?;

    summarize_response(&ticker, &start, response)
}

pub fn summarize_response(
    ticker: &str,
    start: &NaiveDate,
    response: NasdaqHistoricalDto,
) -> Result<QuoteSummary, SummaryError> {
    let data = response
        .data()
        .as_ref()
        .ok_or_else(|| SummaryError::NoData(ticker.to_string()))?;

    // A missing table or row list counts as zero rows, not as no data.
    let prices = data
        .trades_table()
        .as_ref()
        .and_then(|table| table.rows().as_deref())
        .map(collect_closing_prices)
        .unwrap_or_default();

    let stats = calc::price_stats(&prices)
        .ok_or_else(|| SummaryError::EmptySeries(ticker.to_string()))?;

    Ok(QuoteSummary::new(
        ticker.to_string(),
        start.format("%m-%d-%Y").to_string(),
        *stats.min(),
        *stats.max(),
        *stats.avg(),
        *stats.median(),
    ))
}

fn collect_closing_prices(rows: &[TradeRow]) -> Vec<Decimal> {
    let mut prices = Vec::new();

    for row in rows {
        match utils::parse_currency(row.close()) {
            Ok(price) => prices.push(price),
            Err(_) => log::warn!("No value found at {}", row.date()),
        }
    }

    prices
}

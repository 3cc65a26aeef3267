use derive_getters::Getters;
use derive_new::new;
use serde::Deserialize;

/// Top-level payload of the historical endpoint. `data` is null when the
/// provider has no history for the requested symbol.
#[derive(Debug, Deserialize, Getters, new)]
pub struct NasdaqHistoricalDto {
    data: Option<HistoricalData>,
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalData {
    symbol: Option<String>,
    total_records: Option<i64>,
    trades_table: Option<TradesTable>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct TradesTable {
    rows: Option<Vec<TradeRow>>,
}

/// One trading day. All prices arrive as currency-formatted strings
/// (e.g. "$123.45").
#[derive(Debug, Deserialize, Getters, new)]
pub struct TradeRow {
    date: String,
    close: String,
    volume: Option<String>,
    open: Option<String>,
    high: Option<String>,
    low: Option<String>,
}

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

pub fn normalize_ticker(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

pub fn parse_currency(field: &str) -> Result<Decimal, rust_decimal::Error> {
    field
        .trim()
        .trim_start_matches('$')
        .replace(',', "")
        .parse::<Decimal>()
}

pub fn window_start(today: NaiveDate) -> NaiveDate {
    let year = today.year() - 1;

    // Feb 29 has no counterpart in a non-leap year; use Feb 28 instead.
    today
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::app::utils::{normalize_ticker, parse_currency, window_start};

    #[test]
    fn tickers_are_trimmed_and_uppercased() {
        assert_eq!(normalize_ticker(" aapl "), "AAPL");
        assert_eq!(normalize_ticker("TSLA"), "TSLA");
    }

    #[test]
    fn currency_with_symbol_and_separators_parses() {
        assert_eq!(parse_currency("$1,234.56").unwrap(), dec!(1234.56));
    }

    #[test]
    fn plain_number_parses() {
        assert_eq!(parse_currency("123.45").unwrap(), dec!(123.45));
    }

    #[test]
    fn malformed_value_is_an_error() {
        assert!(parse_currency("N/A").is_err());
        assert!(parse_currency("").is_err());
    }

    #[test]
    fn window_start_is_one_year_back() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        assert_eq!(
            window_start(today),
            NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()
        );
    }

    #[test]
    fn window_start_on_leap_day_falls_back_to_feb_28() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();

        assert_eq!(
            window_start(today),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
    }
}

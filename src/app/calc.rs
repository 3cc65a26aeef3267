use rust_decimal::Decimal;

use crate::models::PriceStats;

/// Descriptive statistics over a series of closing prices. Returns `None`
/// for an empty series.
pub fn price_stats(prices: &[Decimal]) -> Option<PriceStats> {
    let min = prices.iter().min().copied()?;
    let max = prices.iter().max().copied()?;

    let sum: Decimal = prices.iter().sum();
    let avg = (sum / Decimal::from(prices.len())).round_dp(2);
    let median = median(prices)?.round_dp(2);

    Some(PriceStats::new(min, max, avg, median))
}

fn median(prices: &[Decimal]) -> Option<Decimal> {
    let mut sorted = prices.to_vec();
    sorted.sort();

    let mid = sorted.len() / 2;
    if sorted.is_empty() {
        None
    } else if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / Decimal::TWO)
    } else {
        Some(sorted[mid])
    }
}

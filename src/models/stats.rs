use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct PriceStats {
    min: Decimal,
    max: Decimal,
    avg: Decimal,
    median: Decimal,
}

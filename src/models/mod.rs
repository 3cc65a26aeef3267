pub mod stats;
pub mod summary;

pub use stats::PriceStats;
pub use summary::{QuoteSummary, SummaryRecord};

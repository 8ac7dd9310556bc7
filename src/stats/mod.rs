mod aggregator;
mod order;
mod report;

pub use aggregator::{GroupSummary, OverallSummary, StatsAggregator, usage_percent};
pub use order::GroupOrder;
pub use report::{Breakdown, StatsReport};

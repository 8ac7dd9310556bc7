use std::hash::Hash;

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::{CodeRecord, CodeType, Region, UsageRecord};

/// Percentage of `used` over `total`, `0.0` for an empty group.
///
/// Not clamped: `used > total` yields a value above 100.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Counts stay far below 2^52
pub fn usage_percent(used: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        used as f64 / total as f64 * 100.0
    }
}

/// Usage counters over an entire record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OverallSummary {
    pub total: usize,
    pub used: usize,
    pub unused: usize,
    pub usage_percent: f64,
}

impl OverallSummary {
    #[must_use]
    pub fn from_counts(total: usize, used: usize) -> Self {
        Self {
            total,
            used,
            unused: total.saturating_sub(used),
            usage_percent: usage_percent(used, total),
        }
    }
}

/// Usage counters for the records sharing one key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary<K> {
    pub key: K,
    pub total: usize,
    pub used: usize,
    pub unused: usize,
    pub usage_percent: f64,
}

impl<K> GroupSummary<K> {
    #[must_use]
    pub fn from_counts(key: K, total: usize, used: usize) -> Self {
        Self {
            key,
            total,
            used,
            unused: total.saturating_sub(used),
            usage_percent: usage_percent(used, total),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    total: usize,
    used: usize,
}

impl Tally {
    const fn add(&mut self, used: bool) {
        self.total += 1;
        if used {
            self.used += 1;
        }
    }
}

/// Grouped usage reduction over code records.
///
/// Every operation is a pure function of its input slice: nothing is cached,
/// nothing is mutated, and the same input always yields the same output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsAggregator;

impl StatsAggregator {
    #[must_use]
    pub fn compute_overall<R: UsageRecord>(records: &[R]) -> OverallSummary {
        let used = records.iter().filter(|r| r.is_used()).count();
        OverallSummary::from_counts(records.len(), used)
    }

    /// Group `records` by the key `field` extracts.
    ///
    /// Groups come back in the order their key first appears in `records`.
    /// Keys are compared with `Eq`; no normalization is applied.
    #[must_use]
    pub fn compute_by_field<R, K, F>(records: &[R], field: F) -> Vec<GroupSummary<K>>
    where
        R: UsageRecord,
        K: Eq + Hash,
        F: Fn(&R) -> K,
    {
        let mut tallies: IndexMap<K, Tally> = IndexMap::new();

        for record in records {
            tallies
                .entry(field(record))
                .or_default()
                .add(record.is_used());
        }

        tallies
            .into_iter()
            .map(|(key, tally)| GroupSummary::from_counts(key, tally.total, tally.used))
            .collect()
    }

    #[must_use]
    pub fn compute_by_region(records: &[CodeRecord]) -> Vec<GroupSummary<Region>> {
        Self::compute_by_field(records, |r| r.region.clone())
    }

    #[must_use]
    pub fn compute_by_type(records: &[CodeRecord]) -> Vec<GroupSummary<CodeType>> {
        Self::compute_by_field(records, |r| r.code_type.clone())
    }
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;

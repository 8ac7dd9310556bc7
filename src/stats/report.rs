use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{CodeRecord, CodeType, Region};

use super::{GroupOrder, GroupSummary, OverallSummary, StatsAggregator};

/// What to break the overall numbers down by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakdown {
    /// Region and type.
    #[default]
    All,
    Region,
    Type,
    /// Overall numbers only.
    None,
}

impl Breakdown {
    const fn includes_region(self) -> bool {
        matches!(self, Self::All | Self::Region)
    }

    const fn includes_type(self) -> bool {
        matches!(self, Self::All | Self::Type)
    }
}

impl FromStr for Breakdown {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "both" => Ok(Self::All),
            "region" | "regions" => Ok(Self::Region),
            "type" | "types" => Ok(Self::Type),
            "none" | "overall" => Ok(Self::None),
            _ => Err(format!(
                "Unknown breakdown: {s}. Expected one of: all, region, type, none"
            )),
        }
    }
}

/// The statistics page: overall usage plus optional breakdowns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsReport {
    pub overall: OverallSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_region: Option<Vec<GroupSummary<Region>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_type: Option<Vec<GroupSummary<CodeType>>>,
}

impl StatsReport {
    /// Overall numbers only.
    #[must_use]
    pub fn new(records: &[CodeRecord]) -> Self {
        Self {
            overall: StatsAggregator::compute_overall(records),
            by_region: None,
            by_type: None,
        }
    }

    /// Overall numbers plus both breakdowns.
    #[must_use]
    pub fn from_records(records: &[CodeRecord]) -> Self {
        Self::new(records)
            .with_region_breakdown(records)
            .with_type_breakdown(records)
    }

    #[must_use]
    pub fn with_breakdown(self, records: &[CodeRecord], breakdown: Breakdown) -> Self {
        let report = if breakdown.includes_region() {
            self.with_region_breakdown(records)
        } else {
            self
        };
        if breakdown.includes_type() {
            report.with_type_breakdown(records)
        } else {
            report
        }
    }

    #[must_use]
    pub fn with_region_breakdown(mut self, records: &[CodeRecord]) -> Self {
        self.by_region = Some(StatsAggregator::compute_by_region(records));
        self
    }

    #[must_use]
    pub fn with_type_breakdown(mut self, records: &[CodeRecord]) -> Self {
        self.by_type = Some(StatsAggregator::compute_by_type(records));
        self
    }

    /// Reorder whichever breakdowns are present.
    #[must_use]
    pub fn ordered(mut self, order: GroupOrder) -> Self {
        if let Some(ref mut groups) = self.by_region {
            order.apply(groups);
        }
        if let Some(ref mut groups) = self.by_type {
            order.apply(groups);
        }
        self
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

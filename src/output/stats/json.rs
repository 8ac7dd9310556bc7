use serde::Serialize;

use crate::error::Result;
use crate::stats::{GroupSummary, OverallSummary, StatsReport};

use super::StatsFormatter;

/// Raw counts and unrounded percentages, for scripts.
pub struct StatsJsonFormatter;

impl StatsJsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StatsJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonStatsOutput {
    summary: JsonSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    by_region: Option<Vec<JsonGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    by_type: Option<Vec<JsonGroup>>,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    used: usize,
    unused: usize,
    usage_percent: f64,
}

impl From<&OverallSummary> for JsonSummary {
    fn from(overall: &OverallSummary) -> Self {
        Self {
            total: overall.total,
            used: overall.used,
            unused: overall.unused,
            usage_percent: overall.usage_percent,
        }
    }
}

#[derive(Serialize)]
struct JsonGroup {
    key: String,
    total: usize,
    used: usize,
    unused: usize,
    usage_percent: f64,
}

fn groups<K: AsRef<str>>(groups: &[GroupSummary<K>]) -> Vec<JsonGroup> {
    groups
        .iter()
        .map(|g| JsonGroup {
            key: g.key.as_ref().to_string(),
            total: g.total,
            used: g.used,
            unused: g.unused,
            usage_percent: g.usage_percent,
        })
        .collect()
}

impl StatsFormatter for StatsJsonFormatter {
    fn format(&self, report: &StatsReport) -> Result<String> {
        let output = JsonStatsOutput {
            summary: JsonSummary::from(&report.overall),
            by_region: report.by_region.as_deref().map(groups),
            by_type: report.by_type.as_deref().map(groups),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

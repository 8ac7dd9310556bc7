use std::fmt::Write as FmtWrite;

use crate::error::Result;
use crate::stats::{GroupSummary, StatsReport};

use super::super::{format_percent, region_label, type_label};
use super::StatsFormatter;

pub struct StatsMarkdownFormatter;

impl StatsMarkdownFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StatsMarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_group_table<K>(
    output: &mut String,
    title: &str,
    column: &str,
    groups: &[GroupSummary<K>],
    label: impl Fn(&K) -> String,
) {
    writeln!(output, "### {title}\n").ok();
    if groups.is_empty() {
        writeln!(output, "_No promo codes._\n").ok();
        return;
    }

    writeln!(output, "| {column} | Total | Used | Unused | Usage |").ok();
    writeln!(output, "|{}|------:|-----:|-------:|------:|", "-".repeat(column.len() + 2)).ok();
    for group in groups {
        writeln!(
            output,
            "| {} | {} | {} | {} | {} |",
            label(&group.key),
            group.total,
            group.used,
            group.unused,
            format_percent(group.usage_percent)
        )
        .ok();
    }
    writeln!(output).ok();
}

impl StatsFormatter for StatsMarkdownFormatter {
    fn format(&self, report: &StatsReport) -> Result<String> {
        let mut output = String::new();
        let overall = &report.overall;

        writeln!(output, "## Promo Code Statistics\n").ok();

        writeln!(output, "### Summary\n").ok();
        writeln!(output, "| Metric | Value |").ok();
        writeln!(output, "|--------|------:|").ok();
        writeln!(output, "| Total Codes | {} |", overall.total).ok();
        writeln!(output, "| Used Codes | {} |", overall.used).ok();
        writeln!(output, "| Unused Codes | {} |", overall.unused).ok();
        writeln!(
            output,
            "| Usage Rate | {} |",
            format_percent(overall.usage_percent)
        )
        .ok();
        writeln!(output).ok();

        if let Some(ref by_region) = report.by_region {
            write_group_table(&mut output, "Usage by Region", "Region", by_region, region_label);
        }
        if let Some(ref by_type) = report.by_type {
            write_group_table(&mut output, "Usage by Type", "Type", by_type, type_label);
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;

use std::io::Write;

use crate::error::Result;
use crate::stats::{GroupSummary, StatsReport};

use super::super::{ColorMode, ansi, format_percent, region_label, type_label, usage_bar};
use super::StatsFormatter;

pub struct StatsTextFormatter {
    use_colors: bool,
}

impl Default for StatsTextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl StatsTextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.stdout_enabled(),
        }
    }

    fn percent(&self, value: f64) -> String {
        let text = format_percent(value);
        if self.use_colors {
            format!("{}{text}{}", ansi::BOLD, ansi::RESET)
        } else {
            text
        }
    }

    fn write_groups<K>(
        &self,
        output: &mut Vec<u8>,
        title: &str,
        groups: &[GroupSummary<K>],
        label: impl Fn(&K) -> String,
    ) {
        writeln!(output, "{title}:").ok();
        writeln!(output).ok();

        if groups.is_empty() {
            writeln!(output, "  (no codes)").ok();
            writeln!(output).ok();
            return;
        }

        for group in groups {
            writeln!(
                output,
                "{}: {}/{} used ({})",
                label(&group.key),
                group.used,
                group.total,
                self.percent(group.usage_percent)
            )
            .ok();
            writeln!(output, "  {}", usage_bar(group.usage_percent)).ok();
            writeln!(
                output,
                "  {} unused, {} used",
                group.unused, group.used
            )
            .ok();
            writeln!(output).ok();
        }
    }
}

impl StatsFormatter for StatsTextFormatter {
    fn format(&self, report: &StatsReport) -> Result<String> {
        let mut output = Vec::new();
        let overall = &report.overall;

        writeln!(output, "Summary:").ok();
        writeln!(output, "  Total codes: {}", overall.total).ok();
        writeln!(output, "  Used: {}", overall.used).ok();
        writeln!(output, "  Unused: {}", overall.unused).ok();
        writeln!(output, "  Usage rate: {}", self.percent(overall.usage_percent)).ok();

        if let Some(ref by_region) = report.by_region {
            writeln!(output).ok();
            self.write_groups(&mut output, "By Region", by_region, region_label);
        }

        if let Some(ref by_type) = report.by_type {
            if report.by_region.is_none() {
                writeln!(output).ok();
            }
            self.write_groups(&mut output, "By Type", by_type, type_label);
        }

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

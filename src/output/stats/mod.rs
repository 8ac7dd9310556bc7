mod json;
mod markdown;
mod text;

pub use json::StatsJsonFormatter;
pub use markdown::StatsMarkdownFormatter;
pub use text::StatsTextFormatter;

use crate::error::Result;
use crate::stats::StatsReport;

pub trait StatsFormatter {
    /// Render a statistics report.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &StatsReport) -> Result<String>;
}

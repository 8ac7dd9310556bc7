use std::fmt::Write as FmtWrite;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::Result;
use crate::model::PromoCode;
use crate::service::CodeListing;

use super::{ColorMode, ansi, region_label, type_label};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub trait CodesFormatter {
    /// Render unused and used codes as two sections.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_listing(&self, listing: &CodeListing) -> Result<String>;

    /// Render redeemed codes in the given order.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_used(&self, codes: &[PromoCode]) -> Result<String>;
}

fn redeemed_at(code: &PromoCode) -> String {
    code.redeem_date
        .map_or_else(|| "N/A".to_string(), |d| d.format(DATE_TIME_FORMAT).to_string())
}

// ============================================================================
// Text
// ============================================================================

pub struct CodesTextFormatter {
    use_colors: bool,
}

impl CodesTextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.stdout_enabled(),
        }
    }

    fn header(&self, output: &mut String, title: &str, count: usize, color: &str) {
        if self.use_colors {
            writeln!(output, "{color}{title} ({count}):{}", ansi::RESET).ok();
        } else {
            writeln!(output, "{title} ({count}):").ok();
        }
    }

    fn write_rows(output: &mut String, codes: &[PromoCode], date: impl Fn(&PromoCode) -> String) {
        if codes.is_empty() {
            writeln!(output, "  (none)").ok();
            return;
        }
        let width = codes.iter().map(|c| c.code.len()).max().unwrap_or(0);
        for code in codes {
            writeln!(
                output,
                "  {:<width$}  {:<10}  {:<12}  {}  {}",
                code.code,
                type_label(&code.code_type),
                region_label(&code.region),
                date(code),
                code.id
            )
            .ok();
        }
    }
}

impl CodesFormatter for CodesTextFormatter {
    fn format_listing(&self, listing: &CodeListing) -> Result<String> {
        let mut output = String::new();

        self.header(&mut output, "Unused Codes", listing.unused.len(), ansi::GREEN);
        Self::write_rows(&mut output, &listing.unused, |c| {
            c.created_at.format(DATE_FORMAT).to_string()
        });
        writeln!(output).ok();

        self.header(&mut output, "Used Codes", listing.used.len(), ansi::YELLOW);
        Self::write_rows(&mut output, &listing.used, redeemed_at);
        writeln!(output).ok();

        writeln!(
            output,
            "Total: {} ({} used, {} unused)",
            listing.len(),
            listing.used.len(),
            listing.unused.len()
        )
        .ok();
        Ok(output)
    }

    fn format_used(&self, codes: &[PromoCode]) -> Result<String> {
        let mut output = String::new();
        self.header(&mut output, "Redeemed Codes", codes.len(), ansi::YELLOW);
        Self::write_rows(&mut output, codes, redeemed_at);
        Ok(output)
    }
}

// ============================================================================
// JSON
// ============================================================================

pub struct CodesJsonFormatter;

#[derive(Serialize)]
struct JsonCode<'a> {
    id: Uuid,
    code: &'a str,
    #[serde(rename = "type")]
    code_type: &'a str,
    region: &'a str,
    is_used: bool,
    created_at: DateTime<Utc>,
    redeem_date: Option<DateTime<Utc>>,
}

impl<'a> From<&'a PromoCode> for JsonCode<'a> {
    fn from(code: &'a PromoCode) -> Self {
        Self {
            id: code.id,
            code: &code.code,
            code_type: code.code_type.as_str(),
            region: code.region.as_str(),
            is_used: code.is_used,
            created_at: code.created_at,
            redeem_date: code.redeem_date,
        }
    }
}

#[derive(Serialize)]
struct JsonListing<'a> {
    total: usize,
    unused: Vec<JsonCode<'a>>,
    used: Vec<JsonCode<'a>>,
}

impl CodesFormatter for CodesJsonFormatter {
    fn format_listing(&self, listing: &CodeListing) -> Result<String> {
        let output = JsonListing {
            total: listing.len(),
            unused: listing.unused.iter().map(JsonCode::from).collect(),
            used: listing.used.iter().map(JsonCode::from).collect(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_used(&self, codes: &[PromoCode]) -> Result<String> {
        let output: Vec<JsonCode<'_>> = codes.iter().map(JsonCode::from).collect();
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

// ============================================================================
// Markdown
// ============================================================================

pub struct CodesMarkdownFormatter;

impl CodesMarkdownFormatter {
    fn write_table(
        output: &mut String,
        codes: &[PromoCode],
        date_column: &str,
        date: impl Fn(&PromoCode) -> String,
    ) {
        if codes.is_empty() {
            writeln!(output, "_None._\n").ok();
            return;
        }
        writeln!(output, "| Code | Type | Region | {date_column} |").ok();
        writeln!(
            output,
            "|------|------|--------|{}|",
            "-".repeat(date_column.len() + 2)
        )
        .ok();
        for code in codes {
            writeln!(
                output,
                "| `{}` | {} | {} | {} |",
                code.code,
                type_label(&code.code_type),
                region_label(&code.region),
                date(code)
            )
            .ok();
        }
        writeln!(output).ok();
    }
}

impl CodesFormatter for CodesMarkdownFormatter {
    fn format_listing(&self, listing: &CodeListing) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "## Promo Codes\n").ok();

        writeln!(output, "### Unused Codes ({})\n", listing.unused.len()).ok();
        Self::write_table(&mut output, &listing.unused, "Created", |c| {
            c.created_at.format(DATE_FORMAT).to_string()
        });

        writeln!(output, "### Used Codes ({})\n", listing.used.len()).ok();
        Self::write_table(&mut output, &listing.used, "Redeemed", redeemed_at);
        Ok(output)
    }

    fn format_used(&self, codes: &[PromoCode]) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "## Redeemed Codes ({})\n", codes.len()).ok();
        Self::write_table(&mut output, codes, "Redeemed", redeemed_at);
        Ok(output)
    }
}

#[cfg(test)]
#[path = "codes_tests.rs"]
mod tests;

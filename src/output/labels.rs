use crate::model::{CodeType, Region};

const BAR_WIDTH: usize = 20;

/// Human label for a region: `EMEA`, `Americas`, `Asia-Pacific`; anything
/// else is shown with its first letter capitalized.
#[must_use]
pub fn region_label(region: &Region) -> String {
    match region {
        Region::Emea => "EMEA".to_string(),
        Region::Americas => "Americas".to_string(),
        Region::AsiaPacific => "Asia-Pacific".to_string(),
        Region::Other(raw) => capitalize(raw),
    }
}

#[must_use]
pub fn type_label(code_type: &CodeType) -> String {
    match code_type {
        CodeType::Starter => "Starter".to_string(),
        CodeType::Standard => "Standard".to_string(),
        CodeType::Other(raw) => capitalize(raw),
    }
}

/// One decimal and a percent sign: `33.3%`.
#[must_use]
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// Fixed-width progress bar. Values above 100 fill the bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn usage_bar(percent: f64) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        " ".repeat(BAR_WIDTH - filled.min(BAR_WIDTH))
    )
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

use crate::cli::{Cli, CodesAction, CodesAddArgs, CodesArgs, CodesDeleteArgs, CodesFilterArgs};
use crate::config::Config;
use crate::model::{CodeType, PromoCode, Region, known_values};
use crate::output::{
    ColorMode, CodesFormatter, CodesJsonFormatter, CodesMarkdownFormatter, CodesTextFormatter,
    OutputFormat, print_warning_full,
};
use crate::service::{CodeFilter, CodeListing, PromoCodeService, parse_code_lines};
use crate::store::PromoCodeStore;
use crate::{EXIT_SUCCESS, PromoAdminError, Result};

use super::context::{
    color_choice_to_mode, finish, load_effective_config, open_store, read_input, resolve_format,
    write_output,
};

#[must_use]
pub fn run_codes(args: &CodesArgs, cli: &Cli) -> i32 {
    finish(run_codes_impl(args, cli))
}

/// # Errors
/// Returns an error if the configuration or store cannot be loaded, or the
/// requested change is rejected.
pub fn run_codes_impl(args: &CodesArgs, cli: &Cli) -> Result<i32> {
    let config = load_effective_config(cli)?;
    let mut service = PromoCodeService::new(open_store(cli, &config)?);
    let color_mode = color_choice_to_mode(cli.color);

    match &args.action {
        CodesAction::Add(add) => run_add(&mut service, add, &config, cli.quiet),
        CodesAction::List(filter) => {
            let listing = service.list(&code_filter(filter))?;
            let format = resolve_format(filter.format, &config)?;
            let output = format_listing(format, &listing, color_mode)?;
            write_output(None, &output, cli.quiet)?;
            Ok(EXIT_SUCCESS)
        }
        CodesAction::Used(filter) => {
            let used = service.used_codes(&code_filter(filter))?;
            let format = resolve_format(filter.format, &config)?;
            let output = format_used(format, &used, color_mode)?;
            write_output(None, &output, cli.quiet)?;
            Ok(EXIT_SUCCESS)
        }
        CodesAction::Delete(delete) => run_delete(&mut service, delete, cli.quiet),
    }
}

fn run_add<S: PromoCodeStore>(
    service: &mut PromoCodeService<S>,
    args: &CodesAddArgs,
    config: &Config,
    quiet: bool,
) -> Result<i32> {
    let code_type: CodeType = required_choice(
        args.code_type.as_deref(),
        config.codes.default_type.as_deref(),
        "--type",
        "codes.default_type",
    )?
    .into();
    let region: Region = required_choice(
        args.region.as_deref(),
        config.codes.default_region.as_deref(),
        "--region",
        "codes.default_region",
    )?
    .into();

    if !quiet {
        if !code_type.is_known() {
            warn_unknown("type", code_type.as_str(), &known_values(&CodeType::KNOWN));
        }
        if !region.is_known() {
            warn_unknown("region", region.as_str(), &known_values(&Region::KNOWN));
        }
    }

    let codes = collect_codes(args)?;
    let added = service.add_codes(&codes, &code_type, &region)?;

    if !quiet {
        println!("Added {added} promo code(s) ({code_type}, {region})");
    }
    Ok(EXIT_SUCCESS)
}

fn run_delete<S: PromoCodeStore>(
    service: &mut PromoCodeService<S>,
    args: &CodesDeleteArgs,
    quiet: bool,
) -> Result<i32> {
    let removed = service.delete_codes(&args.ids)?;
    if !quiet {
        println!("Deleted {removed} promo code(s)");
    }
    Ok(EXIT_SUCCESS)
}

/// Positional codes first, then the lines of `--file`.
pub(crate) fn collect_codes(args: &CodesAddArgs) -> Result<Vec<String>> {
    let mut codes = args.codes.clone();
    if let Some(path) = &args.file {
        codes.extend(parse_code_lines(&read_input(path)?));
    }
    Ok(codes)
}

/// A trimmed flag value, else the configured default.
pub(crate) fn required_choice(
    flag: Option<&str>,
    default: Option<&str>,
    flag_name: &str,
    config_key: &str,
) -> Result<String> {
    flag.or(default)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            PromoAdminError::Validation(format!(
                "{flag_name} is required (or set {config_key} in the configuration)"
            ))
        })
}

fn warn_unknown(what: &str, value: &str, known: &str) {
    print_warning_full(
        &format!("Unrecognised {what} '{value}'"),
        Some(&format!("expected one of: {known}")),
        Some("Codes are still stored; statistics will group them on their own"),
    );
}

fn code_filter(args: &CodesFilterArgs) -> CodeFilter {
    CodeFilter {
        code_type: args.code_type.as_deref().map(|t| CodeType::from(t.to_string())),
        region: args.region.as_deref().map(|r| Region::from(r.to_string())),
    }
}

fn format_listing(
    format: OutputFormat,
    listing: &CodeListing,
    color_mode: ColorMode,
) -> Result<String> {
    match format {
        OutputFormat::Text => CodesTextFormatter::new(color_mode).format_listing(listing),
        OutputFormat::Json => CodesJsonFormatter.format_listing(listing),
        OutputFormat::Markdown => CodesMarkdownFormatter.format_listing(listing),
    }
}

fn format_used(
    format: OutputFormat,
    codes: &[PromoCode],
    color_mode: ColorMode,
) -> Result<String> {
    match format {
        OutputFormat::Text => CodesTextFormatter::new(color_mode).format_used(codes),
        OutputFormat::Json => CodesJsonFormatter.format_used(codes),
        OutputFormat::Markdown => CodesMarkdownFormatter.format_used(codes),
    }
}

#[cfg(test)]
#[path = "codes_tests.rs"]
mod tests;

use std::fmt::Write as FmtWrite;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{LoadResult, config_warnings, validate_config_semantics};
use crate::output::{print_info, print_warning};
use crate::{EXIT_SUCCESS, PromoAdminError, Result};

use super::context::{finish, load_config};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate => finish(run_config_validate_impl(cli)),
        ConfigAction::Show { format } => {
            let result = run_config_show_impl(*format, cli).map(|output| {
                print!("{output}");
                EXIT_SUCCESS
            });
            finish(result)
        }
    }
}

/// Validates the configuration file that would be used.
///
/// # Errors
/// Returns an error if the file cannot be read, contains invalid TOML, or has
/// semantic errors.
pub(crate) fn run_config_validate_impl(cli: &Cli) -> Result<i32> {
    let loaded = load_config(cli.config.as_deref(), cli.no_config)?;
    validate_config_semantics(&loaded.config)?;

    if cli.quiet {
        return Ok(EXIT_SUCCESS);
    }

    for warning in config_warnings(&loaded.config) {
        print_warning(&warning);
    }
    match &loaded.source {
        Some(path) => println!("Configuration is valid: {}", path.display()),
        None => print_info("No configuration file found; defaults are in effect"),
    }
    Ok(EXIT_SUCCESS)
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub(crate) fn run_config_show_impl(format: ConfigOutputFormat, cli: &Cli) -> Result<String> {
    let loaded = load_config(cli.config.as_deref(), cli.no_config)?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => format_config_text(&loaded),
    }
}

/// Effective configuration as TOML, headed by where it came from.
pub(crate) fn format_config_text(loaded: &LoadResult) -> Result<String> {
    let mut output = String::new();
    let source = loaded.source.as_ref().map_or_else(
        || "built-in defaults".to_string(),
        |path| path.display().to_string(),
    );
    writeln!(output, "# Source: {source}\n").ok();

    let body = toml::to_string_pretty(&loaded.config)
        .map_err(|e| PromoAdminError::Config(format!("cannot render configuration: {e}")))?;
    output.push_str(&body);
    Ok(output)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

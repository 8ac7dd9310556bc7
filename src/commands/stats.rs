use crate::cli::{Cli, StatsArgs};
use crate::config::Config;
use crate::output::{
    ColorMode, OutputFormat, StatsFormatter, StatsJsonFormatter, StatsMarkdownFormatter,
    StatsTextFormatter,
};
use crate::service::StatsService;
use crate::stats::{Breakdown, GroupOrder, StatsReport};
use crate::{EXIT_SUCCESS, PromoAdminError, Result};

use super::context::{
    color_choice_to_mode, finish, load_effective_config, open_store, resolve_format, write_output,
};

#[must_use]
pub fn run_stats(args: &StatsArgs, cli: &Cli) -> i32 {
    finish(run_stats_impl(args, cli))
}

/// # Errors
/// Returns an error if the configuration or store cannot be loaded, or the
/// report cannot be written.
pub fn run_stats_impl(args: &StatsArgs, cli: &Cli) -> Result<i32> {
    let config = load_effective_config(cli)?;
    let (breakdown, order) = resolve_grouping(args, &config)?;
    let format = resolve_format(args.format, &config)?;

    let service = StatsService::new(open_store(cli, &config)?);
    let report = service.refresh_with(breakdown, order)?;

    let output = format_stats(format, &report, color_choice_to_mode(cli.color))?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;
    Ok(EXIT_SUCCESS)
}

/// `--by`/`--order` win over `[stats]`.
pub(crate) fn resolve_grouping(
    args: &StatsArgs,
    config: &Config,
) -> Result<(Breakdown, GroupOrder)> {
    let breakdown = match args.by {
        Some(by) => by,
        None => config
            .stats
            .group_by
            .parse()
            .map_err(PromoAdminError::Config)?,
    };
    let order = match args.order {
        Some(order) => order,
        None => config.stats.order.parse().map_err(PromoAdminError::Config)?,
    };
    Ok((breakdown, order))
}

fn format_stats(
    format: OutputFormat,
    report: &StatsReport,
    color_mode: ColorMode,
) -> Result<String> {
    match format {
        OutputFormat::Text => StatsTextFormatter::new(color_mode).format(report),
        OutputFormat::Json => StatsJsonFormatter::new().format(report),
        OutputFormat::Markdown => StatsMarkdownFormatter::new().format(report),
    }
}

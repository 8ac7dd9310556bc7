use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_SUCCESS, PromoAdminError, Result};

use super::context::finish;

#[must_use]
pub fn run_init(args: &InitArgs, quiet: bool) -> i32 {
    finish(run_init_impl(args).map(|()| {
        if !quiet {
            println!("Created configuration file: {}", args.output.display());
        }
        EXIT_SUCCESS
    }))
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(PromoAdminError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        PromoAdminError::FileWrite {
            path: output_path.clone(),
            source,
        }
    })
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# promo-admin configuration file
version = "1"

[store]
# JSON snapshot holding promo codes and blog posts
path = ".promo-admin/store.json"

[output]
# Default output format: text, json or markdown
format = "text"

[stats]
# Breakdown shown by `promo-admin stats`: all, region, type or none
group_by = "all"

# Group order: first-seen, key or total
order = "first-seen"

[codes]
# Used by `promo-admin codes add` when --type/--region are omitted
# default_type = "starter"
# default_region = "emea"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;

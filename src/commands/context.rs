use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::{Cli, ColorChoice};
use crate::config::{
    Config, ConfigLoader, FileConfigLoader, LoadResult, config_warnings, validate_config_semantics,
};
use crate::error::{PromoAdminError, Result};
use crate::output::{ColorMode, OutputFormat, print_error_full, print_warning};
use crate::store::JsonFileStore;
use crate::{EXIT_CONFIG_ERROR, EXIT_VALIDATION_FAILED};

/// Path argument that means "read from stdin".
const STDIN_MARKER: &str = "-";

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from `--config`, by discovery, or skip it entirely.
///
/// # Errors
/// Returns an error if the configuration file cannot be read or parsed.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult::defaults());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Load and validate the configuration a command runs with.
///
/// Warnings about unusual values are printed unless `--quiet` is set.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or is invalid.
pub(crate) fn load_effective_config(cli: &Cli) -> Result<Config> {
    let loaded = load_config(cli.config.as_deref(), cli.no_config)?;
    validate_config_semantics(&loaded.config)?;

    if !cli.quiet {
        for warning in config_warnings(&loaded.config) {
            print_warning(&warning);
        }
    }
    Ok(loaded.config)
}

/// `--store` wins over `[store] path`.
#[must_use]
pub(crate) fn resolve_store_path(cli_store: Option<&Path>, config: &Config) -> PathBuf {
    cli_store.map_or_else(|| config.store.path.clone(), Path::to_path_buf)
}

/// # Errors
/// Returns an error if the snapshot exists but cannot be loaded.
pub(crate) fn open_store(cli: &Cli, config: &Config) -> Result<JsonFileStore> {
    let path = resolve_store_path(cli.store.as_deref(), config);
    debug!(path = %path.display(), "opening store");
    JsonFileStore::open(path)
}

/// `--format` wins over `[output] format`.
///
/// # Errors
/// Returns a configuration error if the configured format is unknown.
pub(crate) fn resolve_format(
    cli_format: Option<OutputFormat>,
    config: &Config,
) -> Result<OutputFormat> {
    match cli_format {
        Some(format) => Ok(format),
        None => config.output.format.parse().map_err(PromoAdminError::Config),
    }
}

/// Read a whole input file, or stdin when the path is `-`.
///
/// # Errors
/// Returns an error if the input cannot be read.
pub(crate) fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_MARKER {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .map_err(|source| PromoAdminError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        return Ok(content);
    }

    fs::read_to_string(path).map_err(|source| PromoAdminError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Write output to a file or stdout.
///
/// When `output_path` is `Some`, the content is written to the file (creating parent
/// directories if needed). The `quiet` flag only affects stdout output.
pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        let write_err = |source| PromoAdminError::FileWrite {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)?;
        debug!(path = %path.display(), "output written");
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

/// Bad input, unknown ids and duplicates exit 1; everything else exits 2.
#[must_use]
pub(crate) const fn exit_code_for(err: &PromoAdminError) -> i32 {
    if err.is_validation() {
        EXIT_VALIDATION_FAILED
    } else {
        EXIT_CONFIG_ERROR
    }
}

pub(crate) fn report_error(err: &PromoAdminError) {
    print_error_full(
        err.error_type(),
        &err.message(),
        err.detail().as_deref(),
        err.suggestion(),
    );
}

/// Turn a command result into a process exit code, reporting any error.
pub(crate) fn finish(result: Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            report_error(&e);
            exit_code_for(&e)
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;

//! Semantic checks that run after a config file has parsed.

use crate::config::Config;
use crate::model::{CodeType, Region, known_values};
use crate::output::OutputFormat;
use crate::stats::{Breakdown, GroupOrder};
use crate::{PromoAdminError, Result};

/// # Errors
/// Returns an error if an enumerated setting has an unknown value or a
/// path or default is blank.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    if config.store.path.as_os_str().is_empty() {
        return Err(PromoAdminError::Config(
            "store.path must not be empty".to_string(),
        ));
    }

    config
        .output
        .format
        .parse::<OutputFormat>()
        .map_err(|e| PromoAdminError::Config(format!("output.format: {e}")))?;
    config
        .stats
        .group_by
        .parse::<Breakdown>()
        .map_err(|e| PromoAdminError::Config(format!("stats.group_by: {e}")))?;
    config
        .stats
        .order
        .parse::<GroupOrder>()
        .map_err(|e| PromoAdminError::Config(format!("stats.order: {e}")))?;

    for (key, value) in [
        ("codes.default_type", &config.codes.default_type),
        ("codes.default_region", &config.codes.default_region),
    ] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(PromoAdminError::Config(format!("{key} must not be blank")));
        }
    }
    Ok(())
}

/// Settings that are valid but probably unintended.
#[must_use]
pub fn config_warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();

    if let Some(raw) = &config.codes.default_type
        && !CodeType::from(raw.as_str()).is_known()
    {
        warnings.push(format!(
            "codes.default_type '{raw}' is not one of: {}",
            known_values(&CodeType::KNOWN)
        ));
    }
    if let Some(raw) = &config.codes.default_region
        && !Region::from(raw.as_str()).is_known()
    {
        warnings.push(format!(
            "codes.default_region '{raw}' is not one of: {}",
            known_values(&Region::KNOWN)
        ));
    }
    warnings
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config_semantics(&Config::default()).is_ok());
        assert!(config_warnings(&Config::default()).is_empty());
    }

    #[test]
    fn rejects_unknown_format() {
        let mut config = Config::default();
        config.output.format = "sarif".to_string();
        let err = validate_config_semantics(&config).unwrap_err();
        assert!(err.message().contains("output.format"));
    }

    #[test]
    fn rejects_unknown_group_by_and_order() {
        let mut config = Config::default();
        config.stats.group_by = "language".to_string();
        assert!(validate_config_semantics(&config).is_err());

        let mut config = Config::default();
        config.stats.order = "random".to_string();
        let err = validate_config_semantics(&config).unwrap_err();
        assert!(err.message().contains("stats.order"));
    }

    #[test]
    fn rejects_empty_store_path_and_blank_defaults() {
        let mut config = Config::default();
        config.store.path = PathBuf::new();
        assert!(validate_config_semantics(&config).is_err());

        let mut config = Config::default();
        config.codes.default_region = Some("  ".to_string());
        let err = validate_config_semantics(&config).unwrap_err();
        assert!(err.message().contains("codes.default_region"));
    }

    #[test]
    fn warns_on_unrecognized_defaults() {
        let mut config = Config::default();
        config.codes.default_type = Some("premium".to_string());
        config.codes.default_region = Some("EMEA".to_string());

        let warnings = config_warnings(&config);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("premium"));
        assert!(warnings[1].contains("EMEA"));
        assert!(warnings[0].ends_with("starter, standard"));
        assert!(warnings[1].ends_with("emea, americas, asia-pacific"));
        assert!(validate_config_semantics(&config).is_ok());
    }
}

//! Config file discovery: current directory, user config, fallback.

use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigLoader, FileConfigLoader};

use super::mock_fs::MockFileSystem;

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let result = loader.load().unwrap();

    assert_eq!(result.config, Config::default());
    assert_eq!(result.source, None);
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new()
        .with_current_dir("/my/shop")
        .with_file("/my/shop/.promo-admin.toml", "[output]\nformat = \"json\"\n");

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.output.format, "json");
    assert_eq!(
        result.source,
        Some(PathBuf::from("/my/shop/.promo-admin.toml"))
    );
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/promo-admin/config.toml",
        "[stats]\norder = \"key\"\n",
    );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(result.config.stats.order, "key");
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.promo-admin.toml", "[stats]\norder = \"total\"\n")
        .with_file(
            "/home/user/.config/promo-admin/config.toml",
            "[stats]\norder = \"key\"\n",
        );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(result.config.stats.order, "total");
}

#[test]
fn missing_config_dir_falls_back_to_defaults() {
    let fs = MockFileSystem::new().with_config_dir(None);
    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(result.config, Config::default());
}

#[test]
fn load_from_path_reports_missing_file() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader.load_from_path(Path::new("/nope.toml")).unwrap_err();
    assert_eq!(err.error_type(), "IO");
}

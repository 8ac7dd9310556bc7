mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{
    CONFIG_VERSION, CodesConfig, Config, DEFAULT_STORE_PATH, OutputConfig, StatsConfig,
    StoreConfig,
};
pub use validation::{config_warnings, validate_config_semantics};

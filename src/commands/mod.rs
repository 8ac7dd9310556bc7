pub mod blog;
pub mod codes;
pub mod config;
pub(crate) mod context;
pub mod init;
pub mod stats;

pub use blog::{run_blog, run_blog_impl};
pub use codes::{run_codes, run_codes_impl};
pub use config::run_config;
pub use init::{generate_config_template, run_init, run_init_impl};
pub use stats::{run_stats, run_stats_impl};

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use crate::output::OutputFormat;
use crate::service::PublishStatus;
use crate::stats::{Breakdown, GroupOrder};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "promo-admin")]
#[command(author, version, about = "Promo code and blog administration")]
#[command(long_about = "Bulk promo code management, usage statistics and multilingual \
    blog posts, backed by a local JSON snapshot.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Invalid input, unknown id or duplicate\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    /// Path to the JSON snapshot store (overrides config)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage promo codes
    Codes(CodesArgs),

    /// Show promo code usage statistics
    Stats(StatsArgs),

    /// Manage blog posts
    Blog(BlogArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

// ============================================================================
// codes
// ============================================================================

#[derive(Parser, Debug)]
pub struct CodesArgs {
    #[command(subcommand)]
    pub action: CodesAction,
}

#[derive(Subcommand, Debug)]
pub enum CodesAction {
    /// Add promo codes in bulk
    Add(CodesAddArgs),

    /// List codes split into unused and used
    List(CodesFilterArgs),

    /// List redeemed codes, most recent first
    Used(CodesFilterArgs),

    /// Delete codes by id
    Delete(CodesDeleteArgs),
}

#[derive(Parser, Debug)]
pub struct CodesAddArgs {
    /// Codes to add
    pub codes: Vec<String>,

    /// Read codes from a file, one per line ("-" for stdin)
    #[arg(long, short = 'F')]
    pub file: Option<PathBuf>,

    /// Code type, e.g. starter or standard (default: codes.default_type)
    #[arg(long = "type", short = 't')]
    pub code_type: Option<String>,

    /// Region, e.g. emea, americas or asia-pacific (default: codes.default_region)
    #[arg(long, short)]
    pub region: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CodesFilterArgs {
    /// Only codes of this type
    #[arg(long = "type", short = 't')]
    pub code_type: Option<String>,

    /// Only codes in this region
    #[arg(long, short)]
    pub region: Option<String>,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

#[derive(Parser, Debug)]
pub struct CodesDeleteArgs {
    /// Ids of the codes to delete
    #[arg(required = true)]
    pub ids: Vec<Uuid>,
}

// ============================================================================
// stats
// ============================================================================

#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Breakdown [possible values: all, region, type, none] (default: stats.group_by)
    #[arg(long)]
    pub by: Option<Breakdown>,

    /// Group order [possible values: first-seen, key, total] (default: stats.order)
    #[arg(long)]
    pub order: Option<GroupOrder>,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

// ============================================================================
// blog
// ============================================================================

#[derive(Parser, Debug)]
pub struct BlogArgs {
    #[command(subcommand)]
    pub action: BlogAction,
}

#[derive(Subcommand, Debug)]
pub enum BlogAction {
    /// List posts, most recently updated first
    List(BlogListArgs),

    /// Show one post by id or slug (JSON unless --format is given)
    Show(BlogShowArgs),

    /// Create a post from a JSON draft
    Add(BlogAddArgs),

    /// Apply a JSON patch to a post
    Update(BlogUpdateArgs),

    /// Delete a post
    Delete(BlogDeleteArgs),

    /// Print the slug generated for a title
    Slug(BlogSlugArgs),

    /// List the categories posts are filed under
    Categories(BlogCategoriesArgs),
}

#[derive(Parser, Debug)]
pub struct BlogListArgs {
    /// Only posts in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Publication status [possible values: all, published, draft]
    #[arg(long, default_value = "all")]
    pub status: PublishStatus,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

#[derive(Parser, Debug)]
pub struct BlogShowArgs {
    /// Post id or slug
    pub post: String,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

#[derive(Parser, Debug)]
pub struct BlogAddArgs {
    /// JSON draft file ("-" for stdin)
    #[arg(long)]
    pub from: PathBuf,
}

#[derive(Parser, Debug)]
pub struct BlogUpdateArgs {
    pub id: Uuid,

    /// JSON patch file ("-" for stdin)
    #[arg(long)]
    pub from: PathBuf,
}

#[derive(Parser, Debug)]
pub struct BlogDeleteArgs {
    pub id: Uuid,
}

#[derive(Parser, Debug)]
pub struct BlogSlugArgs {
    pub title: String,
}

#[derive(Parser, Debug)]
pub struct BlogCategoriesArgs {
    /// Output format [possible values: text, json, markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

// ============================================================================
// init / config
// ============================================================================

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".promo-admin.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the configuration file
    Validate,

    /// Display the effective configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    /// Annotated TOML
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

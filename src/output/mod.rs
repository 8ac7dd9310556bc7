mod blog;
mod codes;
mod error_output;
mod labels;
pub mod stats;

pub use blog::{BlogFormatter, BlogJsonFormatter, BlogMarkdownFormatter, BlogTextFormatter};
pub use codes::{CodesFormatter, CodesJsonFormatter, CodesMarkdownFormatter, CodesTextFormatter};
pub use error_output::{
    ErrorOutput, print_error, print_error_full, print_info, print_warning, print_warning_full,
};
pub use labels::{format_percent, region_label, type_label, usage_bar};
pub use stats::{StatsFormatter, StatsJsonFormatter, StatsMarkdownFormatter, StatsTextFormatter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against a stream. `NO_COLOR` (any value) disables auto colors.
    #[must_use]
    pub fn enabled_for(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && is_terminal,
        }
    }

    #[must_use]
    pub fn stdout_enabled(self) -> bool {
        self.enabled_for(std::io::IsTerminal::is_terminal(&std::io::stdout()))
    }
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Markdown => "markdown",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

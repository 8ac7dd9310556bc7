//! User-facing error and warning messages on stderr.
//!
//! Format: `✖ Type: message` / `  × detail` / `  help: suggestion`

use std::io::{IsTerminal, Write};

use super::ColorMode;
use super::ansi;

#[derive(Clone, Copy)]
enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    const fn icon(self) -> &'static str {
        match self {
            Self::Error => "✖",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
        }
    }

    const fn color(self) -> &'static str {
        match self {
            Self::Error => ansi::RED,
            Self::Warning => ansi::YELLOW,
            Self::Info => ansi::CYAN,
        }
    }
}

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.enabled_for(std::io::stderr().is_terminal()),
        }
    }

    /// Auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn print_error(
        &self,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error_type, message, detail, suggestion);
    }

    pub fn print_warning(&self, message: &str, detail: Option<&str>, suggestion: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, detail, suggestion);
    }

    pub fn print_info(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_info(&mut stderr, message, None, None);
    }

    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        self.write_block(
            w,
            Severity::Error,
            Some(error_type),
            message,
            detail,
            suggestion,
        );
    }

    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        self.write_block(
            w,
            Severity::Warning,
            Some("Warning"),
            message,
            detail,
            suggestion,
        );
    }

    /// Informational note, without a type label: `ℹ {message}`.
    pub fn write_info<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        self.write_block(w, Severity::Info, None, message, detail, suggestion);
    }

    // Write failures on stderr are ignored: there is nowhere left to report them.
    fn write_block<W: Write>(
        &self,
        w: &mut W,
        severity: Severity,
        label: Option<&str>,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let head = label.map_or_else(
            || severity.icon().to_string(),
            |l| format!("{} {l}:", severity.icon()),
        );
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}{head}{} {message}",
                ansi::BOLD,
                severity.color(),
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "{head} {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

pub fn print_error(error_type: &str, message: &str) {
    ErrorOutput::stderr().print_error(error_type, message, None, None);
}

pub fn print_error_full(
    error_type: &str,
    message: &str,
    detail: Option<&str>,
    suggestion: Option<&str>,
) {
    ErrorOutput::stderr().print_error(error_type, message, detail, suggestion);
}

pub fn print_warning(message: &str) {
    ErrorOutput::stderr().print_warning(message, None, None);
}

pub fn print_warning_full(message: &str, detail: Option<&str>, suggestion: Option<&str>) {
    ErrorOutput::stderr().print_warning(message, detail, suggestion);
}

pub fn print_info(message: &str) {
    ErrorOutput::stderr().print_info(message);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;

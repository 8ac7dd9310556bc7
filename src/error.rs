use std::path::PathBuf;

use thiserror::Error;

/// The kind of record an operation was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    PromoCode,
    BlogPost,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PromoCode => write!(f, "promo code"),
            Self::BlogPost => write!(f, "blog post"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PromoAdminError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("No {kind} with id {id}")]
    NotFound { kind: RecordKind, id: String },

    #[error("Promo code already exists: {0}")]
    DuplicateCode(String),

    #[error("Blog post slug already in use: {0}")]
    DuplicateSlug(String),

    #[error("Unsupported snapshot version {found} in {path} (expected {expected})")]
    UnsupportedSnapshotVersion {
        path: PathBuf,
        found: u32,
        expected: u32,
    },
}

impl PromoAdminError {
    /// Short category label used as the heading of CLI error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) | Self::UnsupportedSnapshotVersion { .. } => {
                "Configuration"
            }
            Self::FileRead { .. } | Self::FileWrite { .. } => "IO",
            Self::Json(_) => "Data",
            Self::Validation(_) => "Validation",
            Self::NotFound { .. } => "Not found",
            Self::DuplicateCode(_) | Self::DuplicateSlug(_) => "Conflict",
        }
    }

    /// Human-readable message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) | Self::Validation(msg) => msg.clone(),
            Self::FileRead { path, .. } => format!("failed to read '{}'", path.display()),
            Self::FileWrite { path, .. } => format!("failed to write '{}'", path.display()),
            Self::TomlParse(_) => "invalid TOML in configuration file".to_string(),
            Self::Json(_) => "invalid JSON data".to_string(),
            Self::NotFound { kind, id } => format!("no {kind} with id '{id}'"),
            Self::DuplicateCode(code) => format!("promo code '{code}' already exists"),
            Self::DuplicateSlug(slug) => format!("slug '{slug}' is already used by another post"),
            Self::UnsupportedSnapshotVersion { found, .. } => {
                format!("unsupported snapshot version {found}")
            }
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } | Self::FileWrite { source, .. } => {
                Some(source.to_string())
            }
            Self::TomlParse(e) => Some(e.message().to_string()),
            Self::Json(e) => Some(e.to_string()),
            Self::UnsupportedSnapshotVersion { path, expected, .. } => Some(format!(
                "{} was written by an incompatible version (expected {expected})",
                path.display()
            )),
            _ => None,
        }
    }

    /// Actionable hint for the user.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::TomlParse(_) | Self::Config(_) => {
                Some("Run 'promo-admin config validate' to check the configuration file")
            }
            Self::NotFound {
                kind: RecordKind::PromoCode,
                ..
            } => Some("Use 'promo-admin codes list --format json' to look up ids"),
            Self::NotFound {
                kind: RecordKind::BlogPost,
                ..
            } => Some("Use 'promo-admin blog list --format json' to look up ids"),
            Self::DuplicateCode(_) => Some("Remove codes that are already stored and retry"),
            Self::DuplicateSlug(_) => Some("Choose a different slug"),
            _ => None,
        }
    }

    /// Whether the error comes from bad user input rather than the environment.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::NotFound { .. }
                | Self::DuplicateCode(_)
                | Self::DuplicateSlug(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PromoAdminError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

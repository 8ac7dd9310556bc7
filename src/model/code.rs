use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tier a promo code belongs to.
///
/// Parsing is exact: any string that is not one of the known labels is kept
/// verbatim in [`CodeType::Other`] so it still shows up in statistics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CodeType {
    Starter,
    Standard,
    Other(String),
}

impl CodeType {
    /// Labels the admin tool issues codes for.
    pub const KNOWN: [Self; 2] = [Self::Starter, Self::Standard];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Starter => "starter",
            Self::Standard => "standard",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for CodeType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "starter" => Self::Starter,
            "standard" => Self::Standard,
            _ => Self::Other(raw),
        }
    }
}

impl From<CodeType> for String {
    fn from(value: CodeType) -> Self {
        match value {
            CodeType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for CodeType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl AsRef<str> for CodeType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic region a promo code is valid in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Region {
    Emea,
    Americas,
    AsiaPacific,
    Other(String),
}

impl Region {
    pub const KNOWN: [Self; 3] = [Self::Emea, Self::Americas, Self::AsiaPacific];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Emea => "emea",
            Self::Americas => "americas",
            Self::AsiaPacific => "asia-pacific",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for Region {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "emea" => Self::Emea,
            "americas" => Self::Americas,
            "asia-pacific" => Self::AsiaPacific,
            _ => Self::Other(raw),
        }
    }
}

impl From<Region> for String {
    fn from(value: Region) -> Self {
        match value {
            Region::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Region {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comma-separated literals of a `KNOWN` set, for diagnostics.
pub(crate) fn known_values<T: AsRef<str>>(known: &[T]) -> String {
    known.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ")
}

/// Anything that can be counted as redeemed or not.
pub trait UsageRecord {
    fn is_used(&self) -> bool;
}

impl<T: UsageRecord + ?Sized> UsageRecord for &T {
    fn is_used(&self) -> bool {
        (**self).is_used()
    }
}

/// The projection of a promo code the statistics engine works on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRecord {
    #[serde(rename = "type")]
    pub code_type: CodeType,
    pub region: Region,
    #[serde(alias = "is_used")]
    pub used: bool,
}

impl CodeRecord {
    #[must_use]
    pub fn new(code_type: impl Into<CodeType>, region: impl Into<Region>, used: bool) -> Self {
        Self {
            code_type: code_type.into(),
            region: region.into(),
            used,
        }
    }
}

impl From<&str> for CodeType {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<&str> for Region {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl UsageRecord for CodeRecord {
    fn is_used(&self) -> bool {
        self.used
    }
}

/// A stored promo code row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoCode {
    pub id: Uuid,
    pub code: String,
    #[serde(rename = "type")]
    pub code_type: CodeType,
    pub region: Region,
    pub is_used: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub redeem_date: Option<DateTime<Utc>>,
}

impl PromoCode {
    /// Create a fresh, unredeemed code. Surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(code: &str, code_type: CodeType, region: Region, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.trim().to_string(),
            code_type,
            region,
            is_used: false,
            created_at,
            redeem_date: None,
        }
    }

    #[must_use]
    pub fn record(&self) -> CodeRecord {
        CodeRecord {
            code_type: self.code_type.clone(),
            region: self.region.clone(),
            used: self.is_used,
        }
    }
}

impl UsageRecord for PromoCode {
    fn is_used(&self) -> bool {
        self.is_used
    }
}

#[cfg(test)]
#[path = "code_tests.rs"]
mod tests;

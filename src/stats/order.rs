use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::GroupSummary;

/// Display order for an already-computed group list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupOrder {
    /// Order in which keys first appear in the input.
    #[default]
    FirstSeen,
    /// Lexicographic by the key's literal value.
    Key,
    /// Largest groups first.
    Total,
}

impl GroupOrder {
    /// Reorder `groups` in place. The sort is stable, so ties keep first-seen order.
    pub fn apply<K: AsRef<str>>(self, groups: &mut [GroupSummary<K>]) {
        match self {
            Self::FirstSeen => {}
            Self::Key => groups.sort_by(|a, b| a.key.as_ref().cmp(b.key.as_ref())),
            Self::Total => groups.sort_by(|a, b| b.total.cmp(&a.total)),
        }
    }
}

impl FromStr for GroupOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first-seen" | "first_seen" | "insertion" => Ok(Self::FirstSeen),
            "key" | "name" => Ok(Self::Key),
            "total" | "size" => Ok(Self::Total),
            _ => Err(format!("Unknown group order: {s}")),
        }
    }
}

// ── Identifier for backend entities ──

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a user, post, or comment.
///
/// Deployments disagree on the representation: older ones use integer
/// keys, current ones use hex uids. Both are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Numeric(u64),
    Uid(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Uid(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        Self::Numeric(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::Uid(s.to_owned())
    }
}

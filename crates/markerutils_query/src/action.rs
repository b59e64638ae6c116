//! Action words.
//!
//! The first argument of a marker command selects what happens to the
//! resolved marker.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An action that can be applied to a resolved marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionWord {
    /// Delegate deletion of the marker to the mapping tool.
    Delete,
    /// Describe the marker in one line.
    Info,
    /// Teleport the requester to the marker.
    Tp,
}

/// The action token did not name a known action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown action: {0}")]
pub struct UnknownAction(pub String);

impl ActionWord {
    /// All action words, in completion order.
    pub const ALL: [ActionWord; 3] = [ActionWord::Delete, ActionWord::Info, ActionWord::Tp];

    /// Returns the word as typed by users.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Info => "info",
            Self::Tp => "tp",
        }
    }

    /// Returns the action words starting with `prefix`, ignoring case.
    #[must_use]
    pub fn complete(prefix: &str) -> Vec<&'static str> {
        let prefix = prefix.to_lowercase();
        Self::ALL
            .iter()
            .map(|action| action.as_str())
            .filter(|word| word.starts_with(&prefix))
            .collect()
    }
}

impl FromStr for ActionWord {
    type Err = UnknownAction;

    /// Parses an action token. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "delete" => Ok(Self::Delete),
            "info" => Ok(Self::Info),
            "tp" => Ok(Self::Tp),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for ActionWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

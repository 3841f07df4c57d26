use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseNameError;

/// Watch status of a tracked title, serialized the way the store expects it
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum WatchStatus {
    Watching,
    Completed,
    /// Want to watch. New entries start here.
    #[default]
    Wishlist,
    Dropped,
}

impl WatchStatus {
    pub const ALL: [WatchStatus; 4] = [
        WatchStatus::Watching,
        WatchStatus::Completed,
        WatchStatus::Wishlist,
        WatchStatus::Dropped,
    ];

    /// Wire name ("watching", "completed", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            WatchStatus::Watching => "watching",
            WatchStatus::Completed => "completed",
            WatchStatus::Wishlist => "wishlist",
            WatchStatus::Dropped => "dropped",
        }
    }

    /// Capitalized name for human output
    pub fn label(&self) -> &'static str {
        match self {
            WatchStatus::Watching => "Watching",
            WatchStatus::Completed => "Completed",
            WatchStatus::Wishlist => "Wishlist",
            WatchStatus::Dropped => "Dropped",
        }
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WatchStatus {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "watching" => Ok(WatchStatus::Watching),
            "completed" => Ok(WatchStatus::Completed),
            "wishlist" => Ok(WatchStatus::Wishlist),
            "dropped" => Ok(WatchStatus::Dropped),
            _ => Err(ParseNameError {
                kind: "status",
                value: s.to_string(),
                expected: "watching, completed, wishlist, dropped",
            }),
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// How often a watcher transfers tracks from its source to its destination.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SyncInterval {
    #[default]
    Hour,
    Day,
    Week,
}

impl SyncInterval {
    pub const ALL: [SyncInterval; 3] = [SyncInterval::Hour, SyncInterval::Day, SyncInterval::Week];

    /// Length of one cadence period in seconds.
    pub fn as_secs(&self) -> u64 {
        match self {
            Self::Hour => 60 * 60,
            Self::Day => 24 * 60 * 60,
            Self::Week => 7 * 24 * 60 * 60,
        }
    }

    /// Human readable label for the interval select.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hour => "Every hour",
            Self::Day => "Every day",
            Self::Week => "Every week",
        }
    }
}

impl Display for SyncInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hour => write!(f, "hour"),
            Self::Day => write!(f, "day"),
            Self::Week => write!(f, "week"),
        }
    }
}

/// Returned when a sync interval token is not one of `hour`, `day`, `week`.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("invalid sync interval: {0}")]
pub struct InvalidSyncInterval(pub String);

impl FromStr for SyncInterval {
    type Err = InvalidSyncInterval;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "hour" => Self::Hour,
            "day" => Self::Day,
            "week" => Self::Week,
            _ => return Err(InvalidSyncInterval(s.to_string())),
        })
    }
}

/// Server-side watcher as rendered by the page. Only `id` is used by the
/// delete and sync actions; the rest is display data.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Watcher {
    pub id: u32,
    pub playlist_from: String,
    pub playlist_to: String,
    pub should_remove: bool,
    pub sync_interval: SyncInterval,
    /// RFC 3339 timestamp of the last transfer, if any.
    #[serde(default)]
    pub last_sync_at: Option<String>,
    /// RFC 3339 timestamp of the next scheduled transfer, if any.
    #[serde(default)]
    pub next_sync_at: Option<String>,
    /// Error text of the most recent transfer, when it failed.
    #[serde(default)]
    pub last_error: Option<String>,
}

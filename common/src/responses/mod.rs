//! Response bodies. Every endpoint answers with at least the success
//! envelope; callers only look at `success`, never at the HTTP status.

use crate::model::playlist::Playlist;
use crate::model::watcher::Watcher;
use serde::{Deserialize, Serialize};

/// `{ success, error? }`
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Envelope {
    /// A body without the flag counts as a failure.
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct WatchersResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub watchers: Vec<Watcher>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct PlaylistsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub playlists: Vec<Playlist>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct SyncResponse {
    #[serde(default)]
    pub success: bool,
    pub num_tracks_transferred: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_success_flag_is_a_failure() {
        let envelope: Envelope = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("nope"));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let envelope: Envelope =
            serde_json::from_str(r#"{"success":true,"num_tracks_transferred":4}"#).unwrap();
        assert_eq!(envelope, Envelope::ok());
    }

    #[test]
    fn ok_envelope_omits_error() {
        assert_eq!(serde_json::to_string(&Envelope::ok()).unwrap(), r#"{"success":true}"#);
        assert_eq!(
            serde_json::to_string(&Envelope::failure("X")).unwrap(),
            r#"{"success":false,"error":"X"}"#
        );
    }
}

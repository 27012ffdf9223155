use serde::{Deserialize, Serialize};

/// Payload of `POST /watchers`, built from the create form at submit time.
///
/// Values are sent as the user left them; the backend normalizes playlist
/// values and parses `sync_interval`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct CreateWatcherRequest {
    pub playlist_from: String,
    pub playlist_to: String,
    #[serde(default)]
    pub should_remove: bool,
    pub sync_interval: String,
}

/// Payload of `PUT /playlists/{id}`: a mirrored playlist and its track ids.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct SavePlaylistRequest {
    pub name: String,
    #[serde(default)]
    pub tracks: Vec<String>,
}

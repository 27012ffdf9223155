use serde::{Deserialize, Serialize};

/// Value that represents the built-in "Liked Tracks" collection. It can be a
/// watcher source but never a destination.
pub const LIKED_PLAYLIST_VALUE: &str = "_liked";

/// A playlist the user can pick as source or destination of a watcher.
///
/// `id` is the stored playlist value (`_liked` or a `spotify:playlist:<id>`
/// URI) and is what the create form posts back.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub track_count: u32,
}

impl Playlist {
    pub fn is_liked(&self) -> bool {
        self.id == LIKED_PLAYLIST_VALUE
    }
}

use common::model::playlist::LIKED_PLAYLIST_VALUE;
use regex::Regex;
use std::fmt::Display;
use std::sync::OnceLock;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("Invalid playlist: {0}")]
pub struct InvalidPlaylist(pub String);

/// A watcher endpoint: the liked-tracks collection or a playlist by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlaylistRef {
    Liked,
    Id(String),
}

fn playlist_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:https?://open\.spotify\.com/playlist/|spotify:playlist:)([a-zA-Z0-9]+)")
            .expect("playlist pattern is valid")
    })
}

impl PlaylistRef {
    /// Accepts `_liked`, a `spotify:playlist:<id>` URI or an
    /// `https://open.spotify.com/playlist/<id>` link (query string ignored).
    pub fn parse(input: &str) -> Result<Self, InvalidPlaylist> {
        let input = input.trim();
        if input == LIKED_PLAYLIST_VALUE {
            return Ok(Self::Liked);
        }

        playlist_pattern()
            .captures(input)
            .and_then(|captures| Some(Self::Id(captures.get(1)?.as_str().to_string())))
            .ok_or_else(|| InvalidPlaylist(input.to_string()))
    }

    /// Value for storage and for the page's select options.
    pub fn to_value(&self) -> String {
        match self {
            Self::Liked => LIKED_PLAYLIST_VALUE.to_string(),
            Self::Id(id) => format!("spotify:playlist:{id}"),
        }
    }
}

impl Display for PlaylistRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Liked => write!(f, "Liked Tracks"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

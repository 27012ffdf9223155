use common::model::playlist::{Playlist, LIKED_PLAYLIST_VALUE};

/// Display name for a stored playlist value, falling back to the value itself
/// for playlists that are not mirrored.
pub fn playlist_name(playlists: &[Playlist], value: &str) -> String {
    playlists
        .iter()
        .find(|playlist| playlist.id == value)
        .map(|playlist| playlist.name.clone())
        .unwrap_or_else(|| match value {
            LIKED_PLAYLIST_VALUE => "Liked Tracks".to_string(),
            _ => value.to_string(),
        })
}

/// Playlists that can receive tracks. The liked collection is source-only.
pub fn destinations(playlists: &[Playlist]) -> impl Iterator<Item = &Playlist> {
    playlists.iter().filter(|playlist| !playlist.is_liked())
}

pub fn toggle_label(manual_entry: bool) -> &'static str {
    if manual_entry {
        "Choose from your playlists"
    } else {
        "Enter a playlist URL"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist(id: &str, name: &str) -> Playlist {
        Playlist {
            id: id.into(),
            name: name.into(),
            track_count: 0,
        }
    }

    #[test]
    fn names_known_and_unknown_playlists() {
        let playlists = vec![playlist("spotify:playlist:a", "Road trip")];

        assert_eq!(playlist_name(&playlists, "spotify:playlist:a"), "Road trip");
        assert_eq!(playlist_name(&playlists, "_liked"), "Liked Tracks");
        assert_eq!(playlist_name(&playlists, "spotify:playlist:z"), "spotify:playlist:z");
    }

    #[test]
    fn liked_tracks_are_not_a_destination() {
        let playlists = vec![playlist("_liked", "Liked Tracks"), playlist("spotify:playlist:a", "A")];

        let ids: Vec<_> = destinations(&playlists).map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["spotify:playlist:a"]);
    }

    #[test]
    fn toggle_label_names_the_other_mode() {
        assert_eq!(toggle_label(false), "Enter a playlist URL");
        assert_eq!(toggle_label(true), "Choose from your playlists");
    }
}

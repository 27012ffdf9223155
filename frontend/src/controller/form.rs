use common::requests::CreateWatcherRequest;

/// Current values of the create form.
///
/// The source playlist is either picked from the select or typed into the
/// free-text input, depending on `manual_entry`. Both values are kept so
/// switching back to the select restores its previous choice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WatcherForm {
    pub playlist_from: String,
    pub manual_playlist_from: String,
    pub playlist_to: String,
    pub sync_interval: String,
    pub should_remove: bool,
    manual_entry: bool,
}

impl WatcherForm {
    pub fn new(sync_interval: impl Into<String>) -> Self {
        Self {
            sync_interval: sync_interval.into(),
            ..Self::default()
        }
    }

    pub fn manual_entry(&self) -> bool {
        self.manual_entry
    }

    /// Source value for the active entry mode.
    pub fn source(&self) -> &str {
        if self.manual_entry {
            &self.manual_playlist_from
        } else {
            &self.playlist_from
        }
    }

    /// Whether the submit control must be disabled.
    pub fn submit_disabled(&self) -> bool {
        let from = self.source();
        from.is_empty() || self.playlist_to.is_empty() || self.sync_interval.is_empty() || from == self.playlist_to
    }

    /// Switch between select and free-text entry. The free-text value is
    /// cleared on every switch.
    pub fn toggle_manual_entry(&mut self) {
        self.manual_entry = !self.manual_entry;
        self.manual_playlist_from.clear();
    }

    /// Build the request body from the current values. Track removal is never
    /// requested for a manually entered source.
    pub fn draft(&self) -> CreateWatcherRequest {
        CreateWatcherRequest {
            playlist_from: self.source().to_string(),
            playlist_to: self.playlist_to.clone(),
            should_remove: !self.manual_entry && self.should_remove,
            sync_interval: self.sync_interval.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(from: &str, to: &str, interval: &str) -> WatcherForm {
        WatcherForm {
            playlist_from: from.into(),
            playlist_to: to.into(),
            sync_interval: interval.into(),
            ..WatcherForm::default()
        }
    }

    #[test]
    fn submit_gate_matches_field_state() {
        let values = ["", "a", "b"];
        for from in values {
            for to in values {
                for interval in ["", "hour"] {
                    let expected = from.is_empty() || to.is_empty() || interval.is_empty() || from == to;
                    assert_eq!(
                        form(from, to, interval).submit_disabled(),
                        expected,
                        "from={from:?} to={to:?} interval={interval:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn manual_entry_reads_the_free_text_source() {
        let mut form = form("spotify:playlist:a", "spotify:playlist:b", "day");
        form.toggle_manual_entry();
        assert!(form.submit_disabled());

        form.manual_playlist_from = "https://open.spotify.com/playlist/c".into();
        assert!(!form.submit_disabled());
        assert_eq!(form.source(), "https://open.spotify.com/playlist/c");

        form.manual_playlist_from = "spotify:playlist:b".into();
        assert!(form.submit_disabled());
    }

    #[test]
    fn toggling_twice_restores_select_entry() {
        let mut original = form("_liked", "spotify:playlist:b", "week");
        original.should_remove = true;

        let mut toggled = original.clone();
        toggled.toggle_manual_entry();
        toggled.manual_playlist_from = "typed".into();
        toggled.toggle_manual_entry();

        assert_eq!(toggled, original);
        assert!(!toggled.manual_entry());
        assert!(toggled.manual_playlist_from.is_empty());
    }

    #[test]
    fn manual_draft_never_removes_tracks() {
        let mut form = form("_liked", "spotify:playlist:b", "hour");
        form.should_remove = true;
        assert!(form.draft().should_remove);

        form.toggle_manual_entry();
        form.manual_playlist_from = "spotify:playlist:a".into();
        let draft = form.draft();

        assert!(!draft.should_remove);
        assert_eq!(draft.playlist_from, "spotify:playlist:a");
        assert_eq!(draft.playlist_to, "spotify:playlist:b");
        assert_eq!(draft.sync_interval, "hour");
    }
}

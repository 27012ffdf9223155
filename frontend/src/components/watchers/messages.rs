use crate::controller::Dashboard;

pub enum Msg {
    Loaded(Dashboard),
    SetPlaylistFrom(String),
    SetManualPlaylistFrom(String),
    SetPlaylistTo(String),
    SetSyncInterval(String),
    SetShouldRemove(bool),
    ToggleManualEntry,
    Submit,
    DeleteWatcher(u32),
    SyncWatcher(u32),
    DeleteAccount,
    ActionFinished,
}

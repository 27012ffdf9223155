//! Endpoint paths consumed by the page and served by the backend.

pub const ROOT: &str = "/";
pub const WATCHERS: &str = "/watchers";
pub const ME: &str = "/me";
pub const PLAYLISTS: &str = "/playlists";

pub fn watcher(id: u32) -> String {
    format!("{WATCHERS}/{id}")
}

pub fn watcher_sync(id: u32) -> String {
    format!("{WATCHERS}/{id}/sync")
}

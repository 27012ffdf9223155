pub mod playlist;
pub mod watcher;

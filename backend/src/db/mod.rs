//! SQLite storage: one connection behind a mutex, shared by the HTTP workers
//! and the sync scheduler.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

pub mod error;
pub mod playlist;
pub mod transfer;
pub mod watcher;

use error::{DbError, DbResult};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS watchers (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    playlist_from   TEXT    NOT NULL,
    playlist_to     TEXT    NOT NULL,
    should_remove   BOOLEAN NOT NULL CHECK (should_remove IN (0, 1)),
    sync_interval   TEXT    NOT NULL,
    last_sync_at    TEXT,
    next_sync_at    TEXT,
    created_at      TEXT    NOT NULL,

    UNIQUE (playlist_from, playlist_to)
);

CREATE TABLE IF NOT EXISTS transfers (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    watcher_id      INTEGER NOT NULL,
    num_tracks      INTEGER NOT NULL,
    error           TEXT,
    synced_at       TEXT    NOT NULL
);

CREATE TABLE IF NOT EXISTS playlists (
    id              TEXT    PRIMARY KEY,
    name            TEXT    NOT NULL,
    updated_at      TEXT    NOT NULL
);

CREATE TABLE IF NOT EXISTS playlist_tracks (
    playlist_id     TEXT    NOT NULL,
    track_id        TEXT    NOT NULL,
    position        INTEGER NOT NULL,

    UNIQUE (playlist_id, track_id)
);
";

pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Self::init(Connection::open(path)?)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> DbResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> DbResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn conn(&self) -> DbResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| DbError::Poisoned)
    }

    /// Deletes everything the local account owns.
    pub fn clear_account(&self) -> DbResult<()> {
        let conn = self.conn()?;
        let tx = conn.unchecked_transaction()?;
        transfer::TransferRepo::new(&tx).delete_all()?;
        watcher::WatcherRepo::new(&tx).delete_all()?;
        playlist::PlaylistRepo::new(&tx).delete_all()?;
        tx.commit()?;
        Ok(())
    }
}

/// Stored timestamp format. Always UTC with a `Z` suffix so stored values
/// compare correctly as strings.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn parse_timestamp(value: &str) -> DbResult<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}

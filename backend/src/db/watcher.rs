use super::error::{DbError, DbResult};
use super::{parse_timestamp, timestamp};
use crate::model::playlist::PlaylistRef;
use chrono::{DateTime, Utc};
use common::model::watcher::{SyncInterval, Watcher};
use rusqlite::{params, Connection, OptionalExtension, Row};

pub const COLUMNS: &str =
    "id, playlist_from, playlist_to, should_remove, sync_interval, last_sync_at, next_sync_at, created_at";

#[derive(Debug, Clone, PartialEq)]
pub struct WatcherRecord {
    pub id: u32,
    pub playlist_from: PlaylistRef,
    pub playlist_to: PlaylistRef,
    pub should_remove: bool,
    pub sync_interval: SyncInterval,
    pub last_sync_at: Option<DateTime<Utc>>,
    pub next_sync_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<&Row<'_>> for WatcherRecord {
    type Error = DbError;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.get(0)?,
            playlist_from: PlaylistRef::parse(&row.get::<_, String>(1)?)?,
            playlist_to: PlaylistRef::parse(&row.get::<_, String>(2)?)?,
            should_remove: row.get(3)?,
            sync_interval: row.get::<_, String>(4)?.parse()?,
            last_sync_at: row.get::<_, Option<String>>(5)?.as_deref().map(parse_timestamp).transpose()?,
            next_sync_at: row.get::<_, Option<String>>(6)?.as_deref().map(parse_timestamp).transpose()?,
            created_at: parse_timestamp(&row.get::<_, String>(7)?)?,
        })
    }
}

impl From<&WatcherRecord> for Watcher {
    fn from(record: &WatcherRecord) -> Self {
        Self {
            id: record.id,
            playlist_from: record.playlist_from.to_value(),
            playlist_to: record.playlist_to.to_value(),
            should_remove: record.should_remove,
            sync_interval: record.sync_interval,
            last_sync_at: record.last_sync_at.map(timestamp),
            next_sync_at: record.next_sync_at.map(timestamp),
            last_error: None,
        }
    }
}

pub struct WatcherRepo<'a> {
    conn: &'a Connection,
}

impl<'a> WatcherRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn query(&self, filter: &str, params: impl rusqlite::Params) -> DbResult<Vec<WatcherRecord>> {
        self.conn
            .prepare(&format!("SELECT {COLUMNS} FROM watchers {filter} ORDER BY id"))?
            .query_and_then(params, |row| WatcherRecord::try_from(row))?
            .collect()
    }

    /// Get all configured watchers.
    pub fn all(&self) -> DbResult<Vec<WatcherRecord>> {
        self.query("", [])
    }

    /// Get all watchers reading from a specific playlist.
    pub fn for_source(&self, from: &PlaylistRef) -> DbResult<Vec<WatcherRecord>> {
        self.query("WHERE playlist_from = ?1", params![from.to_value()])
    }

    /// Watchers that were never synced or whose next sync is due at `now`.
    pub fn due(&self, now: DateTime<Utc>) -> DbResult<Vec<WatcherRecord>> {
        self.query(
            "WHERE next_sync_at IS NULL OR next_sync_at <= ?1",
            params![timestamp(now)],
        )
    }

    pub fn by_id(&self, id: u32) -> DbResult<Option<WatcherRecord>> {
        self.conn
            .prepare(&format!("SELECT {COLUMNS} FROM watchers WHERE id = ?1"))?
            .query_row(params![id], |row| Ok(WatcherRecord::try_from(row)))
            .optional()?
            .transpose()
    }

    /// Create a watcher and return its id.
    pub fn create(
        &self,
        from: &PlaylistRef,
        to: &PlaylistRef,
        should_remove: bool,
        sync_interval: SyncInterval,
        now: DateTime<Utc>,
    ) -> DbResult<u32> {
        self.conn.execute(
            "INSERT INTO watchers (playlist_from, playlist_to, should_remove, sync_interval, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![from.to_value(), to.to_value(), should_remove, sync_interval.to_string(), timestamp(now)],
        )?;

        let id = self.conn.last_insert_rowid();
        u32::try_from(id).map_err(|_| DbError::IdOutOfRange(id))
    }

    pub fn record_sync(&self, id: u32, synced_at: DateTime<Utc>, next_sync_at: DateTime<Utc>) -> DbResult<()> {
        self.conn.execute(
            "UPDATE watchers SET last_sync_at = ?1, next_sync_at = ?2 WHERE id = ?3",
            params![timestamp(synced_at), timestamp(next_sync_at), id],
        )?;

        Ok(())
    }

    pub fn delete(&self, id: u32) -> DbResult<()> {
        self.conn.execute("DELETE FROM watchers WHERE id = ?1", params![id])?;
        Ok(())
    }

    pub fn delete_all(&self) -> DbResult<()> {
        self.conn.execute("DELETE FROM watchers", [])?;
        Ok(())
    }
}

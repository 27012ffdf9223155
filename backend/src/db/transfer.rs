use super::error::DbResult;
use super::{parse_timestamp, timestamp};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

const COLUMNS: &str = "id, watcher_id, num_tracks, error, synced_at";

/// Outcome of one sync run of a watcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub id: u32,
    pub watcher_id: u32,
    pub num_tracks: usize,
    pub error: Option<String>,
    pub synced_at: DateTime<Utc>,
}

impl Transfer {
    fn from_row(row: &Row<'_>) -> DbResult<Self> {
        Ok(Self {
            id: row.get(0)?,
            watcher_id: row.get(1)?,
            num_tracks: row.get::<_, i64>(2)? as usize,
            error: row.get(3)?,
            synced_at: parse_timestamp(&row.get::<_, String>(4)?)?,
        })
    }
}

pub struct TransferRepo<'a> {
    conn: &'a Connection,
}

impl<'a> TransferRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, watcher_id: u32, num_tracks: usize, error: Option<&str>, synced_at: DateTime<Utc>) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO transfers (watcher_id, num_tracks, error, synced_at) VALUES (?1, ?2, ?3, ?4)",
            params![watcher_id, num_tracks as i64, error, timestamp(synced_at)],
        )?;
        Ok(())
    }

    /// Most recent transfer of a watcher.
    pub fn latest(&self, watcher_id: u32) -> DbResult<Option<Transfer>> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM transfers WHERE watcher_id = ?1 ORDER BY id DESC LIMIT 1"),
                params![watcher_id],
                |row| Ok(Transfer::from_row(row)),
            )
            .optional()?
            .transpose()
    }

    /// Transfers of a watcher, oldest first.
    #[cfg(test)]
    pub fn for_watcher(&self, watcher_id: u32) -> DbResult<Vec<Transfer>> {
        self.conn
            .prepare(&format!("SELECT {COLUMNS} FROM transfers WHERE watcher_id = ?1 ORDER BY id"))?
            .query_and_then(params![watcher_id], Transfer::from_row)?
            .collect()
    }

    pub fn delete_for_watcher(&self, watcher_id: u32) -> DbResult<()> {
        self.conn
            .execute("DELETE FROM transfers WHERE watcher_id = ?1", params![watcher_id])?;
        Ok(())
    }

    pub fn delete_all(&self) -> DbResult<()> {
        self.conn.execute("DELETE FROM transfers", [])?;
        Ok(())
    }
}

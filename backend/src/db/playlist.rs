use super::error::DbResult;
use super::timestamp;
use crate::model::playlist::PlaylistRef;
use chrono::{DateTime, Utc};
use common::model::playlist::Playlist;
use rusqlite::{params, Connection};
use std::collections::HashSet;

/// Local mirror of the user's playlists and their track ids. Track order is
/// kept through `position`.
pub struct PlaylistRepo<'a> {
    conn: &'a Connection,
}

impl<'a> PlaylistRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// All mirrored playlists, liked tracks first, then by name.
    pub fn list(&self) -> DbResult<Vec<Playlist>> {
        self.conn
            .prepare(
                "SELECT p.id, p.name, COUNT(t.track_id)
                 FROM playlists p LEFT JOIN playlist_tracks t ON t.playlist_id = p.id
                 GROUP BY p.id, p.name
                 ORDER BY p.id = '_liked' DESC, p.name",
            )?
            .query_and_then([], |row| -> DbResult<Playlist> {
                Ok(Playlist {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    track_count: row.get(2)?,
                })
            })?
            .collect()
    }

    /// Create or replace a playlist and its full track list. Duplicate track
    /// ids keep their first position.
    pub fn save(&self, playlist: &PlaylistRef, name: &str, tracks: &[String], now: DateTime<Utc>) -> DbResult<()> {
        let id = playlist.to_value();
        let tx = self.conn.unchecked_transaction()?;

        tx.execute(
            "INSERT OR REPLACE INTO playlists (id, name, updated_at) VALUES (?1, ?2, ?3)",
            params![id, name, timestamp(now)],
        )?;
        tx.execute("DELETE FROM playlist_tracks WHERE playlist_id = ?1", params![id])?;
        insert_tracks(&tx, &id, tracks, 0)?;

        tx.commit()?;
        Ok(())
    }

    /// Whether `playlist` can be read from. The liked collection always exists.
    pub fn exists(&self, playlist: &PlaylistRef) -> DbResult<bool> {
        if *playlist == PlaylistRef::Liked {
            return Ok(true);
        }

        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM playlists WHERE id = ?1",
            params![playlist.to_value()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    pub fn track_ids(&self, playlist: &PlaylistRef) -> DbResult<Vec<String>> {
        self.conn
            .prepare("SELECT track_id FROM playlist_tracks WHERE playlist_id = ?1 ORDER BY position")?
            .query_and_then(params![playlist.to_value()], |row| -> DbResult<String> { Ok(row.get(0)?) })?
            .collect()
    }

    /// Append tracks after the current last position, skipping ones already
    /// present. Returns how many were added.
    pub fn append_tracks(&self, playlist: &PlaylistRef, tracks: &[String]) -> DbResult<usize> {
        let id = playlist.to_value();
        let next: i64 = self.conn.query_row(
            "SELECT COALESCE(MAX(position) + 1, 0) FROM playlist_tracks WHERE playlist_id = ?1",
            params![id],
            |row| row.get(0),
        )?;

        insert_tracks(self.conn, &id, tracks, next)
    }

    pub fn remove_tracks(&self, playlist: &PlaylistRef, tracks: &[String]) -> DbResult<()> {
        let id = playlist.to_value();
        let mut stmt = self
            .conn
            .prepare("DELETE FROM playlist_tracks WHERE playlist_id = ?1 AND track_id = ?2")?;

        for track in tracks {
            stmt.execute(params![id, track])?;
        }
        Ok(())
    }

    pub fn delete_all(&self) -> DbResult<()> {
        self.conn.execute("DELETE FROM playlist_tracks", [])?;
        self.conn.execute("DELETE FROM playlists", [])?;
        Ok(())
    }
}

fn insert_tracks(conn: &Connection, playlist_id: &str, tracks: &[String], first_position: i64) -> DbResult<usize> {
    let mut stmt = conn.prepare(
        "INSERT OR IGNORE INTO playlist_tracks (playlist_id, track_id, position) VALUES (?1, ?2, ?3)",
    )?;

    let mut seen = HashSet::new();
    let mut position = first_position;
    for track in tracks.iter().filter(|track| seen.insert(track.as_str())) {
        if stmt.execute(params![playlist_id, track, position])? > 0 {
            position += 1;
        }
    }
    Ok((position - first_position) as usize)
}

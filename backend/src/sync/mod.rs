//! Track transfer between the two playlists of a watcher.

use crate::db::playlist::PlaylistRepo;
use crate::db::transfer::TransferRepo;
use crate::db::watcher::{WatcherRecord, WatcherRepo};
use crate::model::playlist::PlaylistRef;
use chrono::{DateTime, Duration, Utc};
use error::{SyncError, SyncResult};
use rusqlite::Connection;
use std::collections::HashSet;

pub mod error;
pub mod scheduler;

/// Copy the source tracks missing from the destination into it and, when the
/// watcher removes tracks, empty the source. Returns how many tracks were
/// added to the destination.
pub fn transfer(conn: &Connection, watcher: &WatcherRecord) -> SyncResult<usize> {
    if watcher.playlist_to == PlaylistRef::Liked {
        return Err(SyncError::InvalidTransfer(format!(
            "{} cannot receive tracks",
            watcher.playlist_to
        )));
    }

    let tx = conn.unchecked_transaction().map_err(crate::db::error::DbError::from)?;
    let repo = PlaylistRepo::new(&tx);

    let from_tracks = repo.track_ids(&watcher.playlist_from)?;
    if from_tracks.is_empty() {
        return Ok(0);
    }

    let to_tracks = repo.track_ids(&watcher.playlist_to)?.into_iter().collect::<HashSet<_>>();
    let to_insert = from_tracks
        .iter()
        .filter(|track| !to_tracks.contains(*track))
        .cloned()
        .collect::<Vec<_>>();

    let added = repo.append_tracks(&watcher.playlist_to, &to_insert)?;

    if watcher.should_remove {
        repo.remove_tracks(&watcher.playlist_from, &from_tracks)?;
    }

    tx.commit().map_err(crate::db::error::DbError::from)?;
    Ok(added)
}

/// Run one transfer for `watcher`, then schedule its next run and record the
/// outcome. The schedule moves forward even when the transfer fails.
pub fn sync_watcher(conn: &Connection, watcher: &WatcherRecord, now: DateTime<Utc>) -> SyncResult<usize> {
    let result = transfer(conn, watcher);
    let next_sync_at = now + Duration::seconds(watcher.sync_interval.as_secs() as i64);

    WatcherRepo::new(conn).record_sync(watcher.id, now, next_sync_at)?;

    let error = result.as_ref().err().map(|err| err.to_string());
    let count = result.as_ref().map(|count| *count).unwrap_or(0);
    TransferRepo::new(conn).create(watcher.id, count, error.as_deref(), now)?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{parse_timestamp, Database};
    use common::model::watcher::SyncInterval;

    fn tracks(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn setup(should_remove: bool) -> (Database, WatcherRecord) {
        let db = Database::open_in_memory().unwrap();
        let watcher = {
            let conn = db.conn().unwrap();
            let playlists = PlaylistRepo::new(&conn);
            playlists.save(&PlaylistRef::Liked, "Liked", &tracks(&["t1", "t2", "t3"]), Utc::now()).unwrap();
            playlists.save(&PlaylistRef::Id("b".into()), "B", &tracks(&["t2"]), Utc::now()).unwrap();

            let repo = WatcherRepo::new(&conn);
            let id = repo
                .create(&PlaylistRef::Liked, &PlaylistRef::Id("b".into()), should_remove, SyncInterval::Day, Utc::now())
                .unwrap();
            repo.by_id(id).unwrap().unwrap()
        };
        (db, watcher)
    }

    #[test]
    fn copies_missing_tracks_and_keeps_source() {
        let (db, watcher) = setup(false);
        let conn = db.conn().unwrap();

        assert_eq!(transfer(&conn, &watcher).unwrap(), 2);

        let repo = PlaylistRepo::new(&conn);
        assert_eq!(repo.track_ids(&PlaylistRef::Id("b".into())).unwrap(), tracks(&["t2", "t1", "t3"]));
        assert_eq!(repo.track_ids(&PlaylistRef::Liked).unwrap().len(), 3);
    }

    #[test]
    fn removal_empties_the_source() {
        let (db, watcher) = setup(true);
        let conn = db.conn().unwrap();

        assert_eq!(transfer(&conn, &watcher).unwrap(), 2);
        assert!(PlaylistRepo::new(&conn).track_ids(&PlaylistRef::Liked).unwrap().is_empty());
    }

    #[test]
    fn empty_source_is_a_no_op() {
        let (db, watcher) = setup(true);
        let conn = db.conn().unwrap();

        transfer(&conn, &watcher).unwrap();
        assert_eq!(transfer(&conn, &watcher).unwrap(), 0);
        assert_eq!(PlaylistRepo::new(&conn).track_ids(&PlaylistRef::Id("b".into())).unwrap().len(), 3);
    }

    #[test]
    fn liked_tracks_cannot_be_a_destination() {
        let (db, mut watcher) = setup(false);
        let conn = db.conn().unwrap();
        watcher.playlist_to = PlaylistRef::Liked;

        assert!(matches!(transfer(&conn, &watcher), Err(SyncError::InvalidTransfer(_))));
    }

    #[test]
    fn sync_schedules_next_run_and_records_transfer() {
        let (db, watcher) = setup(false);
        let conn = db.conn().unwrap();
        let now = parse_timestamp("2024-03-01T08:00:00Z").unwrap();

        assert_eq!(sync_watcher(&conn, &watcher, now).unwrap(), 2);

        let record = WatcherRepo::new(&conn).by_id(watcher.id).unwrap().unwrap();
        assert_eq!(record.last_sync_at, Some(now));
        assert_eq!(record.next_sync_at, Some(parse_timestamp("2024-03-02T08:00:00Z").unwrap()));

        let transfers = TransferRepo::new(&conn).for_watcher(watcher.id).unwrap();
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].num_tracks, 2);
        assert!(transfers[0].error.is_none());
    }

    #[test]
    fn failed_sync_is_recorded_and_rescheduled() {
        let (db, mut watcher) = setup(false);
        let conn = db.conn().unwrap();
        watcher.playlist_to = PlaylistRef::Liked;
        let now = parse_timestamp("2024-03-01T08:00:00Z").unwrap();

        assert!(sync_watcher(&conn, &watcher, now).is_err());

        let record = WatcherRepo::new(&conn).by_id(watcher.id).unwrap().unwrap();
        assert!(record.next_sync_at.is_some());
        let transfers = TransferRepo::new(&conn).for_watcher(watcher.id).unwrap();
        assert_eq!(transfers[0].num_tracks, 0);
        assert!(transfers[0].error.as_deref().unwrap().contains("cannot receive tracks"));
    }
}

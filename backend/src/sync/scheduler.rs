//! Periodic sync of due watchers.

use crate::config::SyncConfig;
use crate::db::error::DbResult;
use crate::db::watcher::WatcherRepo;
use crate::db::Database;
use actix_web::web;
use chrono::{DateTime, Utc};
use log::{error, info, warn};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Spawn the scheduler loop, unless scheduled sync is disabled.
pub fn spawn(db: web::Data<Database>, config: &SyncConfig) -> Option<JoinHandle<()>> {
    if !config.enabled {
        info!("Scheduled sync disabled");
        return None;
    }

    let period = Duration::from_secs(60 * config.interval_mins.max(1));
    info!("Checking for due watchers every {} minute(s)", period.as_secs() / 60);

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            if let Err(err) = sync_due(&db, Utc::now()) {
                error!("Scheduled sync failed: {}", err);
            }
        }
    }))
}

/// Sync every watcher due at `now`. A failing watcher does not stop the
/// others. Returns how many watchers were attempted.
pub fn sync_due(db: &Database, now: DateTime<Utc>) -> DbResult<usize> {
    let conn = db.conn()?;
    let watchers = WatcherRepo::new(&conn).due(now)?;

    if watchers.is_empty() {
        return Ok(0);
    }

    info!("Syncing {} due watcher(s)...", watchers.len());

    for watcher in &watchers {
        match super::sync_watcher(&conn, watcher, now) {
            Ok(count) => info!("Watcher {} transferred {} track(s)", watcher.id, count),
            Err(err) => warn!("Watcher {} failed to sync: {}", watcher.id, err),
        }
    }

    Ok(watchers.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::playlist::PlaylistRepo;
    use crate::db::parse_timestamp;
    use crate::model::playlist::PlaylistRef;
    use common::model::watcher::SyncInterval;

    #[test]
    fn syncs_only_due_watchers() {
        let db = Database::open_in_memory().unwrap();
        let now = parse_timestamp("2024-06-01T00:00:00Z").unwrap();
        {
            let conn = db.conn().unwrap();
            PlaylistRepo::new(&conn)
                .save(&PlaylistRef::Liked, "Liked", &["t1".to_string()], now)
                .unwrap();
            WatcherRepo::new(&conn)
                .create(&PlaylistRef::Liked, &PlaylistRef::Id("b".into()), false, SyncInterval::Hour, now)
                .unwrap();
        }

        assert_eq!(sync_due(&db, now).unwrap(), 1);
        assert_eq!(sync_due(&db, now).unwrap(), 0);
        assert_eq!(sync_due(&db, now + chrono::Duration::hours(1)).unwrap(), 1);

        let conn = db.conn().unwrap();
        assert_eq!(
            PlaylistRepo::new(&conn).track_ids(&PlaylistRef::Id("b".into())).unwrap(),
            vec!["t1".to_string()]
        );
    }

    #[test]
    fn failing_watcher_does_not_stop_the_rest() {
        let db = Database::open_in_memory().unwrap();
        let now = Utc::now();
        {
            let conn = db.conn().unwrap();
            PlaylistRepo::new(&conn)
                .save(&PlaylistRef::Id("a".into()), "A", &["t1".to_string()], now)
                .unwrap();
            conn.execute(
                "INSERT INTO watchers (playlist_from, playlist_to, should_remove, sync_interval, created_at) VALUES ('spotify:playlist:a', '_liked', 0, 'hour', ?1)",
                [crate::db::timestamp(now)],
            )
            .unwrap();
            WatcherRepo::new(&conn)
                .create(&PlaylistRef::Id("a".into()), &PlaylistRef::Id("c".into()), false, SyncInterval::Hour, now)
                .unwrap();
        }

        assert_eq!(sync_due(&db, now).unwrap(), 2);

        let conn = db.conn().unwrap();
        assert_eq!(PlaylistRepo::new(&conn).track_ids(&PlaylistRef::Id("c".into())).unwrap().len(), 1);
    }
}

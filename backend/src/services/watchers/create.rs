use crate::db::error::DbError;
use crate::db::playlist::PlaylistRepo;
use crate::db::watcher::WatcherRepo;
use crate::db::Database;
use crate::error::{ApiError, ApiResult};
use crate::model::playlist::PlaylistRef;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use common::model::watcher::SyncInterval;
use common::requests::CreateWatcherRequest;
use common::responses::Envelope;
use log::info;

pub(crate) async fn process(db: web::Data<Database>, payload: web::Json<CreateWatcherRequest>) -> ApiResult<HttpResponse> {
    let id = create_watcher(&db, &payload)?;
    info!("Created watcher {}", id);
    Ok(HttpResponse::Ok().json(Envelope::ok()))
}

fn invalid(message: impl Into<String>) -> ApiError {
    ApiError::InvalidFormData(message.into())
}

pub(crate) fn create_watcher(db: &Database, data: &CreateWatcherRequest) -> ApiResult<u32> {
    if data.playlist_from.trim().is_empty() || data.playlist_to.trim().is_empty() {
        return Err(invalid("Source and destination playlists are required."));
    }

    let sync_interval: SyncInterval = data
        .sync_interval
        .parse()
        .map_err(|_| invalid(format!("Invalid sync interval: {}", data.sync_interval)))?;

    let from = PlaylistRef::parse(&data.playlist_from).map_err(|err| invalid(err.to_string()))?;
    let to = PlaylistRef::parse(&data.playlist_to).map_err(|err| invalid(err.to_string()))?;

    if to == from {
        return Err(invalid("Cannot create watcher that transfers between the same playlist."));
    }

    if to == PlaylistRef::Liked {
        return Err(invalid("Liked Tracks cannot be used as a destination playlist."));
    }

    let conn = db.conn()?;

    if !PlaylistRepo::new(&conn).exists(&from)? {
        return Err(invalid("Source playlist does not exist."));
    }

    let repo = WatcherRepo::new(&conn);

    let existing_watchers = repo.for_source(&from)?;

    if existing_watchers.iter().any(|watcher| watcher.should_remove) {
        return Err(invalid("A watcher with track removal enabled already exists for this playlist."));
    }

    if data.should_remove && !existing_watchers.is_empty() {
        return Err(invalid(
            "A watcher already exists for this playlist. Disable track removal or remove the other watcher.",
        ));
    }

    repo.create(&from, &to, data.should_remove, sync_interval, Utc::now())
        .map_err(|err: DbError| {
            if err.is_constraint_violation() {
                invalid("Watcher already exists for these playlists.")
            } else {
                err.into()
            }
        })
}

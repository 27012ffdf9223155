use crate::db::watcher::WatcherRepo;
use crate::db::Database;
use crate::error::{ApiError, ApiResult};
use actix_web::{web, HttpResponse};
use chrono::Utc;
use common::responses::SyncResponse;
use log::info;

pub(crate) async fn process(db: web::Data<Database>, id: web::Path<u32>) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    let count = sync_now(&db, id)?;
    info!("Watcher {} transferred {} track(s) on request", id, count);

    Ok(HttpResponse::Ok().json(SyncResponse {
        success: true,
        num_tracks_transferred: count,
    }))
}

fn sync_now(db: &Database, id: u32) -> ApiResult<usize> {
    let conn = db.conn()?;
    let watcher = WatcherRepo::new(&conn).by_id(id)?.ok_or(ApiError::NotFoundError)?;

    Ok(crate::sync::sync_watcher(&conn, &watcher, Utc::now())?)
}

#[cfg(test)]
mod tests {
    use crate::db::playlist::PlaylistRepo;
    use crate::db::watcher::WatcherRepo;
    use crate::model::playlist::PlaylistRef;
    use crate::services::test_db;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use chrono::Utc;
    use common::model::watcher::SyncInterval;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn sync_transfers_and_reports_count() {
        let db = test_db();
        let id = {
            let conn = db.conn().unwrap();
            PlaylistRepo::new(&conn)
                .save(&PlaylistRef::Liked, "Liked", &["t1".to_string(), "t2".to_string()], Utc::now())
                .unwrap();
            WatcherRepo::new(&conn)
                .create(&PlaylistRef::Liked, &PlaylistRef::Id("b".into()), true, SyncInterval::Hour, Utc::now())
                .unwrap()
        };
        let app = test_app!(db.clone());

        let req = test::TestRequest::post().uri(&format!("/watchers/{id}/sync")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": true, "num_tracks_transferred": 2 }));

        let conn = db.conn().unwrap();
        let watcher = WatcherRepo::new(&conn).by_id(id).unwrap().unwrap();
        assert!(watcher.last_sync_at.is_some());
        assert!(PlaylistRepo::new(&conn).track_ids(&PlaylistRef::Liked).unwrap().is_empty());
    }

    #[actix_web::test]
    async fn sync_unknown_watcher_is_not_found() {
        let app = test_app!(test_db());

        let req = test::TestRequest::post().uri("/watchers/5/sync").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }
}

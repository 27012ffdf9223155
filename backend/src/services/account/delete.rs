use crate::db::Database;
use crate::error::ApiResult;
use actix_web::{web, HttpResponse};
use common::responses::Envelope;
use log::info;

pub(crate) async fn process(db: web::Data<Database>) -> ApiResult<HttpResponse> {
    db.clear_account()?;
    info!("Deleted account data");
    Ok(HttpResponse::Ok().json(Envelope::ok()))
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
    async fn delete_me_wipes_connected_data() {
        let db = test_db();
        {
            let conn = db.conn().unwrap();
            PlaylistRepo::new(&conn)
                .save(&PlaylistRef::Id("a".into()), "A", &["t1".to_string()], Utc::now())
                .unwrap();
            WatcherRepo::new(&conn)
                .create(&PlaylistRef::Id("a".into()), &PlaylistRef::Id("b".into()), false, SyncInterval::Day, Utc::now())
                .unwrap();
        }
        let app = test_app!(db.clone());

        let req = test::TestRequest::delete().uri("/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": true }));

        let conn = db.conn().unwrap();
        assert!(WatcherRepo::new(&conn).all().unwrap().is_empty());
        assert!(PlaylistRepo::new(&conn).list().unwrap().is_empty());
    }
}

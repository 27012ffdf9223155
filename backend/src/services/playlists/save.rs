use crate::db::playlist::PlaylistRepo;
use crate::db::Database;
use crate::error::{ApiError, ApiResult};
use crate::model::playlist::PlaylistRef;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use common::requests::SavePlaylistRequest;
use common::responses::Envelope;
use log::info;

pub(crate) async fn process(
    db: web::Data<Database>,
    id: web::Path<String>,
    payload: web::Json<SavePlaylistRequest>,
) -> ApiResult<HttpResponse> {
    let playlist = PlaylistRef::parse(&id).map_err(|err| ApiError::InvalidFormData(err.to_string()))?;

    if payload.name.trim().is_empty() {
        return Err(ApiError::InvalidFormData("Playlist name is required.".into()));
    }

    let conn = db.conn()?;
    PlaylistRepo::new(&conn).save(&playlist, payload.name.trim(), &payload.tracks, Utc::now())?;
    info!("Saved playlist {} with {} track(s)", playlist.to_value(), payload.tracks.len());

    Ok(HttpResponse::Ok().json(Envelope::ok()))
}

#[cfg(test)]
mod tests {
    use crate::services::test_db;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn saved_playlists_are_listed() {
        let app = test_app!(test_db());

        let req = test::TestRequest::put()
            .uri("/playlists/spotify:playlist:abc")
            .set_json(json!({ "name": "Road trip", "tracks": ["t1", "t2"] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::put()
            .uri("/playlists/_liked")
            .set_json(json!({ "name": "Liked Tracks", "tracks": ["t3"] }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/playlists").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(
            body["playlists"],
            json!([
                { "id": "_liked", "name": "Liked Tracks", "track_count": 1 },
                { "id": "spotify:playlist:abc", "name": "Road trip", "track_count": 2 },
            ])
        );
    }

    #[actix_web::test]
    async fn invalid_playlist_id_is_rejected() {
        let app = test_app!(test_db());

        let req = test::TestRequest::put()
            .uri("/playlists/not-a-playlist")
            .set_json(json!({ "name": "X" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid playlist: not-a-playlist");
    }
}

use crate::db::playlist::PlaylistRepo;
use crate::db::Database;
use crate::error::ApiResult;
use actix_web::{web, HttpResponse};
use common::responses::PlaylistsResponse;

pub(crate) async fn process(db: web::Data<Database>) -> ApiResult<HttpResponse> {
    let conn = db.conn()?;
    let playlists = PlaylistRepo::new(&conn).list()?;

    Ok(HttpResponse::Ok().json(PlaylistsResponse {
        success: true,
        playlists,
    }))
}

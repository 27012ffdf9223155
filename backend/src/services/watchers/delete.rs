use crate::db::transfer::TransferRepo;
use crate::db::watcher::WatcherRepo;
use crate::db::Database;
use crate::error::{ApiError, ApiResult};
use actix_web::{web, HttpResponse};
use common::responses::Envelope;
use log::info;

pub(crate) async fn process(db: web::Data<Database>, id: web::Path<u32>) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    delete_watcher(&db, id)?;
    info!("Deleted watcher {}", id);
    Ok(HttpResponse::Ok().json(Envelope::ok()))
}

fn delete_watcher(db: &Database, id: u32) -> ApiResult<()> {
    let conn = db.conn()?;
    let repo = WatcherRepo::new(&conn);

    if repo.by_id(id)?.is_none() {
        return Err(ApiError::NotFoundError);
    }

    TransferRepo::new(&conn).delete_for_watcher(id)?;
    repo.delete(id)?;
    Ok(())
}

use crate::db::transfer::TransferRepo;
use crate::db::watcher::WatcherRepo;
use crate::db::Database;
use crate::error::ApiResult;
use actix_web::{web, HttpResponse};
use common::model::watcher::Watcher;
use common::responses::WatchersResponse;

pub(crate) async fn process(db: web::Data<Database>) -> ApiResult<HttpResponse> {
    let watchers = list_watchers(&db)?;
    Ok(HttpResponse::Ok().json(WatchersResponse {
        success: true,
        watchers,
    }))
}

fn list_watchers(db: &Database) -> ApiResult<Vec<Watcher>> {
    let conn = db.conn()?;
    let transfers = TransferRepo::new(&conn);

    let mut watchers = Vec::new();
    for record in WatcherRepo::new(&conn).all()? {
        let mut watcher = Watcher::from(&record);
        watcher.last_error = transfers.latest(record.id)?.and_then(|transfer| transfer.error);
        watchers.push(watcher);
    }
    Ok(watchers)
}

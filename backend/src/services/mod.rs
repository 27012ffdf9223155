//! HTTP surface: one sub-module per resource, each exposing a
//! `configure_routes()` scope in the same way.

/// Initialized test service over the full route table and the given database.
#[cfg(test)]
macro_rules! test_app {
    ($db:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($db)
                .configure(crate::services::configure),
        )
        .await
    };
}

pub mod account;
pub mod playlists;
pub mod watchers;

use crate::error::ApiError;
use actix_web::web;

/// Register every resource scope plus the extractor configs that keep
/// malformed requests inside the success-envelope contract.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(1024 * 1024)
            .error_handler(|err, _req| ApiError::InvalidFormData(err.to_string()).into()),
    )
    .app_data(web::PathConfig::default().error_handler(|_err, _req| ApiError::NotFoundError.into()))
    .service(watchers::configure_routes())
    .service(account::configure_routes())
    .service(playlists::configure_routes());
}

#[cfg(test)]
pub(crate) fn test_db() -> web::Data<crate::db::Database> {
    web::Data::new(crate::db::Database::open_in_memory().expect("in-memory database"))
}

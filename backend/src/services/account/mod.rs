//! `DELETE /me`: removes the local account's connected data (watchers, their
//! transfer history and the mirrored playlists).

mod delete;

use actix_web::web::{delete, scope};
use actix_web::Scope;

const API_PATH: &str = common::routes::ME;

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", delete().to(delete::process))
}

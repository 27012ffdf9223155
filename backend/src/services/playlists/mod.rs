//! Endpoints under `/playlists`, the mirror the create form picks from:
//!
//! *   **`GET /playlists`** → `list::process`
//! *   **`PUT /playlists/{id}`** → `save::process`: create or replace a playlist
//!     and its tracks. `{id}` accepts the same values as a watcher source.

mod list;
mod save;

use actix_web::web::{get, put, scope};
use actix_web::Scope;

const API_PATH: &str = common::routes::PLAYLISTS;

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/{id}", put().to(save::process))
}

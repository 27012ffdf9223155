//! # Watcher Service Module
//!
//! Endpoints under `/watchers`:
//!
//! *   **`GET /watchers`** → `list::process`: every watcher as rendered by the page.
//! *   **`POST /watchers`** → `create::process`: validates a `CreateWatcherRequest`
//!     against the existing watchers and stores it.
//! *   **`DELETE /watchers/{id}`** → `delete::process`: removes a watcher and its
//!     transfer history.
//! *   **`POST /watchers/{id}/sync`** → `sync::process`: runs a transfer now and
//!     reports `num_tracks_transferred`.

mod create;
mod delete;
mod list;
mod sync;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

const API_PATH: &str = common::routes::WATCHERS;

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", delete().to(delete::process))
        .route("/{id}/sync", post().to(sync::process))
}

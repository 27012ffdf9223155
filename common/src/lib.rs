//! Types shared between the browser frontend and the backend: the watcher
//! draft posted by the create form, the read models rendered by the page, the
//! success envelope every endpoint answers with, and the endpoint paths.

pub mod model;
pub mod requests;
pub mod responses;
pub mod routes;

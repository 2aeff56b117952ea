//! Template API endpoints under `/api/templates`.
//!
//! - `POST /save`: persist a template's HTML and JSON artifacts under a
//!   name. Duplicate names without the overwrite flag return 409.
//! - `GET /`: list saved templates (name and last-update time).
//! - `GET /{name}`: the JSON artifact, for re-opening a template in the
//!   builder.
//! - `GET /{name}/html`: the rendered HTML artifact, ready to send.

mod get;
mod list;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/templates";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/save", post().to(save::process))
        .route("", get().to(list::process))
        .route("/{name}/html", get().to(get::html))
        .route("/{name}", get().to(get::process))
}

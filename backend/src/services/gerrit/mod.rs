//! Gerrit helper endpoint: resolves a project name plus version tag to the
//! browseable tag URL. Used by clients that want to preview the resolution
//! the generator will apply.

mod tag_url;

use actix_web::Scope;
use actix_web::web::{get, scope};

const API_PATH: &str = "/api/gerrit";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/tag_url", get().to(tag_url::process))
}
